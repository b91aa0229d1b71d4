/* This file is part of the TrackTube project - https://github.com/tracktube/tracktube
*
*  Copyright (C) 2026 the TrackTube contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::rc::Rc;

use yew::prelude::*;

use tracktube_youtube::duration::format_video_duration;
use tracktube_youtube::watch_link;

use crate::components::icon::{Icon, IconType};
use crate::state::{PlaylistSummary, VideoEntry, WatchState};

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub summary: Rc<PlaylistSummary>,
    pub watch_state: WatchState,
    pub on_toggle_watched: Callback<Rc<str>>,
    pub on_toggle_highlight: Callback<Rc<str>>,
}

/// The checklist itself: one row per playlist entry, in playlist order.
#[function_component]
pub fn VideoList(props: &VideoListProps) -> Html {
    html! {
        <div class="video-list">
            <h3>{"Videos:"}</h3>
            { for props.summary.videos.iter().enumerate().map(|(index, entry)| html! {
                <VideoRow
                    key={index}
                    entry={entry.clone()}
                    watched={props.watch_state.is_watched(&entry.video_id)}
                    highlighted={props.watch_state.is_highlighted(&entry.video_id)}
                    on_toggle_watched={props.on_toggle_watched.clone()}
                    on_toggle_highlight={props.on_toggle_highlight.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoRowProps {
    entry: VideoEntry,
    watched: bool,
    highlighted: bool,
    on_toggle_watched: Callback<Rc<str>>,
    on_toggle_highlight: Callback<Rc<str>>,
}

#[function_component]
fn VideoRow(props: &VideoRowProps) -> Html {
    let onchange = {
        let callback = props.on_toggle_watched.clone();
        let id = props.entry.video_id.clone();
        Callback::from(move |_: Event| callback.emit(id.clone()))
    };
    let onclick = {
        let callback = props.on_toggle_highlight.clone();
        let id = props.entry.video_id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let class = classes!("video-row", props.highlighted.then_some("highlighted"));
    let icon = if props.highlighted {
        IconType::StarFilled
    } else {
        IconType::Star
    };
    html! {
        <div {class}>
            <input type="checkbox" checked={props.watched} {onchange} />
            <span class="highlight-toggle clickable" {onclick}>
                <Icon r#type={icon} tooltip="Toggle highlight" />
            </span>
            <span class="video-label">
                {format_video_duration(&props.entry.title, &props.entry.duration)}
            </span>
            <a class="video-link" href={watch_link(&props.entry.video_id).to_string()}>{"watch"}</a>
        </div>
    }
}
