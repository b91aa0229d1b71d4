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

use tracktube_youtube::duration::seconds_to_hms;
use tracktube_youtube::playlist_link;

use crate::state::PlaylistSummary;

#[derive(Properties, PartialEq)]
pub struct PlaylistInfoProps {
    pub id: AttrValue,
    pub summary: Rc<PlaylistSummary>,
    pub progress: f64,
}

/// Aggregate counts and the watched-time progress bar.
#[function_component]
pub fn PlaylistInfo(props: &PlaylistInfoProps) -> Html {
    html! {
        <div class="playlist-info">
            <p>
                {format!("Total videos in playlist: {}", props.summary.total_videos)}
                {" - "}
                <a href={playlist_link(&props.id).to_string()}>{"open on YouTube"}</a>
            </p>
            <p>{format!("Total length: {}", seconds_to_hms(props.summary.total_length_seconds))}</p>
            <div class="progress-container">
                <p>{format!("Progress: {:.2}%", props.progress)}</p>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%", props.progress)} />
                </div>
            </div>
        </div>
    }
}
