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

use cloneable_errors::ErrorContext;
use gloo_console::error;
use yew::prelude::*;

use crate::components::form::PlaylistForm;
use crate::components::summary::PlaylistInfo;
use crate::components::video_list::VideoList;
use crate::contexts::ApiContext;
use crate::hooks::use_async_suspension;
use crate::state::{PlaylistSummary, WatchAction, WatchState};

#[derive(Properties, PartialEq)]
pub struct PlaylistPageProps {
    pub id: AttrValue,
}

#[function_component]
pub fn PlaylistPage(props: &PlaylistPageProps) -> Html {
    let fallback = html! {
        <center><b>{"Fetching playlist..."}</b></center>
    };
    html! {
        <>
            <PlaylistForm />
            <Suspense {fallback}>
                <PlaylistLoader id={props.id.clone()} />
            </Suspense>
        </>
    }
}

async fn fetch_playlist(api: &ApiContext, id: &str) -> Result<Rc<PlaylistSummary>, ErrorContext> {
    let video_ids = api.playlist_video_ids(id).await?;
    let videos = api.video_details(&video_ids).await?;
    Ok(Rc::new(PlaylistSummary::build(videos)))
}

#[function_component]
fn PlaylistLoader(props: &PlaylistPageProps) -> HtmlResult {
    let api: ApiContext = use_context().expect("ApiContext should be available");
    let result = use_async_suspension(
        |(api, id)| async move {
            let outcome = fetch_playlist(&api, &id).await;
            if let Err(ref e) = outcome {
                error!(format!("Failed to fetch playlist {id}: {e:?}"));
            }
            outcome
        },
        (api, props.id.clone()),
    )?;

    match *result {
        Err(ref e) => Ok(html! {
            <div class="fetch-error">
                <b>{"Failed to fetch the playlist."}</b>
                <pre>{format!("{e:?}")}</pre>
            </div>
        }),
        Ok(ref summary) => Ok(html! {
            <PlaylistView id={props.id.clone()} summary={summary.clone()} />
        }),
    }
}

#[derive(Properties, PartialEq)]
struct PlaylistViewProps {
    id: AttrValue,
    summary: Rc<PlaylistSummary>,
}

#[function_component]
fn PlaylistView(props: &PlaylistViewProps) -> Html {
    let watch_state = use_reducer(WatchState::default);
    {
        // A fresh summary starts from a clean slate.
        let watch_state = watch_state.clone();
        use_memo(props.summary.clone(), move |_| {
            watch_state.dispatch(WatchAction::Reset);
        });
    }

    let on_toggle_watched = {
        let watch_state = watch_state.clone();
        Callback::from(move |id: Rc<str>| watch_state.dispatch(WatchAction::ToggleWatched(id)))
    };
    let on_toggle_highlight = {
        let watch_state = watch_state.clone();
        Callback::from(move |id: Rc<str>| watch_state.dispatch(WatchAction::ToggleHighlight(id)))
    };

    html! {
        <>
            <PlaylistInfo
                id={props.id.clone()}
                summary={props.summary.clone()}
                progress={watch_state.progress(&props.summary)}
            />
            <VideoList
                summary={props.summary.clone()}
                watch_state={(*watch_state).clone()}
                {on_toggle_watched}
                {on_toggle_highlight}
            />
        </>
    }
}
