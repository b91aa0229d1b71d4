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

use gloo_console::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use tracktube_youtube::extract_playlist_id;

use crate::pages::MainRoute;

/// Playlist URL entry form.
///
/// Submitting runs the id extraction; only a URL with a `list` parameter
/// navigates (and thereby fetches). Everything else shows an inline hint
/// and leaves the page as it is.
#[function_component]
pub fn PlaylistForm() -> Html {
    let navigator = use_navigator().expect("navigator should exist");
    let url = use_state_eq(AttrValue::default);
    let hint = use_state_eq(|| None::<AttrValue>);

    let oninput = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            url.set(input.value().into());
        })
    };

    let onsubmit = {
        let url = url.clone();
        let hint = hint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match extract_playlist_id(&url) {
                Ok(Some(id)) => {
                    hint.set(None);
                    navigator.push(&MainRoute::Playlist { id: id.into() });
                }
                Ok(None) => {
                    hint.set(Some(
                        "That URL has no 'list' parameter - paste a playlist URL.".into(),
                    ));
                }
                Err(e) => {
                    warn!(format!("Rejected playlist URL {:?}: {e:?}", *url));
                    hint.set(Some("That doesn't look like a valid URL.".into()));
                }
            }
        })
    };

    html! {
        <form class="playlist-form" {onsubmit}>
            <label for="playlist-url">{"Enter playlist URL:"}</label>
            <input
                id="playlist-url"
                type="text"
                placeholder="https://www.youtube.com/playlist?list=..."
                value={(*url).clone()}
                {oninput}
                required=true
            />
            <button type="submit">{"Track"}</button>
            if let Some(ref hint) = *hint {
                <span class="form-hint">{hint.clone()}</span>
            }
        </form>
    }
}
