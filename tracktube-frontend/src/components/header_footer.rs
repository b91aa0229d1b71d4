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

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::constants::built_info;
use crate::pages::MainRoute;

#[function_component]
pub fn Header() -> Html {
    html! {
        <div id="header">
            <h1 class="undecorated-link">
                <Link<MainRoute> to={MainRoute::Home}>{"TrackTube"}</Link<MainRoute>>
            </h1>
            <span class="tagline">{"YouTube playlist watch tracker"}</span>
        </div>
    }
}

#[function_component]
pub fn Footer() -> Html {
    html! {
        <div id="footer">
            <span>
                {format!("TrackTube v{}", built_info::PKG_VERSION)}
                {" - built with "}
                {built_info::RUSTC_VERSION}
            </span>
            <span>{"Playlist data comes from the YouTube Data API."}</span>
        </div>
    }
}
