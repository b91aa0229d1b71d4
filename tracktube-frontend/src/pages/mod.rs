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

use strum::IntoStaticStr;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header_footer::{Footer, Header};

mod home;
mod playlist;

use home::HomePage;
use playlist::PlaylistPage;

#[derive(Clone, Routable, PartialEq, IntoStaticStr)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/playlist/:id")]
    Playlist { id: AttrValue },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[allow(clippy::needless_pass_by_value)]
pub fn render_main_route(route: MainRoute) -> Html {
    let document = window()
        .expect("window should exist")
        .document()
        .expect("document should exist");
    document.set_title(
        match &route {
            MainRoute::Home => "TrackTube".to_string(),
            MainRoute::Playlist { id } => format!("Playlist {id} - TrackTube"),
            MainRoute::NotFound => "Page not found - TrackTube".to_string(),
        }
        .as_str(),
    );
    let route_html = match route {
        MainRoute::Home => html! {<HomePage />},
        MainRoute::Playlist { ref id } => html! {<PlaylistPage id={id.clone()} />},
        MainRoute::NotFound => html! {
            <>
                <h2>{"404 - Not found"}</h2>
                <h3>{"Looks like you've entered an invalid URL"}</h3>
                <Link<MainRoute> to={MainRoute::Home}>{"Return to home page"}</Link<MainRoute>>
            </>
        },
    };
    let route_name: &'static str = (&route).into();
    html! {
        <>
            <Header />
            <div id="content" data-route={route_name}>
                {route_html}
            </div>
            <Footer />
        </>
    }
}
