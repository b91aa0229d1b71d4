use yew::prelude::*;
use yew_router::prelude::*;

use tracktube_youtube::YoutubeClient;

mod components;
mod constants;
mod contexts;
mod hooks;
mod pages;
mod state;
mod utils;

use constants::YOUTUBE_API_KEY;
use contexts::ApiContext;
use pages::{render_main_route, MainRoute};
use utils::RcEq;

#[function_component]
fn App() -> Html {
    // One client for the whole session; the key is baked in at build time.
    let api = use_memo((), |_| {
        RcEq::new(YoutubeClient::new(YOUTUBE_API_KEY.unwrap_or_default()))
    });

    html! {
        <ContextProvider<ApiContext> context={(*api).clone()}>
            <BrowserRouter>
                if YOUTUBE_API_KEY.is_none() {
                    <div class="config-warning">
                        {"TRACKTUBE_API_KEY was not set when this build was made - the API will reject every fetch."}
                    </div>
                }
                <Switch<MainRoute> render={render_main_route} />
            </BrowserRouter>
        </ContextProvider<ApiContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
