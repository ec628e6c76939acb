use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod form_view;
    pub mod nav_dots;
    pub mod navbar;
    pub mod notice;
    pub mod reveal;
    pub mod speaker_card;
}
mod forms {
    pub mod submit;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod api;
    pub mod dom;
    pub mod reveal;
    pub mod scroll;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to Ogbomoso Ignite"}</Link<Route>>
            </div>
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting Ogbomoso Ignite frontend");
    yew::Renderer::<App>::new().render();
}
