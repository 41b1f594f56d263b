use log::info;
use yew::prelude::*;

mod bootstrap;
mod classes;
mod config;
mod content;
mod dom;
mod error;
mod layout;
mod menu;
mod anim {
    pub mod cursor;
    pub mod easing;
    pub mod entrance;
    pub mod frame;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod timing;
}
mod hooks {
    pub mod entrance;
    pub mod scroll_reveal;
    pub mod smooth_scroll;
}
mod components {
    pub mod cursor;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Panic hook and logger, before anything can fail
    bootstrap::init();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
