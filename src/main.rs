use yew::prelude::*;
use log::info;

mod config;
mod error;
mod catalog;
mod order;
mod handoff;
mod components {
    pub mod icons;
    pub mod toast;
    pub mod nav;
    pub mod faq;
}
mod pages {
    pub mod landing;
}

use components::{nav::Nav, toast::Toaster};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Toaster>
            <Nav />
            <Landing />
        </Toaster>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", env!("CARGO_PKG_NAME"));
    yew::Renderer::<App>::new().render();
}
