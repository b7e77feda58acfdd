use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod donation;
mod error;
mod format;
mod theme;

mod components {
    pub mod cards;
    pub mod carousel;
    pub mod chart;
    pub mod counter;
    pub mod faq_item;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod reveal;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod donate;
    pub mod home;
    pub mod not_found;
    pub mod partners;
    pub mod projects;
    pub mod transparency;
}

use components::{cards::CardStyles, footer::Footer, header::Header};
use pages::{
    about::About, contact::Contact, donate::Donate, home::Home, not_found::NotFound,
    partners::Partners, projects::Projects, transparency::TransparencyPage,
};
use theme::GlobalStyles;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sobre")]
    About,
    #[at("/projetos")]
    Projects,
    #[at("/transparencia")]
    Transparency,
    #[at("/parceiros")]
    Partners,
    #[at("/contato")]
    Contact,
    #[at("/doar")]
    Donate,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Transparency => {
            info!("Rendering Transparency page");
            html! { <TransparencyPage /> }
        }
        Route::Partners => {
            info!("Rendering Partners page");
            html! { <Partners /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Donate => {
            info!("Rendering Donate page");
            html! { <Donate /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <CardStyles />
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        // Rendering still works without a logger
        web_sys::console::warn_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", config::ORG_NAME);
    if content::transparency().is_err() {
        warn!("Embedded transparency data failed validation");
    }
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_navigation_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Donate.to_path(), "/doar");
        assert_eq!(Route::recognize("/transparencia"), Some(Route::Transparency));
    }

    #[test]
    fn advertised_but_unbuilt_links_fall_through_to_not_found() {
        for path in ["/voluntario", "/projetos/apoio", "/projetos/destaque"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{}", path);
        }
    }
}
