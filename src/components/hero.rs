use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn default_subtitle() -> String {
    config::HERO_SUBTITLE.to_string()
}

fn default_button_text() -> String {
    "Saiba Mais".to_string()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    #[prop_or_else(default_subtitle)]
    pub subtitle: String,
    pub description: String,
    #[prop_or_else(default_button_text)]
    pub button_text: String,
    #[prop_or(Route::About)]
    pub button_link: Route,
}

/// Full-height opening banner shared by most pages.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="hero">
            <div class="hero-content">
                <h1>{ &props.title }</h1>
                <h2>{ &props.subtitle }</h2>
                <p>{ &props.description }</p>
                <Link<Route> to={props.button_link.clone()} classes="hero-cta">
                    { &props.button_text }
                </Link<Route>>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(180deg, #ffffff 0%, #F7F9FA 100%);
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    color: rgba(26, 83, 92, 0.9);
                    padding: 0 2rem;
                    max-width: 56rem;
                }
                .hero-content h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-content h2 {
                    font-size: 1.875rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .hero-content p {
                    font-size: 1.25rem;
                    opacity: 0.9;
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: rgba(26, 83, 92, 0.9);
                    color: #ffffff;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1.125rem;
                    transition: background 0.2s, color 0.2s;
                }
                .hero-cta:hover {
                    background: #4ECDC4;
                    color: #1A535C;
                }
                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 2.25rem;
                    }
                    .hero-content h2 {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
