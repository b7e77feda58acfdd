use chrono::Datelike;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::NAV_LINKS;
use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::Route;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {} {}. Todos os direitos reservados.", year, config::ORG_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let on_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let socials = [
        (Icon::Facebook, config::SOCIAL_FACEBOOK, "Facebook"),
        (Icon::Instagram, config::SOCIAL_INSTAGRAM, "Instagram"),
        (Icon::Twitter, config::SOCIAL_TWITTER, "Twitter"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h2>{ config::ORG_NAME }</h2>
                    <p>{ config::ORG_TAGLINE }</p>
                </div>

                <nav class="footer-links">
                    {
                        for NAV_LINKS.iter().map(|link| html! {
                            <Link<Route> to={link.route.clone()} classes="footer-link">
                                { link.title }
                            </Link<Route>>
                        })
                    }
                </nav>

                <div class="footer-cta">
                    <Link<Route> to={Route::Donate} classes="donate-button">
                        {"Doe Agora"}
                    </Link<Route>>
                </div>
            </div>

            <div class="footer-socials">
                {
                    for socials.iter().map(|(icon, href, name)| html! {
                        <a href={*href} aria-label={*name} target="_blank" rel="noopener noreferrer">
                            <Glyph icon={*icon} />
                        </a>
                    })
                }
            </div>

            <button class="back-to-top" onclick={on_top} aria-label="Voltar ao topo">
                <Glyph icon={Icon::ArrowUp} />
            </button>

            <div class="footer-copyright">{ copyright(year) }</div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    background: #1A535C;
                    color: #ffffff;
                    padding: 3rem 1rem;
                    margin-top: 3rem;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-brand h2 {
                    color: #ffffff;
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .footer-brand p {
                    max-width: 20rem;
                    font-size: 0.875rem;
                    opacity: 0.9;
                    margin: 0;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-link:hover {
                    color: #4ECDC4;
                }
                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                    font-size: 1.25rem;
                }
                .footer-socials a:hover {
                    color: #4ECDC4;
                }
                .back-to-top {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    background: #4ECDC4;
                    color: #1A535C;
                    border: none;
                    border-radius: 9999px;
                    width: 3rem;
                    height: 3rem;
                    font-size: 1.25rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.15s, background 0.2s;
                }
                .back-to-top:hover {
                    background: #ffffff;
                    transform: scale(1.1);
                }
                .back-to-top:active {
                    transform: scale(0.95);
                }
                .footer-copyright {
                    text-align: center;
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    opacity: 0.7;
                }
                @media (max-width: 768px) {
                    .footer-content,
                    .footer-links {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright;

    #[test]
    fn copyright_names_year_and_org() {
        assert_eq!(copyright(2026), "© 2026 FAMN. Todos os direitos reservados.");
    }
}
