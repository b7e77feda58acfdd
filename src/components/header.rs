use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{ScrollDirection, ScrollTracker};
use crate::config;
use crate::error::{js_error, window, SiteError};
use crate::Route;

#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    pub title: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { title: "Sobre Nós", route: Route::About },
    NavLink { title: "Projetos", route: Route::Projects },
    NavLink { title: "Transparência", route: Route::Transparency },
    NavLink { title: "Parceiros", route: Route::Partners },
    NavLink { title: "Contato", route: Route::Contact },
];

/// Window scroll subscription; removed from the window when dropped.
struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

fn listen_scroll(on_change: UseStateSetter<ScrollDirection>) -> Result<ScrollListener, SiteError> {
    let window = window()?;
    let start = window.scroll_y().unwrap_or(0.0);
    let mut tracker = ScrollTracker::new(start, config::SCROLL_DELTA_PX);

    let scroll_window = window.clone();
    let callback = Closure::wrap(Box::new(move || {
        if let Ok(y) = scroll_window.scroll_y() {
            on_change.set(tracker.update(y));
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(|e| SiteError::Listener(js_error(e)))?;

    Ok(ScrollListener { window, callback })
}

#[hook]
pub fn use_scroll_direction() -> ScrollDirection {
    let direction = use_state_eq(|| ScrollDirection::Up);

    {
        let setter = direction.setter();
        use_effect_with_deps(
            move |_| {
                let listener = match listen_scroll(setter) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        warn!("Header will stay pinned: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    *direction
}

/// Whether the header slides out of view. It never hides over an open menu.
pub fn header_hidden(direction: ScrollDirection, menu_open: bool) -> bool {
    direction == ScrollDirection::Down && !menu_open
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn link_followed(self) -> Self {
        Self { open: false }
    }

    pub fn route_changed(self) -> Self {
        Self { open: false }
    }
}

/// Element id named by a location hash, if any.
pub fn anchor_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// Lands on the anchored element when the URL carries one, else on the top.
fn scroll_on_navigation() -> Result<(), SiteError> {
    let window = window()?;
    let hash = window
        .location()
        .hash()
        .map_err(|e| SiteError::Dom(js_error(e)))?;

    let anchored = anchor_target(&hash)
        .and_then(|id| window.document()?.get_element_by_id(id));
    match anchored {
        Some(element) => element.scroll_into_view(),
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
    Ok(())
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state_eq(MenuState::default);
    let direction = use_scroll_direction();
    let route = use_route::<Route>();

    // The new page renders after this effect, so the scroll waits a tick
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |route: &Option<Route>| {
                debug!("Route changed to {:?}", route);
                menu.set(menu.route_changed());
                Timeout::new(0, || {
                    if let Err(e) = scroll_on_navigation() {
                        warn!("Could not reset scroll position: {}", e);
                    }
                })
                .forget();
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.link_followed());
        })
    };

    let menu_open = menu.is_open();

    let is_active = |link: &NavLink| route.as_ref() == Some(&link.route);

    html! {
        <>
            <header class={classes!("site-header", header_hidden(direction, menu_open).then(|| "hidden"))}>
                <div class="header-content">
                    <Link<Route> to={Route::Home} classes="header-logo">
                        { config::ORG_NAME }
                    </Link<Route>>

                    <nav class="header-links">
                        {
                            for NAV_LINKS.iter().map(|link| html! {
                                <Link<Route>
                                    to={link.route.clone()}
                                    classes={classes!("header-link", is_active(link).then(|| "active"))}
                                >
                                    { link.title }
                                </Link<Route>>
                            })
                        }
                    </nav>

                    <div class="header-cta">
                        <Link<Route> to={Route::Donate} classes="donate-button">
                            {"Doe Agora"}
                        </Link<Route>>
                    </div>

                    <button
                        class={classes!("burger-menu", menu_open.then(|| "open"))}
                        onclick={toggle_menu}
                        aria-label="Alternar Menu"
                        aria-expanded={menu_open.to_string()}
                    >
                        <span class="bar top"></span>
                        <span class="bar middle"></span>
                        <span class="bar bottom"></span>
                    </button>
                </div>
            </header>

            if menu_open {
                <div class="mobile-menu">
                    <nav class="mobile-links">
                        {
                            for NAV_LINKS.iter().map(|link| html! {
                                <div class="mobile-item" onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={link.route.clone()}
                                        classes={classes!("mobile-link", is_active(link).then(|| "active"))}
                                    >
                                        { link.title }
                                    </Link<Route>>
                                </div>
                            })
                        }
                    </nav>
                    <div class="mobile-item mobile-cta" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Donate} classes="donate-button large">
                            {"Doe Agora"}
                        </Link<Route>>
                    </div>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(26, 83, 92, 0.9);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transform: translateY(0);
                    transition: transform 0.35s ease-in-out;
                }
                .site-header.hidden {
                    transform: translateY(-100%);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    color: #ffffff;
                }
                .header-logo {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                    z-index: 50;
                }
                .header-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .header-link {
                    color: #ffffff;
                    transition: color 0.2s;
                }
                .header-link:hover,
                .header-link.active {
                    color: #4ECDC4;
                }
                .header-link.active {
                    font-weight: 700;
                }
                .donate-button {
                    background: #4ECDC4;
                    color: #1A535C;
                    font-weight: 700;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    transition: background 0.2s;
                }
                .donate-button:hover {
                    background: #ffffff;
                }
                .donate-button.large {
                    padding: 0.75rem 2rem;
                    font-size: 1.125rem;
                }
                .burger-menu {
                    display: none;
                    position: relative;
                    z-index: 50;
                    width: 1.75rem;
                    height: 1.5rem;
                    flex-direction: column;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }
                .burger-menu .bar {
                    display: block;
                    height: 2px;
                    background: #ffffff;
                    border-radius: 9999px;
                    transition: transform 0.3s, opacity 0.2s, width 0.3s;
                }
                .burger-menu .top { width: 100%; }
                .burger-menu .middle { width: 83%; }
                .burger-menu .bottom { width: 66%; }
                .burger-menu.open .top {
                    transform: translateY(11px) rotate(45deg);
                }
                .burger-menu.open .middle {
                    opacity: 0;
                    transform: translateX(-20px);
                }
                .burger-menu.open .bottom {
                    width: 100%;
                    transform: translateY(-11px) rotate(-45deg);
                }
                .mobile-menu {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 40;
                    padding: 5rem 0 2rem;
                    background: rgba(26, 83, 92, 0.95);
                    backdrop-filter: blur(16px);
                    border-radius: 0 0 1rem 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .mobile-links {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .mobile-link {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .mobile-link.active,
                .mobile-link:hover {
                    color: #4ECDC4;
                }
                .mobile-cta {
                    margin-top: 3rem;
                    display: flex;
                    justify-content: center;
                }
                @media (max-width: 768px) {
                    .header-links,
                    .header-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn header_hides_only_when_scrolling_down_with_menu_closed() {
        assert!(header_hidden(ScrollDirection::Down, false));
        assert!(!header_hidden(ScrollDirection::Down, true));
        assert!(!header_hidden(ScrollDirection::Up, false));
        assert!(!header_hidden(ScrollDirection::Up, true));
    }

    #[test]
    fn burger_toggles_and_navigation_closes_the_menu() {
        let menu = MenuState::default();
        assert!(!menu.is_open());

        let opened = menu.toggled();
        assert!(opened.is_open());
        assert!(!opened.toggled().is_open());
        assert!(opened.toggled().toggled().is_open());

        assert!(!opened.link_followed().is_open());
        assert!(!opened.route_changed().is_open());
        assert!(!menu.route_changed().is_open());
    }

    #[test]
    fn location_hash_names_the_scroll_target() {
        assert_eq!(anchor_target("#equipe"), Some("equipe"));
        assert_eq!(anchor_target("equipe"), Some("equipe"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn nav_links_point_at_distinct_pages() {
        let paths: Vec<String> = NAV_LINKS.iter().map(|l| l.route.to_path()).collect();
        assert_eq!(
            paths,
            ["/sobre", "/projetos", "/transparencia", "/parceiros", "/contato"]
        );
        assert!(NAV_LINKS.iter().all(|l| l.route != Route::Donate));
    }
}
