use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::{next_index, prev_index};
use crate::config;

#[derive(Clone, PartialEq, Debug)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl Slide {
    pub fn new(src: &str, alt: &str, caption: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            caption: caption.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or(true)]
    pub autoplay: bool,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let hovered = use_state(|| false);
    let len = props.slides.len();

    // Autoplay, paused while the pointer is over the carousel
    {
        let index = index.clone();
        let millis = if props.autoplay && len > 1 && !*hovered {
            config::CAROUSEL_INTERVAL_MS
        } else {
            0
        };
        use_interval(
            move || {
                index.set(next_index(*index, len));
            },
            millis,
        );
    }

    if len == 0 {
        return html! {};
    }
    // The slide list may shrink between renders
    let current = (*index).min(len - 1);

    let go_prev = {
        let index = index.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = prev_index(*index, len);
            debug!("Carousel moved to slide {}", next);
            index.set(next);
        })
    };

    let go_next = {
        let index = index.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = next_index(*index, len);
            debug!("Carousel moved to slide {}", next);
            index.set(next);
        })
    };

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let slide = &props.slides[current];

    html! {
        <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="carousel-frame">
                {
                    for props.slides.iter().enumerate().map(|(i, s)| html! {
                        <img
                            key={s.src.clone() + &i.to_string()}
                            src={s.src.clone()}
                            alt={s.alt.clone()}
                            class={classes!("carousel-image", (i == current).then(|| "active"))}
                            loading="lazy"
                        />
                    })
                }
                <p class="carousel-caption">{ &slide.caption }</p>
            </div>
            if len > 1 {
                <div class="carousel-controls">
                    <button class="carousel-arrow" aria-label="Anterior" onclick={go_prev}>{"‹"}</button>
                    <div class="carousel-dots">
                        {
                            for (0..len).map(|i| {
                                let index = index.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    index.set(i);
                                });
                                html! {
                                    <button
                                        class={classes!("carousel-dot", (i == current).then(|| "active"))}
                                        aria-label={format!("Ir para imagem {}", i + 1)}
                                        {onclick}
                                    />
                                }
                            })
                        }
                    </div>
                    <button class="carousel-arrow" aria-label="Próxima" onclick={go_next}>{"›"}</button>
                </div>
            }
            <style>
                {r#"
                .carousel {
                    position: relative;
                    width: 100%;
                }
                .carousel-frame {
                    position: relative;
                    width: 100%;
                    height: 24rem;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    background: #F7F9FA;
                }
                .carousel-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.6s ease-in-out;
                }
                .carousel-image.active {
                    opacity: 1;
                }
                .carousel-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    margin: 0;
                    padding: 1rem 1.5rem;
                    color: #ffffff;
                    font-weight: 600;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .carousel-arrow {
                    border: none;
                    background: #1A535C;
                    color: #ffffff;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-arrow:hover {
                    background: #4ECDC4;
                    color: #1A535C;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    background: #A8DADC;
                    cursor: pointer;
                    padding: 0;
                }
                .carousel-dot.active {
                    background: #1A535C;
                }
                "#}
            </style>
        </div>
    }
}
