use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config;
use crate::error::{js_error, SiteError};

/// Whether an observer entry counts as "in view" for the given threshold.
/// Browsers report ratios like 0.4999 when the threshold is 0.5.
pub fn crossed(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + 1e-3 >= threshold
}

/// Transition delay of the `index`-th `reveal-item` inside a section.
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index * config::REVEAL_STAGGER_MS)
}

/// Gives each `reveal-item` under `section` its own transition delay, in
/// document order, however deep or numerous the items are.
fn stagger_items(section: &Element) -> Result<(), SiteError> {
    let items = section
        .query_selector_all(".reveal-item")
        .map_err(|e| SiteError::Dom(js_error(e)))?;
    for index in 0..items.length() {
        let Some(item) = items.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        item.style()
            .set_property("transition-delay", &stagger_delay(index as usize))
            .map_err(|e| SiteError::Dom(js_error(e)))?;
    }
    Ok(())
}

/// Owns an IntersectionObserver together with the JS callback it calls.
/// Dropping it disconnects the observer.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    threshold: f64,
    once: bool,
    on_change: UseStateSetter<bool>,
) -> Result<ViewportObserver, SiteError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if crossed(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                on_change.set(true);
                if once {
                    observer.disconnect();
                }
            } else if !once {
                on_change.set(false);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| SiteError::Observer(js_error(e)))?;
    observer.observe(element);

    Ok(ViewportObserver {
        observer,
        _callback: callback,
    })
}

/// Flips to `true` once the referenced element is at least `threshold` visible.
/// If observation is not possible the element is treated as visible so that
/// content never stays hidden.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, once: bool) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .ok_or(SiteError::MissingNode("reveal target"))
                    .and_then(|element| observe(&element, threshold, once, visible.setter()));

                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Scroll animation disabled: {}", e);
                        visible.set(true);
                        None
                    }
                };

                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: String,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub id: Option<String>,
}

/// Section wrapper that fades and slides its content in when scrolled into view.
/// Descendants marked `reveal-item` follow one after another.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.threshold, props.once);

    {
        let node = node.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    if let Some(Err(e)) = node.cast::<Element>().map(|section| stagger_items(&section)) {
                        warn!("Reveal items will appear together: {}", e);
                    }
                }
                || ()
            },
            visible,
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), visible.then(|| "visible"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{crossed, stagger_delay};

    #[test]
    fn stagger_keeps_growing_past_six_items() {
        assert_eq!(stagger_delay(0), "0ms");
        assert_eq!(stagger_delay(3), "300ms");
        assert_eq!(stagger_delay(7), "700ms");
        assert_eq!(stagger_delay(12), "1200ms");
    }

    #[test]
    fn threshold_tolerates_rounding() {
        assert!(crossed(true, 0.4999, 0.5));
        assert!(crossed(true, 0.8, 0.5));
        assert!(!crossed(true, 0.3, 0.5));
        assert!(!crossed(false, 1.0, 0.5));
        assert!(crossed(true, 0.0, 0.0));
    }
}
