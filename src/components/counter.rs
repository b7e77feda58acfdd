use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::animation::Tween;
use crate::components::reveal::use_in_view;
use crate::config;
use crate::format::group_thousands;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    #[prop_or_default]
    pub from: i64,
    pub to: i64,
    pub label: String,
    #[prop_or_default]
    pub prefix: String,
    #[prop_or_default]
    pub suffix: String,
}

fn display(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_thousands(value.unsigned_abs()))
    } else {
        group_thousands(value as u64)
    }
}

/// Counts from `from` to `to` the first time it is half visible.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::COUNTER_THRESHOLD, true);
    let value = use_state_eq(|| props.from);

    {
        let value = value.clone();
        let label = props.label.clone();
        use_effect_with_deps(
            move |(in_view, from, to): &(bool, i64, i64)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *in_view {
                    debug!("Counter '{}' started", label);
                    let tween = Tween::new(*from, *to, config::COUNTER_DURATION_MS);
                    let started = Date::now();
                    let handle = interval_handle.clone();
                    let interval = Interval::new(config::FRAME_MS, move || {
                        let elapsed = Date::now() - started;
                        value.set(tween.value_at(elapsed));
                        if tween.is_done(elapsed) {
                            // Can't drop the interval from inside its own tick
                            let handle = handle.clone();
                            Timeout::new(0, move || {
                                handle.borrow_mut().take();
                            })
                            .forget();
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (in_view, props.from, props.to),
        );
    }

    html! {
        <div ref={node} class="counter">
            <span class="counter-value">
                { &props.prefix }
                { display(*value) }
                { &props.suffix }
            </span>
            <p class="counter-label">{ &props.label }</p>
        </div>
    }
}
