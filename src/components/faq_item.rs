use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    #[prop_or_default]
    pub children: Children,
}

fn faq_classes(expanded: bool) -> Classes {
    classes!("faq", expanded.then(|| "expanded"))
}

/// Question row that slides its answer open. The answer stays mounted so the
/// height transition can run both ways.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state_eq(|| false);

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class={faq_classes(*expanded)}>
            <button type="button" class="faq-summary" {onclick} aria-expanded={expanded.to_string()}>
                <span>{ &props.question }</span>
                <span class="faq-marker" aria-hidden="true">{"+"}</span>
            </button>
            <div class="faq-body" aria-hidden={(!*expanded).to_string()}>
                <div class="faq-body-inner">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .faq {
                    background: #ffffff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .faq-summary {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 700;
                    color: #333333;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-marker {
                    font-size: 1.5rem;
                    color: #1A535C;
                    transition: transform 0.25s ease-out;
                }
                .faq.expanded .faq-marker {
                    transform: rotate(45deg);
                }
                .faq-body {
                    display: grid;
                    grid-template-rows: 0fr;
                    transition: grid-template-rows 0.3s ease-out;
                }
                .faq.expanded .faq-body {
                    grid-template-rows: 1fr;
                }
                .faq-body-inner {
                    overflow: hidden;
                    padding: 0 1.5rem;
                }
                .faq.expanded .faq-body-inner {
                    padding-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_class_follows_state() {
        assert!(faq_classes(true).contains("expanded"));
        assert!(!faq_classes(false).contains("expanded"));
        assert!(faq_classes(false).contains("faq"));
    }
}
