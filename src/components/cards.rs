use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct IconCardProps {
    pub icon: Icon,
    pub title: String,
    #[prop_or_default]
    pub children: Children,
}

/// Round icon badge, title and a short paragraph. Used for "what we do"
/// blocks and partnership benefits.
#[function_component(FeatureCard)]
pub fn feature_card(props: &IconCardProps) -> Html {
    html! {
        <div class="feature-card reveal-item">
            <div class="badge">
                <Glyph icon={props.icon} />
            </div>
            <h3>{ &props.title }</h3>
            <p>{ for props.children.iter() }</p>
        </div>
    }
}

#[function_component(BenefitCard)]
pub fn benefit_card(props: &IconCardProps) -> Html {
    html! {
        <div class="feature-card benefit-card reveal-item">
            <div class="badge large">
                <Glyph icon={props.icon} />
            </div>
            <h3>{ &props.title }</h3>
            <p>{ for props.children.iter() }</p>
        </div>
    }
}

#[function_component(ContactInfoCard)]
pub fn contact_info_card(props: &IconCardProps) -> Html {
    html! {
        <div class="contact-info-card reveal-item">
            <div class="badge">
                <Glyph icon={props.icon} />
            </div>
            <div>
                <h3>{ &props.title }</h3>
                <div class="contact-info-body">{ for props.children.iter() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ValueCardProps {
    pub icon: Icon,
    pub title: String,
    /// Badge background, any CSS color.
    pub color: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ValueCard)]
pub fn value_card(props: &ValueCardProps) -> Html {
    html! {
        <div class="value-card reveal-item">
            <div class="badge large" style={format!("background: {}; color: #ffffff;", props.color)}>
                <Glyph icon={props.icon} />
            </div>
            <h3>{ &props.title }</h3>
            <p>{ for props.children.iter() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaCardProps {
    pub icon: Icon,
    pub title: String,
    pub href: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AreaCard)]
pub fn area_card(props: &AreaCardProps) -> Html {
    html! {
        <div class="area-card reveal-item">
            <div class="area-card-bubble"></div>
            <div class="area-card-body">
                <div class="badge dark">
                    <Glyph icon={props.icon} />
                </div>
                <h3>{ &props.title }</h3>
                <p>{ for props.children.iter() }</p>
                <a href={props.href.clone()} class="area-card-link">
                    {"Ver Projetos "}
                    <Glyph icon={Icon::ArrowRight} class="nudge" />
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card reveal-item">
            <p class="stat-title">{ &props.title }</p>
            <p class="stat-value">{ &props.value }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportLinkProps {
    pub title: String,
    pub date: String,
    pub href: String,
}

#[function_component(ReportLink)]
pub fn report_link(props: &ReportLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="report-link reveal-item"
        >
            <div class="report-info">
                <Glyph icon={Icon::FilePdf} class="report-icon" />
                <div>
                    <h4>{ &props.title }</h4>
                    <p>{ &props.date }</p>
                </div>
            </div>
            <Glyph icon={Icon::ArrowRight} class="nudge" />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepProps {
    pub number: String,
    pub title: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Step)]
pub fn step(props: &StepProps) -> Html {
    html! {
        <div class="step reveal-item">
            <div class="step-number">{ &props.number }</div>
            <div>
                <h3>{ &props.title }</h3>
                <p>{ for props.children.iter() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberProps {
    pub name: String,
    pub role: String,
    pub img_src: String,
    pub description: String,
    #[prop_or_default]
    pub social_links: Vec<(String, String)>,
}

#[function_component(TeamMemberCard)]
pub fn team_member_card(props: &TeamMemberProps) -> Html {
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={classes!("team-card", "reveal-item", (*hovered).then(|| "hovered"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="team-photo">
                <img src={props.img_src.clone()} alt={format!("Foto de {}", props.name)} loading="lazy" />
                <div class="team-shade"></div>
                <div class="team-caption">
                    <h3>{ &props.name }</h3>
                    <p>{ &props.role }</p>
                </div>
            </div>
            <div class="team-body">
                <p>{ &props.description }</p>
                if !props.social_links.is_empty() {
                    <div class="team-links">
                        {
                            for props.social_links.iter().map(|(platform, url)| html! {
                                <a href={url.clone()}>{ platform }</a>
                            })
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: String,
    pub text: String,
    pub button_text: String,
    pub to: Route,
}

/// Closing call-to-action shared by the inner pages.
#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    html! {
        <section class="section cta-banner">
            <div class="container">
                <h2>{ &props.title }</h2>
                <p>{ &props.text }</p>
                <Link<Route> to={props.to.clone()} classes="btn btn-accent">
                    { &props.button_text }
                </Link<Route>>
            </div>
        </section>
    }
}

/// Styles for every card in this module; rendered once by the app shell.
#[function_component(CardStyles)]
pub fn card_styles() -> Html {
    html! {
        <style>
            {r#"
            .badge {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 4rem;
                height: 4rem;
                border-radius: 9999px;
                background: #A8DADC;
                color: #1A535C;
                font-size: 1.75rem;
                margin-bottom: 1rem;
                flex-shrink: 0;
            }
            .badge.large {
                width: 5rem;
                height: 5rem;
                font-size: 2.25rem;
                margin: 0 auto 1.5rem;
            }
            .badge.dark {
                background: #1A535C;
                color: #ffffff;
            }
            .feature-card {
                padding: 1.5rem;
            }
            .feature-card h3,
            .value-card h3,
            .area-card h3 {
                font-size: 1.5rem;
                margin-bottom: 0.75rem;
            }
            .feature-card p,
            .value-card p {
                color: rgba(51, 51, 51, 0.8);
            }
            .benefit-card {
                background: #ffffff;
                padding: 2rem;
                border-radius: 0.5rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                text-align: center;
            }
            .contact-info-card {
                display: flex;
                align-items: flex-start;
                gap: 1.5rem;
            }
            .contact-info-card h3 {
                font-size: 1.5rem;
                margin-bottom: 0.25rem;
            }
            .contact-info-body p {
                margin: 0;
                font-size: 1.125rem;
                color: rgba(51, 51, 51, 0.8);
            }
            .value-card {
                text-align: center;
                padding: 2rem;
                background: #ffffff;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .value-card:hover {
                transform: translateY(-0.5rem);
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
            }
            .area-card {
                position: relative;
                overflow: hidden;
                background: #ffffff;
                padding: 2rem;
                border-radius: 0.5rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                transition: box-shadow 0.3s;
            }
            .area-card:hover {
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
            }
            .area-card-bubble {
                position: absolute;
                right: -3rem;
                bottom: -3rem;
                width: 8rem;
                height: 8rem;
                border-radius: 9999px;
                background: #1A535C;
                opacity: 0.15;
                transition: transform 0.5s, opacity 0.5s;
            }
            .area-card:hover .area-card-bubble {
                transform: scale(10);
                opacity: 1;
            }
            .area-card-body {
                position: relative;
                z-index: 10;
                display: flex;
                flex-direction: column;
                transition: color 0.3s;
            }
            .area-card:hover .area-card-body,
            .area-card:hover .area-card-body h3 {
                color: #ffffff;
            }
            .area-card-link {
                font-weight: 700;
                margin-top: auto;
            }
            .nudge {
                margin-left: 0.25rem;
                transition: transform 0.2s;
            }
            .area-card:hover .nudge,
            .report-link:hover .nudge {
                transform: translateX(0.5rem);
            }
            .stat-card {
                background: #ffffff;
                padding: 1.5rem;
                border-radius: 0.5rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                text-align: center;
            }
            .stat-title {
                margin: 0;
                font-size: 1.125rem;
                color: rgba(51, 51, 51, 0.8);
            }
            .stat-value {
                margin: 0.5rem 0 0;
                font-size: 2.25rem;
                font-weight: 700;
                color: #1A535C;
            }
            .report-link {
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: #ffffff;
                padding: 1.5rem;
                border-radius: 0.5rem;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                transition: box-shadow 0.3s;
            }
            .report-link:hover {
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
            }
            .report-info {
                display: flex;
                align-items: center;
            }
            .report-icon {
                font-size: 1.875rem;
                margin-right: 1rem;
            }
            .report-info h4 {
                margin: 0;
            }
            .report-info p {
                margin: 0;
                font-size: 0.875rem;
                color: #6b7280;
            }
            .step {
                display: flex;
                align-items: flex-start;
                gap: 1.5rem;
            }
            .step-number {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 4rem;
                height: 4rem;
                flex-shrink: 0;
                border-radius: 9999px;
                background: #1A535C;
                color: #ffffff;
                font-weight: 700;
                font-size: 1.5rem;
            }
            .step h3 {
                font-size: 1.5rem;
                margin-bottom: 0.5rem;
            }
            .step p {
                margin: 0;
                font-size: 1.125rem;
                color: rgba(51, 51, 51, 0.8);
            }
            .team-card {
                background: #ffffff;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                overflow: hidden;
                transition: box-shadow 0.3s;
            }
            .team-card.hovered {
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
            }
            .team-photo {
                position: relative;
                height: 24rem;
                overflow: hidden;
            }
            .team-photo img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                object-position: center 10%;
                transition: transform 0.5s;
            }
            .team-card.hovered .team-photo img {
                transform: scale(1.1);
            }
            .team-shade {
                position: absolute;
                inset: 0;
                background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
            }
            .team-caption {
                position: absolute;
                left: 1rem;
                bottom: 1rem;
                color: #ffffff;
            }
            .team-caption h3 {
                color: #ffffff;
                font-size: 1.25rem;
            }
            .team-caption p {
                margin: 0;
                font-size: 0.875rem;
                opacity: 0.9;
            }
            .team-body {
                padding: 1.5rem;
            }
            .team-body p {
                color: rgba(51, 51, 51, 0.8);
            }
            .team-links {
                display: flex;
                gap: 0.75rem;
            }
            .team-links a {
                color: #1A535C;
            }
            .team-links a:hover {
                color: #4ECDC4;
            }
            .cta-banner {
                text-align: center;
            }
            .cta-banner h2 {
                font-size: 2.25rem;
            }
            .cta-banner p {
                max-width: 48rem;
                margin: 1.5rem auto 2rem;
                font-size: 1.125rem;
            }
            "#}
        </style>
    }
}
