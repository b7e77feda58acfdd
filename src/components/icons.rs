use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    ChartLine,
    ChartBar,
    Handshake,
    Heart,
    Calendar,
    Lock,
    CreditCard,
    Barcode,
    MapMarker,
    Envelope,
    Phone,
    Seedling,
    ArrowRight,
    ArrowUp,
    FilePdf,
    Building,
    Bullhorn,
    Certificate,
    Bullseye,
    Eye,
    Facebook,
    Instagram,
    Twitter,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::ChartLine => "📈",
            Icon::ChartBar => "📊",
            Icon::Handshake => "🤝",
            Icon::Heart => "❤",
            Icon::Calendar => "📅",
            Icon::Lock => "🔒",
            Icon::CreditCard => "💳",
            Icon::Barcode => "▥",
            Icon::MapMarker => "📍",
            Icon::Envelope => "✉",
            Icon::Phone => "📞",
            Icon::Seedling => "🌱",
            Icon::ArrowRight => "→",
            Icon::ArrowUp => "↑",
            Icon::FilePdf => "📄",
            Icon::Building => "🏢",
            Icon::Bullhorn => "📣",
            Icon::Certificate => "🏅",
            Icon::Bullseye => "🎯",
            Icon::Eye => "👁",
            Icon::Facebook => "f",
            Icon::Instagram => "◎",
            Icon::Twitter => "𝕏",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: String,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            { props.icon.glyph() }
        </span>
    }
}
