use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose widget state while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const ORG_NAME: &str = "FAMN";
pub const ORG_TAGLINE: &str =
    "Solidariedade, humanismo e cooperação. Trabalhando para apoiar quem precisa.";
pub const HERO_SUBTITLE: &str = "Um coletivo de uns para muitos.";

pub const HQ_ADDRESS: [&str; 3] = [
    "Travessa Capitão Mário Tinoco, s/n - Barreto",
    "Niterói, RJ",
    "Brasil",
];
pub const HQ_PHONE: &str = "+55 (21) 99700-6405";
pub const HQ_EMAIL: &str = "fanibras@gmail.com";

pub const OFFICE_ADDRESS: [&str; 2] = ["Lorem Ipsum Dolor, 123", "Sit Amet, Consectetur - SP"];
pub const OFFICE_EMAIL: &str = "lorem@ipsumdolor.com";
pub const OFFICE_PHONE: &str = "(11) 98765-4321";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3675.123456!2d-43.10647!3d-22.90278!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x9bda33a676c0c7%3A0xae85c3264c9c7ecd!2sBarreto%2C%20Niter%C3%B3i%20-%20RJ!5e0!3m2!1spt-BR!2sbr!4v1635789012345";

pub const SOCIAL_FACEBOOK: &str = "#";
pub const SOCIAL_INSTAGRAM: &str = "#";
pub const SOCIAL_TWITTER: &str = "#";

pub const PLACEHOLDER_IMAGE: &str = "/default.png";

// Animation timings
pub const COUNTER_DURATION_MS: f64 = 2500.0;
pub const FRAME_MS: u32 = 16;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_STAGGER_MS: usize = 100;
pub const SCROLL_DELTA_PX: f64 = 10.0;
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
