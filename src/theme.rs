use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::error::SiteError;

pub const PRIMARY: &str = "#1A535C";

/// Parses `#RRGGBB` into its channels.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), SiteError> {
    let invalid = || SiteError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Palette, typography and the layout helpers every page shares.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                color: #333333;
                background: #ffffff;
                line-height: 1.5;
            }
            h1, h2, h3, h4 {
                margin: 0;
                color: #1A535C;
                line-height: 1.2;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            main {
                overflow: hidden;
            }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1rem;
            }
            .section {
                padding: 5rem 0;
            }
            .section-alt {
                background: #F7F9FA;
            }
            .section-header {
                text-align: center;
                margin-bottom: 4rem;
            }
            .section-header h2 {
                font-size: 2.25rem;
            }
            .section-header p {
                margin: 1rem auto 0;
                max-width: 48rem;
                font-size: 1.125rem;
                color: rgba(51, 51, 51, 0.8);
            }
            .grid-2 {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 3rem;
                align-items: center;
            }
            .grid-3 {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2.5rem;
            }
            .narrow {
                max-width: 72rem;
                margin: 0 auto;
            }
            .split-text h2 {
                font-size: 2.25rem;
                margin-bottom: 1.5rem;
            }
            .split-text p {
                font-size: 1.25rem;
                color: rgba(51, 51, 51, 0.8);
                margin-bottom: 2rem;
            }
            .eyebrow {
                font-weight: 700;
                color: #4ECDC4;
                margin: 0 0 0.5rem;
            }
            .btn {
                display: inline-block;
                font-weight: 700;
                padding: 1rem 2rem;
                border-radius: 9999px;
                border: none;
                cursor: pointer;
                font-size: 1.125rem;
                transition: background 0.2s, color 0.2s;
            }
            .btn-accent {
                background: #4ECDC4;
                color: #1A535C;
            }
            .btn-accent:hover {
                background: #1A535C;
                color: #ffffff;
            }
            .btn-primary {
                background: #1A535C;
                color: #ffffff;
            }
            .btn-primary:hover {
                background: #4ECDC4;
                color: #1A535C;
            }
            .text-link {
                font-weight: 700;
                color: #1A535C;
                font-size: 1.125rem;
            }
            .text-link:hover {
                color: #4ECDC4;
            }
            .media-frame {
                width: 100%;
                height: 24rem;
                border-radius: 0.5rem;
                overflow: hidden;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
            }
            .media-frame img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .icon {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                line-height: 1;
            }
            .counter {
                text-align: center;
            }
            .counter-value {
                font-size: 3.75rem;
                font-weight: 900;
                color: #4ECDC4;
            }
            .counter-label {
                font-size: 1.125rem;
                color: rgba(255, 255, 255, 0.8);
                margin-top: 0.5rem;
            }
            .reveal {
                opacity: 0;
                transform: translateY(50px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal.visible {
                opacity: 1;
                transform: none;
            }
            .reveal .reveal-item {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.5s ease-out, transform 0.5s ease-out;
            }
            .reveal.visible .reveal-item {
                opacity: 1;
                transform: none;
            }
            @media (max-width: 768px) {
                .grid-2, .grid-3 {
                    grid-template-columns: 1fr;
                }
                .section {
                    padding: 4rem 0;
                }
                .section-header h2 {
                    font-size: 1.875rem;
                }
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_colors() {
        assert_eq!(hex_to_rgb(PRIMARY).unwrap(), (0x1A, 0x53, 0x5C));
        assert_eq!(hex_to_rgb("#4ECDC4").unwrap(), (0x4E, 0xCD, 0xC4));
        assert_eq!(hex_to_rgb("#a8dadc").unwrap(), (0xA8, 0xDA, 0xDC));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["1A535C", "#1A535", "#GGGGGG", "#1A535C0", "#ééé"] {
            assert!(matches!(hex_to_rgb(bad), Err(SiteError::InvalidColor(_))), "{}", bad);
        }
    }
}
