//! Theme for the birthday card
//! White page with a black-bordered card by default, with a dark variant

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::features::PaletteColor;

pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const SEMIBOLD_WEIGHT: Weight = Weight::Semibold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const PAGE: Color = color!(0x111111);
    pub const CARD: Color = color!(0x1a1a1a);
    pub const CARD_BORDER: Color = color!(0xe5e5e5);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_ACCENT: Color = color!(0x60a5fa);
    pub const BUTTON: Color = color!(0xffffff);
    pub const BUTTON_HOVER: Color = color!(0xd4d4d4);
    pub const BUTTON_TEXT: Color = color!(0x000000);
}

// Light mode colors
mod light {
    use super::*;
    pub const PAGE: Color = color!(0xffffff);
    pub const CARD: Color = color!(0xffffff);
    pub const CARD_BORDER: Color = color!(0x000000);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
    pub const TEXT_ACCENT: Color = color!(0x2563eb);
    pub const BUTTON: Color = color!(0x000000);
    pub const BUTTON_HOVER: Color = color!(0x1f2937);
    pub const BUTTON_TEXT: Color = color!(0xffffff);
}

/// Neutral color for unlit candles and popped balloons
pub const NEUTRAL: Color = color!(0xd1d5db);

/// Shadow under the hovered card
pub const CARD_SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

pub fn page_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PAGE
    } else {
        light::PAGE
    }
}

pub fn card_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

pub fn card_border(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD_BORDER
    } else {
        light::CARD_BORDER
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Recipient name color
pub fn text_accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_ACCENT
    } else {
        light::TEXT_ACCENT
    }
}

/// Scale a color's alpha channel
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Map a palette entry to its display color (CSS named colors)
pub fn palette_color(entry: PaletteColor) -> Color {
    match entry {
        PaletteColor::Blue => color!(0x0000ff),
        PaletteColor::Red => color!(0xff0000),
        PaletteColor::Yellow => color!(0xffff00),
        PaletteColor::Green => color!(0x008000),
        PaletteColor::Purple => color!(0x800080),
        PaletteColor::Orange => color!(0xffa500),
        PaletteColor::Pink => color!(0xffc0cb),
    }
}

/// Palette entry or the neutral color
pub fn element_color(entry: Option<PaletteColor>) -> Color {
    entry.map(palette_color).unwrap_or(NEUTRAL)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background behind the card
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(page_bg(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card container, faded in by `opacity`
pub fn card(theme: &Theme, opacity: f32, hovered: bool) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(card_bg(theme), opacity))),
        text_color: Some(with_alpha(text_primary(theme), opacity)),
        border: Border {
            radius: 12.0.into(),
            width: 2.0,
            color: with_alpha(card_border(theme), opacity),
        },
        shadow: if hovered {
            Shadow {
                color: with_alpha(CARD_SHADOW, opacity),
                offset: Vector::new(0.0, 12.0),
                blur_radius: 24.0,
            }
        } else {
            Shadow::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// (background, foreground) of the celebrate button
pub fn celebrate_button_colors(theme: &Theme, enabled: bool) -> (Color, Color) {
    let (bg, fg) = if is_dark(theme) {
        (dark::BUTTON, dark::BUTTON_TEXT)
    } else {
        (light::BUTTON, light::BUTTON_TEXT)
    };
    if enabled {
        (bg, fg)
    } else {
        (with_alpha(bg, 0.5), with_alpha(fg, 0.7))
    }
}

/// "Now Celebrate!" button
pub fn celebrate_button(theme: &Theme, status: button::Status) -> button::Style {
    let (bg, fg) = celebrate_button_colors(theme, true);
    let hover = if is_dark(theme) {
        dark::BUTTON_HOVER
    } else {
        light::BUTTON_HOVER
    };
    let base = button::Style {
        background: Some(Background::Color(bg)),
        text_color: fg,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover)),
            ..base
        },
        button::Status::Disabled => {
            let (bg, fg) = celebrate_button_colors(theme, false);
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: fg,
                ..base
            }
        }
        _ => base,
    }
}
