//! Ordered color palettes for candles, balloons and confetti
//!
//! Palettes are assigned cyclically: element `i` takes `palette[i % len]`.

/// Named palette entries
///
/// Kept UI-agnostic; `crate::ui::theme::palette_color` maps them to iced colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Blue,
    Red,
    Yellow,
    Green,
    Purple,
    Orange,
    Pink,
}

impl PaletteColor {
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Purple => "purple",
            PaletteColor::Orange => "orange",
            PaletteColor::Pink => "pink",
        }
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const CANDLE_PALETTE: &[PaletteColor] = &[
    PaletteColor::Blue,
    PaletteColor::Red,
    PaletteColor::Yellow,
    PaletteColor::Green,
    PaletteColor::Purple,
    PaletteColor::Orange,
];

pub const BALLOON_PALETTE: &[PaletteColor] = &[
    PaletteColor::Blue,
    PaletteColor::Red,
    PaletteColor::Yellow,
    PaletteColor::Green,
    PaletteColor::Purple,
    PaletteColor::Orange,
];

/// Confetti uses one extra entry (pink)
pub const CONFETTI_PALETTE: &[PaletteColor] = &[
    PaletteColor::Blue,
    PaletteColor::Red,
    PaletteColor::Yellow,
    PaletteColor::Green,
    PaletteColor::Purple,
    PaletteColor::Orange,
    PaletteColor::Pink,
];

/// Cyclic palette lookup. Returns `None` only for an empty palette.
pub fn cyclic(palette: &[PaletteColor], index: usize) -> Option<PaletteColor> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_wraps_around() {
        assert_eq!(cyclic(CANDLE_PALETTE, 0), Some(PaletteColor::Blue));
        assert_eq!(cyclic(CANDLE_PALETTE, 5), Some(PaletteColor::Orange));
        assert_eq!(cyclic(CANDLE_PALETTE, 6), Some(PaletteColor::Blue));
        assert_eq!(cyclic(CONFETTI_PALETTE, 6), Some(PaletteColor::Pink));
        assert_eq!(cyclic(CONFETTI_PALETTE, 7), Some(PaletteColor::Blue));
    }

    #[test]
    fn test_empty_palette() {
        assert_eq!(cyclic(&[], 3), None);
    }

    #[test]
    fn test_palette_lengths() {
        assert_eq!(CANDLE_PALETTE.len(), 6);
        assert_eq!(BALLOON_PALETTE.len(), 6);
        assert_eq!(CONFETTI_PALETTE.len(), 7);
    }
}
