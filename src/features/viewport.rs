//! Host drawing-area size

/// Visible drawing area of the host window, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[cfg(test)]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from fractional logical size (as reported by the windowing layer).
    /// Negative or NaN dimensions clamp to zero.
    pub fn from_logical(width: f32, height: f32) -> Self {
        fn to_px(v: f32) -> u32 {
            if v.is_finite() && v > 0.0 {
                v.round() as u32
            } else {
                0
            }
        }
        Self {
            width: to_px(width),
            height: to_px(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_logical_rounds() {
        assert_eq!(
            ViewportSize::from_logical(1199.6, 900.2),
            ViewportSize::new(1200, 900)
        );
    }

    #[test]
    fn test_from_logical_clamps_invalid() {
        assert_eq!(ViewportSize::from_logical(-5.0, f32::NAN), ViewportSize::default());
        assert!(ViewportSize::from_logical(-5.0, 10.0).is_empty());
    }
}
