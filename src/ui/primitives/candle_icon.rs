//! Birthday cake with a single candle, drawn on a Canvas
//!
//! # Design
//!
//! Implements `canvas::Program` with a generic Message type. Click handling is
//! left to the caller (wrap in a `mouse_area`).

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Point, Rectangle, Renderer, Size, Theme, color, mouse};

const FLAME_OUTER: Color = color!(0xffa500);
const FLAME_INNER: Color = color!(0xffff66);

#[derive(Debug, Clone, Copy)]
pub struct CandleIcon {
    /// Cake and candle color
    pub color: Color,
    /// Draw the flame
    pub lit: bool,
    /// Uniform scale around the center (0.0 - 1.x)
    pub scale: f32,
}

impl CandleIcon {
    pub fn new(color: Color, lit: bool) -> Self {
        Self {
            color,
            lit,
            scale: 1.0,
        }
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.0);
        self
    }
}

impl<Message> Program<Message> for CandleIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let side = bounds.width.min(bounds.height) * self.scale;
        if side < 0.5 {
            return vec![frame.into_geometry()];
        }

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        // Unit-square coordinates to frame coordinates
        let at = |x: f32, y: f32| Point::new(center.x + (x - 0.5) * side, center.y + (y - 0.5) * side);
        let size = |w: f32, h: f32| Size::new(w * side, h * side);

        // Bottom tier, top tier, candle
        frame.fill(&Path::rectangle(at(0.1, 0.62), size(0.8, 0.33)), self.color);
        frame.fill(&Path::rectangle(at(0.22, 0.42), size(0.56, 0.2)), self.color);
        frame.fill(&Path::rectangle(at(0.46, 0.2), size(0.08, 0.22)), self.color);

        // Frosting line between tiers
        frame.fill(
            &Path::rectangle(at(0.1, 0.62), size(0.8, 0.04)),
            Color::from_rgba(1.0, 1.0, 1.0, 0.45),
        );

        if self.lit {
            frame.fill(&Path::circle(at(0.5, 0.12), 0.075 * side), FLAME_OUTER);
            frame.fill(&Path::circle(at(0.5, 0.135), 0.035 * side), FLAME_INNER);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a candle icon element of `size` x `size`
pub fn view<'a, Message: 'a>(icon: CandleIcon, size: f32) -> Element<'a, Message> {
    Canvas::new(icon).width(size).height(size).into()
}
