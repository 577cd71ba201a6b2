//! Balloon drawn on a Canvas
//!
//! Scaling to zero is the "popped" state; the caller animates `scale`.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};

#[derive(Debug, Clone, Copy)]
pub struct BalloonIcon {
    pub color: Color,
    pub scale: f32,
}

impl BalloonIcon {
    pub fn new(color: Color) -> Self {
        Self { color, scale: 1.0 }
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.0);
        self
    }
}

impl<Message> Program<Message> for BalloonIcon {
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
        let at = |x: f32, y: f32| Point::new(center.x + (x - 0.5) * side, center.y + (y - 0.5) * side);

        // Body
        frame.fill(&Path::circle(at(0.5, 0.36), 0.3 * side), self.color);

        // Knot
        let knot = Path::new(|builder| {
            builder.move_to(at(0.5, 0.64));
            builder.line_to(at(0.44, 0.72));
            builder.line_to(at(0.56, 0.72));
            builder.close();
        });
        frame.fill(&knot, self.color);

        // String
        let string = Path::new(|builder| {
            builder.move_to(at(0.5, 0.72));
            builder.quadratic_curve_to(at(0.42, 0.84), at(0.52, 0.98));
        });
        frame.stroke(
            &string,
            Stroke::default()
                .with_width((0.03 * side).max(1.0))
                .with_color(Color { a: 0.6, ..self.color }),
        );

        // Highlight
        frame.fill(
            &Path::circle(at(0.4, 0.26), 0.06 * side),
            Color::from_rgba(1.0, 1.0, 1.0, 0.35),
        );

        vec![frame.into_geometry()]
    }
}

pub fn view<'a, Message: 'a>(icon: BalloonIcon, size: f32) -> Element<'a, Message> {
    Canvas::new(icon).width(size).height(size).into()
}
