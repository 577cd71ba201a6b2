//! Full-window confetti renderer
//!
//! Draws the particles of a [`ConfettiField`]. The field owns the simulation;
//! this program only paints its current snapshot.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::features::{ConfettiField, ParticleShape};
use crate::ui::theme;

struct ConfettiCanvas<'a> {
    field: &'a ConfettiField,
}

impl<'a, Message> Program<Message> for ConfettiCanvas<'a> {
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

        for particle in self.field.particles() {
            let color = theme::palette_color(particle.color);
            let (w, h) = (particle.width, particle.height);

            frame.with_save(|frame| {
                frame.translate(Vector::new(particle.x, particle.y));
                frame.rotate(particle.angle);
                match particle.shape {
                    ParticleShape::Circle => {
                        frame.fill(&Path::circle(Point::ORIGIN, w / 2.0), color);
                    }
                    ParticleShape::Square | ParticleShape::Strip => {
                        frame.fill_rectangle(
                            Point::new(-w / 2.0, -h / 2.0),
                            Size::new(w, h),
                            color,
                        );
                    }
                }
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size confetti layer
pub fn view<'a, Message: 'a>(field: &'a ConfettiField) -> Element<'a, Message> {
    Canvas::new(ConfettiCanvas { field })
        .width(Fill)
        .height(Fill)
        .into()
}
