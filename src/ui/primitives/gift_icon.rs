//! Small gift box glyph for the celebrate button

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Element, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Gift glyph drawn in the celebrate button's text color
#[derive(Debug, Clone, Copy)]
pub struct GiftIcon {
    pub enabled: bool,
}

impl<Message> Program<Message> for GiftIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let side = bounds.width.min(bounds.height);
        let at = |x: f32, y: f32| Point::new(x * side, y * side);
        let size = |w: f32, h: f32| Size::new(w * side, h * side);
        let (ribbon, color) = theme::celebrate_button_colors(theme, self.enabled);

        // Lid, box, ribbon, bow
        frame.fill(&Path::rectangle(at(0.05, 0.28), size(0.9, 0.22)), color);
        frame.fill(&Path::rectangle(at(0.12, 0.5), size(0.76, 0.45)), color);
        frame.fill(&Path::rectangle(at(0.45, 0.28), size(0.1, 0.67)), ribbon);
        frame.fill(&Path::circle(at(0.36, 0.18), 0.1 * side), color);
        frame.fill(&Path::circle(at(0.64, 0.18), 0.1 * side), color);

        vec![frame.into_geometry()]
    }
}

pub fn view<'a, Message: 'a>(icon: GiftIcon, size: f32) -> Element<'a, Message> {
    Canvas::new(icon).width(size).height(size).into()
}
