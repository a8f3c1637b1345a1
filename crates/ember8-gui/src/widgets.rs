use iced::mouse::Cursor;
use iced::widget::canvas;
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme};

use ember8_core::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAMEBUFFER_SIZE, Framebuffer};

use crate::Message;

/// Scales the 64x32 monochrome framebuffer to the widget bounds, one filled
/// rectangle per lit cell, white on black.
///
/// Holds its own snapshot of the cells; [`refresh`](Screen::refresh) copies
/// a new one in whenever the emulator reported a change.
pub struct Screen {
    pixels: Framebuffer,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            pixels: [false; FRAMEBUFFER_SIZE],
        }
    }

    pub fn refresh(&mut self, framebuffer: &Framebuffer) {
        self.pixels = *framebuffer;
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas::Canvas::new(self).width(Fill).height(Fill).into()
    }
}

impl canvas::Program<Message> for Screen {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let cell_size = Size::new(
            bounds.width / DISPLAY_WIDTH as f32,
            bounds.height / DISPLAY_HEIGHT as f32,
        );
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let background = canvas::Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&background, Color::BLACK);

        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                if !self.pixels[x + y * DISPLAY_WIDTH] {
                    continue;
                }
                let top_left = Point::new(x as f32 * cell_size.width, y as f32 * cell_size.height);
                let cell = canvas::Path::rectangle(top_left, cell_size);
                frame.fill(&cell, Color::WHITE);
            }
        }

        vec![frame.into_geometry()]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
