pub mod frame;
pub mod text;

use storybook_core::render::Screen;

use self::frame::TextFrame;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame);
}
