pub mod display;
pub mod fullscreen;
pub mod terminal;
