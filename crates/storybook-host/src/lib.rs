//! Desktop terminal adapters for the storybook reader core.

pub mod input;
pub mod locale;
pub mod platform;
pub mod render;
pub mod speech;
