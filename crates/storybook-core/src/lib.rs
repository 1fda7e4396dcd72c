//! Platform-independent core of the storybook reader.
//!
//! Everything here runs without an allocator: story data is borrowed from
//! static tables, labels are formatted into fixed-capacity buffers, and
//! platform services (speech, fullscreen, locale selector, input) are reached
//! through traits implemented by the host crate.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod content;
pub mod input;
pub mod locale;
pub mod platform;
pub mod render;
pub mod text_policy;
