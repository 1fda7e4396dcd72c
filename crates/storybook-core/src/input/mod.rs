//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the reader app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Next story in the library, next page in the reader.
    Next,
    /// Previous story in the library, previous page in the reader.
    Previous,
    /// Open the highlighted story, or return to the library from the end screen.
    Select,
    /// Back to the library.
    Back,
    ReadAloud,
    /// Progress indicator press; the value is a zero-based page position.
    JumpTo(u16),
    ToggleFullscreen,
    Exit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
