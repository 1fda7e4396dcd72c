//! Platform services consumed by the reader: speech synthesis and fullscreen.

use core::fmt;

/// Voice shaping applied to every utterance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeechConfig {
    pub pitch: f32,
    pub rate: f32,
}

impl SpeechConfig {
    pub const MIN_PITCH: f32 = 0.0;
    pub const MAX_PITCH: f32 = 2.0;
    pub const MIN_RATE: f32 = 0.1;
    pub const MAX_RATE: f32 = 10.0;

    pub fn clamped(self) -> Self {
        let pitch = if self.pitch.is_nan() { 1.0 } else { self.pitch };
        let rate = if self.rate.is_nan() { 1.0 } else { self.rate };
        Self {
            pitch: pitch.clamp(Self::MIN_PITCH, Self::MAX_PITCH),
            rate: rate.clamp(Self::MIN_RATE, Self::MAX_RATE),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            pitch: 1.0,
            rate: 0.9,
        }
    }
}

/// One narration request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Utterance<'a> {
    pub text: &'a str,
    pub lang: &'a str,
    pub pitch: f32,
    pub rate: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeechError {
    /// The host has no speech synthesizer at all.
    Unsupported,
    /// A synthesizer exists but refused or failed this utterance.
    Unavailable,
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("speech synthesis is not supported"),
            Self::Unavailable => f.write_str("speech synthesis is unavailable"),
        }
    }
}

/// Session-global speech synthesizer.
///
/// Callers keep at most one utterance alive by calling [`SpeechSynth::cancel`]
/// before every [`SpeechSynth::speak`].
pub trait SpeechSynth {
    /// Stop the active utterance and drop anything queued.
    fn cancel(&mut self);

    fn speak(&mut self, utterance: Utterance<'_>) -> Result<(), SpeechError>;

    fn is_speaking(&mut self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FullscreenError {
    Unsupported,
    /// The platform declined the request.
    Rejected,
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("fullscreen is not supported"),
            Self::Rejected => f.write_str("fullscreen request was rejected"),
        }
    }
}

/// Platform-owned fullscreen state. The platform is the source of truth.
pub trait FullscreenControl {
    fn is_fullscreen(&self) -> bool;

    fn request(&mut self) -> Result<(), FullscreenError>;

    fn exit(&mut self) -> Result<(), FullscreenError>;
}

/// Stand-in for hosts without a synthesizer.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoSpeech;

impl SpeechSynth for NoSpeech {
    fn cancel(&mut self) {}

    fn speak(&mut self, _utterance: Utterance<'_>) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Stand-in for hosts without a fullscreen mode.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoFullscreen;

impl FullscreenControl for NoFullscreen {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }
}
