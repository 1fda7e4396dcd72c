//! Reader controller: library browsing, page navigation, read-aloud and
//! fullscreen.
//!
//! The controller is driven by [`ReaderApp::tick`] with a monotonic clock in
//! milliseconds. Page turns are accepted immediately but applied by a later
//! tick once the turn animation has run; while a turn is pending every other
//! turn request is dropped.

use core::fmt;

use heapless::String;
use log::{debug, info, warn};

use crate::{
    content::StoryCatalog,
    input::{InputEvent, InputProvider},
    locale::LocaleCode,
    platform::{FullscreenControl, FullscreenError, SpeechConfig, SpeechError, SpeechSynth, Utterance},
    render::{
        AnimationKind, AnimationSpec, ControlsView, ProgressView, Screen, StoryCardView,
    },
    text_policy::{BLURB_BYTES, page_progress_label, story_blurb},
};

const MAX_LIBRARY_ITEMS: usize = 8;

const ANIM_MENU_MS: u16 = 180;
const ANIM_SCREEN_MS: u16 = 220;

const LIBRARY_SUBTITLE: &str = "Library";
const SPONSOR_PLACEHOLDER: &str = "[ Sponsor banner ]";
const END_HEADLINE: &str = "The End!";
const UPSELL_HEADING: &str = "Parents: Support our free stories!";
const UPSELL_ACTION: &str = "Download High-Quality PDF ($1)";

const SPEECH_NOTICE: &str = "Sorry, read aloud is not supported here.";
const FULLSCREEN_NOTICE: &str = "Fullscreen is not available.";
const NOT_FOUND_NOTICE: &str = "That story could not be found.";
const INPUT_NOTICE: &str = "Input device error.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    /// Page-turn animation length; turns are locked out for this long.
    pub page_turn_ms: u16,
    /// How long a capability notice stays on screen.
    pub notice_ms: u16,
    pub speech: SpeechConfig,
}

impl ReaderConfig {
    pub const MIN_PAGE_TURN_MS: u16 = 50;
    pub const MAX_PAGE_TURN_MS: u16 = 2_000;
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            page_turn_ms: 450,
            notice_ms: 3_000,
            speech: SpeechConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnDirection {
    Forward,
    Backward,
}

impl TurnDirection {
    /// Target index for a turn from `page`, or `None` when the guard fails.
    /// `page_count` is also the index of the finished node.
    pub fn target(self, page: u16, page_count: u16) -> Option<u16> {
        match self {
            Self::Forward if page < page_count => Some(page + 1),
            Self::Backward if page > 0 => Some(page - 1),
            _ => None,
        }
    }

    fn animation(self) -> AnimationKind {
        match self {
            Self::Forward => AnimationKind::SlideLeft,
            Self::Backward => AnimationKind::SlideRight,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReaderError {
    /// No story with the requested id or index.
    NotFound,
    Speech(SpeechError),
    Fullscreen(FullscreenError),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("story not found"),
            Self::Speech(err) => write!(f, "read aloud failed: {}", err),
            Self::Fullscreen(err) => write!(f, "fullscreen toggle failed: {}", err),
        }
    }
}

impl From<SpeechError> for ReaderError {
    fn from(err: SpeechError) -> Self {
        Self::Speech(err)
    }
}

impl From<FullscreenError> for ReaderError {
    fn from(err: FullscreenError) -> Self {
        Self::Fullscreen(err)
    }
}

/// Snapshot of the reading state. Owns its data, so it can be held while
/// the controller keeps running.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReaderState {
    /// Catalog index of the open story.
    pub story: Option<u16>,
    /// Meaningful only while a story is open.
    pub page_index: u16,
    pub page_count: u16,
    pub locale: LocaleCode,
    pub transition_in_flight: bool,
}

impl ReaderState {
    pub fn is_open(&self) -> bool {
        self.story.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.is_open() && self.page_index == self.page_count
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Library { cursor: u16 },
    Reading { story: u16, page: u16 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingTurn {
    story: u16,
    target: u16,
    due_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Notice {
    text: &'static str,
    until_ms: u64,
}

pub struct ReaderApp<C, IN, SP, FS>
where
    C: StoryCatalog,
    IN: InputProvider,
    SP: SpeechSynth,
    FS: FullscreenControl,
{
    catalog: C,
    input: IN,
    speech: SP,
    fullscreen: FS,
    config: ReaderConfig,
    app_title: &'static str,
    ui: UiState,
    locale: LocaleCode,
    pending_turn: Option<PendingTurn>,
    fullscreen_active: bool,
    notice: Option<Notice>,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    exit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

fn rotate_cw(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_ccw(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests;
