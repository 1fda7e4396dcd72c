//! App-level view models and animation metadata.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// One library card.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StoryCardView<'a> {
    pub title: &'a str,
    pub cover: &'a str,
    pub blurb: &'a str,
}

/// Enabled state of the reader controls, derived from the navigation guards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlsView {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub read_aloud_enabled: bool,
}

/// Page-dot indicator. Positions run from 0 to `finished_position` inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressView {
    pub position: u16,
    pub finished_position: u16,
}

impl ProgressView {
    pub fn positions(self) -> u16 {
        self.finished_position.saturating_add(1)
    }
}

/// App-level view model consumed by the host renderer.
pub enum Screen<'a> {
    Library {
        title: &'a str,
        subtitle: &'a str,
        cards: &'a [StoryCardView<'a>],
        cursor: usize,
        sponsor: &'a str,
        notice: Option<&'a str>,
        fullscreen: bool,
        animation: Option<AnimationFrame>,
    },
    Page {
        story_title: &'a str,
        text: &'a str,
        image: &'a str,
        progress_label: &'a str,
        controls: ControlsView,
        progress: ProgressView,
        turning: bool,
        notice: Option<&'a str>,
        fullscreen: bool,
        animation: Option<AnimationFrame>,
    },
    Finished {
        story_title: &'a str,
        headline: &'a str,
        moral: &'a str,
        upsell_heading: &'a str,
        upsell_action: &'a str,
        controls: ControlsView,
        progress: ProgressView,
        turning: bool,
        notice: Option<&'a str>,
        fullscreen: bool,
        animation: Option<AnimationFrame>,
    },
}
