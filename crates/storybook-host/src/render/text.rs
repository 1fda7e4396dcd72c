//! Plain-text rendering of the reader screens.

use storybook_core::render::{AnimationFrame, ControlsView, ProgressView, Screen};

use super::{FrameRenderer, frame::TextFrame};

const DOT_CURRENT: char = '●';
const DOT_OTHER: char = '○';

/// Draws screens as wrapped text with a status line on top.
#[derive(Debug, Default)]
pub struct TextRenderer {
    locale_banner: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner shown under the header; an empty banner hides the line.
    pub fn set_locale_banner(&mut self, banner: &str) {
        self.locale_banner.clear();
        self.locale_banner.push_str(banner);
    }

    fn header(&self, frame: &mut TextFrame, title: &str, fullscreen: bool) {
        let mut line = String::from(title);
        if fullscreen {
            line.push_str("  [fullscreen]");
        }
        frame.push_line(&line);
        frame.push_line(&"=".repeat(frame.width().min(title.chars().count().max(1))));
        if !self.locale_banner.is_empty() {
            frame.push_wrapped(&self.locale_banner);
        }
        frame.push_blank();
    }
}

impl FrameRenderer for TextRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame) {
        frame.clear();

        match screen {
            Screen::Library {
                title,
                subtitle,
                cards,
                cursor,
                sponsor,
                notice,
                fullscreen,
                animation,
            } => {
                self.header(frame, title, fullscreen);
                frame.push_line(subtitle);
                if cards.is_empty() {
                    frame.push_line("  (no stories)");
                }
                for (index, card) in cards.iter().enumerate() {
                    let marker = if index == cursor { '>' } else { ' ' };
                    frame.push_line(&format!("{} {}", marker, card.title));
                    frame.push_line(&format!("    {}", card.blurb));
                    frame.push_line(&format!("    cover: {}", card.cover));
                }
                frame.push_blank();
                frame.push_line(sponsor);
                footer(frame, notice, animation, "Up/Down choose  Enter read  f fullscreen  q quit");
            }
            Screen::Page {
                story_title,
                text,
                image,
                progress_label,
                controls,
                progress,
                turning,
                notice,
                fullscreen,
                animation,
            } => {
                self.header(frame, story_title, fullscreen);
                frame.push_line(&format!("[image: {}]", image));
                frame.push_blank();
                frame.push_wrapped(text);
                frame.push_blank();
                frame.push_line(progress_label);
                frame.push_line(&progress_dots(progress));
                frame.push_line(&controls_line(controls, turning));
                footer(
                    frame,
                    notice,
                    animation,
                    "Left/Right turn  1-9 go to page  r read aloud  Esc library",
                );
            }
            Screen::Finished {
                story_title,
                headline,
                moral,
                upsell_heading,
                upsell_action,
                controls,
                progress,
                turning,
                notice,
                fullscreen,
                animation,
            } => {
                self.header(frame, story_title, fullscreen);
                frame.push_line(headline);
                frame.push_blank();
                frame.push_wrapped(moral);
                frame.push_blank();
                frame.push_line(upsell_heading);
                frame.push_line(&format!("[ {} ]", upsell_action));
                frame.push_blank();
                frame.push_line(&progress_dots(progress));
                frame.push_line(&controls_line(controls, turning));
                footer(
                    frame,
                    notice,
                    animation,
                    "Left back  1-9 go to page  Enter library",
                );
            }
        }
    }
}

fn footer(frame: &mut TextFrame, notice: Option<&str>, animation: Option<AnimationFrame>, hint: &str) {
    frame.push_blank();
    if let Some(notice) = notice {
        frame.push_wrapped(&format!("! {}", notice));
    }
    if let Some(animation) = animation {
        frame.push_line(&format!("~ {:?} {}%", animation.kind, animation.progress_pct));
    }
    frame.push_line(hint);
}

fn progress_dots(progress: ProgressView) -> String {
    let mut dots = String::new();
    for position in 0..progress.positions() {
        if position > 0 {
            dots.push(' ');
        }
        dots.push(if position == progress.position {
            DOT_CURRENT
        } else {
            DOT_OTHER
        });
    }
    dots
}

fn controls_line(controls: ControlsView, turning: bool) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            format!("[{}]", label)
        } else {
            format!(" {} ", label.to_lowercase())
        }
    };

    let mut line = format!(
        "{} {} {}",
        button("Prev", controls.prev_enabled),
        button("Read aloud", controls.read_aloud_enabled),
        button("Next", controls.next_enabled)
    );
    if turning {
        line.push_str("  ...");
    }
    line
}
