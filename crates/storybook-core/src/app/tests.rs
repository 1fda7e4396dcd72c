use std::{
    cell::Cell, cell::RefCell, collections::VecDeque, rc::Rc, string::String as StdString,
    vec::Vec,
};

use super::*;
use crate::{
    content::{ELI_THE_ELEPHANT, Page, StaticCatalog, Story},
    input::{InputEvent, InputProvider, MockInput},
    platform::{NoFullscreen, NoSpeech},
    render::Screen,
};

const FOX_PAGES: [Page<'static>; 3] = [
    Page {
        text: "p0",
        image: "fox-0.png",
    },
    Page {
        text: "p1",
        image: "fox-1.png",
    },
    Page {
        text: "p2",
        image: "fox-2.png",
    },
];

const FOX: Story<'static> = Story {
    id: "patient-fox",
    title: "The Patient Fox",
    cover: "fox-cover.png",
    theme: "Patience",
    moral: "Good things come to those who wait.",
    pages: &FOX_PAGES,
};

const TEST_STORIES: [Story<'static>; 2] = [FOX, ELI_THE_ELEPHANT];

const TURN_MS: u64 = 450;

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

/// Input whose queue the test fills between ticks.
#[derive(Clone, Default)]
struct QueuedInput {
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputProvider for QueuedInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.borrow_mut().pop_front())
    }
}

struct SpokenLine {
    text: StdString,
    lang: StdString,
    pitch: f32,
    rate: f32,
}

#[derive(Default)]
struct SpeechLog {
    spoken: Vec<SpokenLine>,
    cancels: usize,
    overlaps: usize,
    active: Option<StdString>,
}

#[derive(Clone, Default)]
struct RecordingSpeech {
    log: Rc<RefCell<SpeechLog>>,
    unsupported: bool,
}

impl SpeechSynth for RecordingSpeech {
    fn cancel(&mut self) {
        let mut log = self.log.borrow_mut();
        log.cancels += 1;
        log.active = None;
    }

    fn speak(&mut self, utterance: Utterance<'_>) -> Result<(), SpeechError> {
        if self.unsupported {
            return Err(SpeechError::Unsupported);
        }

        let mut log = self.log.borrow_mut();
        if log.active.is_some() {
            log.overlaps += 1;
        }
        log.active = Some(utterance.text.into());
        log.spoken.push(SpokenLine {
            text: utterance.text.into(),
            lang: utterance.lang.into(),
            pitch: utterance.pitch,
            rate: utterance.rate,
        });
        Ok(())
    }

    fn is_speaking(&mut self) -> bool {
        self.log.borrow().active.is_some()
    }
}

/// Fullscreen fake whose platform flag the test can flip behind the app's back.
#[derive(Clone, Default)]
struct FakeFullscreen {
    active: Rc<Cell<bool>>,
}

impl FullscreenControl for FakeFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active.get()
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        self.active.set(true);
        Ok(())
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        self.active.set(false);
        Ok(())
    }
}

type TestApp<IN> = ReaderApp<StaticCatalog<'static>, IN, RecordingSpeech, FakeFullscreen>;

fn make_app_with<IN: InputProvider>(
    input: IN,
    speech: RecordingSpeech,
) -> (TestApp<IN>, Rc<RefCell<SpeechLog>>, Rc<Cell<bool>>) {
    let log = speech.log.clone();
    let fullscreen = FakeFullscreen::default();
    let platform = fullscreen.active.clone();
    let app = ReaderApp::new(
        StaticCatalog::new(&TEST_STORIES),
        input,
        speech,
        fullscreen,
        ReaderConfig::default(),
        "Test",
    );
    (app, log, platform)
}

fn make_app() -> (TestApp<MockInput>, Rc<RefCell<SpeechLog>>, Rc<Cell<bool>>) {
    make_app_with(MockInput::new(), RecordingSpeech::default())
}

fn turn_and_settle<IN: InputProvider>(
    app: &mut TestApp<IN>,
    direction: TurnDirection,
    now_ms: u64,
) -> (bool, u64) {
    let accepted = app.turn(direction, now_ms);
    let now_ms = now_ms + TURN_MS;
    let _ = app.tick(now_ms);
    (accepted, now_ms)
}

/// Controls of the reader screen plus whether it is the finished node.
fn reader_controls<IN: InputProvider>(
    app: &TestApp<IN>,
    now_ms: u64,
) -> Option<(ControlsView, bool)> {
    let mut out = None;
    app.with_screen(now_ms, |screen| match screen {
        Screen::Page { controls, .. } => out = Some((controls, false)),
        Screen::Finished { controls, .. } => out = Some((controls, true)),
        Screen::Library { .. } => {}
    });
    out
}

#[test]
fn three_page_story_walks_to_finished_and_back() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();

    let mut now = 0;
    for _ in 0..3 {
        let (accepted, next) = turn_and_settle(&mut app, TurnDirection::Forward, now);
        assert!(accepted);
        now = next;
    }

    let state = app.state();
    assert_eq!(state.page_index, 3);
    assert!(state.is_finished());

    let (controls, finished) = reader_controls(&app, now).unwrap();
    assert!(finished);
    assert!(controls.prev_enabled);
    assert!(!controls.next_enabled);
    assert!(!controls.read_aloud_enabled);

    let (accepted, now) = turn_and_settle(&mut app, TurnDirection::Forward, now);
    assert!(!accepted);
    assert_eq!(app.state().page_index, 3);

    let (accepted, now) = turn_and_settle(&mut app, TurnDirection::Backward, now);
    assert!(accepted);
    assert_eq!(app.state().page_index, 2);

    let (controls, finished) = reader_controls(&app, now).unwrap();
    assert!(!finished);
    assert!(controls.next_enabled);
    assert!(controls.read_aloud_enabled);
}

#[test]
fn forward_turns_stop_exactly_at_finished() {
    let (mut app, _, _) = make_app();
    app.open_story("eli-the-elephant", 0).unwrap();
    let page_count = app.state().page_count;
    assert_eq!(page_count, 5);

    let mut now = 0;
    for expected in 1..=page_count {
        let (accepted, next) = turn_and_settle(&mut app, TurnDirection::Forward, now);
        assert!(accepted);
        assert_eq!(app.state().page_index, expected);
        now = next;
    }

    for _ in 0..3 {
        let (accepted, next) = turn_and_settle(&mut app, TurnDirection::Forward, now);
        assert!(!accepted);
        now = next;
    }
    assert_eq!(app.state().page_index, page_count);
    assert!(app.state().is_finished());
}

#[test]
fn backward_turn_on_first_page_is_ignored() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();
    let before = app.state();

    let (accepted, _) = turn_and_settle(&mut app, TurnDirection::Backward, 0);
    assert!(!accepted);
    assert_eq!(app.state(), before);
    assert!(!app.state().transition_in_flight);
}

#[test]
fn second_turn_inside_debounce_window_is_dropped() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();

    assert!(app.turn(TurnDirection::Forward, 10));
    assert!(app.state().transition_in_flight);
    assert!(!app.turn(TurnDirection::Forward, 20));
    assert!(!app.turn(TurnDirection::Backward, 30));

    let _ = app.tick(10 + TURN_MS - 1);
    assert_eq!(app.state().page_index, 0);
    assert!(app.state().transition_in_flight);

    let _ = app.tick(10 + TURN_MS);
    assert_eq!(app.state().page_index, 1);
    assert!(!app.state().transition_in_flight);

    let _ = app.tick(10 + 4 * TURN_MS);
    assert_eq!(app.state().page_index, 1);
}

#[test]
fn jump_to_finished_visits_no_intermediate_pages() {
    let (mut app, log, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();
    app.read_aloud().unwrap();
    let cancels_before = log.borrow().cancels;

    assert!(app.jump_to(3, 5));
    let state = app.state();
    assert_eq!(state.page_index, 3);
    assert!(state.is_finished());
    assert!(log.borrow().active.is_none());
    assert_eq!(log.borrow().cancels, cancels_before + 1);

    assert!(!app.jump_to(4, 6));
    assert_eq!(app.state().page_index, 3);
}

#[test]
fn jump_cancels_a_pending_turn() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();

    assert!(app.turn(TurnDirection::Forward, 0));
    assert!(app.jump_to(2, 10));
    assert!(!app.state().transition_in_flight);

    let _ = app.tick(TURN_MS + 100);
    assert_eq!(app.state().page_index, 2);
}

#[test]
fn reopening_resets_the_page_index() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();
    let (_, now) = turn_and_settle(&mut app, TurnDirection::Forward, 0);
    let (_, now) = turn_and_settle(&mut app, TurnDirection::Forward, now);
    assert_eq!(app.state().page_index, 2);

    app.open_story("eli-the-elephant", now).unwrap();
    assert_eq!(app.state().story, Some(1));
    assert_eq!(app.state().page_index, 0);

    app.open_index(0, now).unwrap();
    assert_eq!(app.state().story, Some(0));
    assert_eq!(app.state().page_index, 0);
}

#[test]
fn unknown_story_is_not_found_and_state_is_kept() {
    let (mut app, _, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();
    let (_, now) = turn_and_settle(&mut app, TurnDirection::Forward, 0);
    let before = app.state();

    assert_eq!(app.open_story("missing", now), Err(ReaderError::NotFound));
    assert_eq!(app.open_index(9, now), Err(ReaderError::NotFound));
    assert_eq!(app.state(), before);
}

#[test]
fn read_aloud_keeps_one_utterance_alive() {
    let (mut app, log, _) = make_app();
    app.open_story("eli-the-elephant", 0).unwrap();

    app.read_aloud().unwrap();
    app.read_aloud().unwrap();

    let log = log.borrow();
    assert_eq!(log.spoken.len(), 2);
    assert_eq!(log.overlaps, 0);
    assert!(log.cancels >= 2);
    assert_eq!(
        log.active.as_deref(),
        Some(ELI_THE_ELEPHANT.pages[0].text)
    );
    assert_eq!(log.spoken[1].lang, "en");
    assert_eq!(log.spoken[1].pitch, 1.0);
    assert_eq!(log.spoken[1].rate, 0.9);
}

#[test]
fn read_aloud_is_a_noop_without_a_page() {
    let (mut app, log, _) = make_app();
    assert_eq!(app.read_aloud(), Ok(()));

    app.open_story("patient-fox", 0).unwrap();
    assert!(app.jump_to(3, 0));
    assert_eq!(app.read_aloud(), Ok(()));

    assert!(log.borrow().spoken.is_empty());
}

#[test]
fn locale_change_applies_to_the_next_utterance() {
    let (mut app, log, _) = make_app();
    app.open_story("patient-fox", 0).unwrap();

    app.read_aloud().unwrap();
    app.set_locale(LocaleCode::parse("fr").unwrap());
    assert_eq!(log.borrow().spoken[0].lang, "en");
    assert_eq!(app.state().locale.as_str(), "fr");

    app.read_aloud().unwrap();
    assert_eq!(log.borrow().spoken[1].lang, "fr");

    app.close(0);
    assert_eq!(app.state().locale.as_str(), "fr");
}

#[test]
fn unsupported_speech_shows_a_notice_until_it_expires() {
    let events = [InputEvent::Select, InputEvent::ReadAloud];
    let speech = RecordingSpeech {
        unsupported: true,
        ..RecordingSpeech::default()
    };
    let (mut app, _, _) = make_app_with(ScriptedInput::new(&events), speech);

    let _ = app.tick(0);
    assert!(app.state().is_open());
    assert_eq!(app.notice(), Some(SPEECH_NOTICE));

    let notice_ms = app.config().notice_ms as u64;
    let _ = app.tick(notice_ms - 1);
    assert_eq!(app.notice(), Some(SPEECH_NOTICE));
    assert_eq!(app.tick(notice_ms), TickResult::RenderRequested);
    assert_eq!(app.notice(), None);
}

#[test]
fn hosts_without_capabilities_report_unsupported() {
    let mut app = ReaderApp::new(
        StaticCatalog::new(&TEST_STORIES),
        MockInput::new(),
        NoSpeech,
        NoFullscreen,
        ReaderConfig::default(),
        "Test",
    );
    app.open_story("patient-fox", 0).unwrap();

    assert_eq!(
        app.read_aloud(),
        Err(ReaderError::Speech(SpeechError::Unsupported))
    );
    assert_eq!(
        app.toggle_fullscreen(),
        Err(ReaderError::Fullscreen(FullscreenError::Unsupported))
    );
    assert!(!app.is_fullscreen());
}

#[test]
fn fullscreen_follows_the_platform() {
    let (mut app, _, platform) = make_app();
    let _ = app.tick(0);
    assert!(!app.is_fullscreen());

    app.toggle_fullscreen().unwrap();
    assert!(platform.get());
    assert!(app.is_fullscreen());
    let _ = app.tick(1);

    // Platform-initiated exit, e.g. a system key.
    platform.set(false);
    assert_eq!(app.tick(5_000), TickResult::RenderRequested);
    assert!(!app.is_fullscreen());

    app.toggle_fullscreen().unwrap();
    assert!(platform.get());
    app.toggle_fullscreen().unwrap();
    assert!(!platform.get());
}

#[test]
fn page_index_stays_in_range_under_mixed_operations() {
    let (mut app, _, _) = make_app();
    let mut seed = 0x2545_f491_u32;
    let mut now = 0u64;

    for _ in 0..600 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        match seed % 7 {
            0 => {
                let _ = app.turn(TurnDirection::Forward, now);
            }
            1 => {
                let _ = app.turn(TurnDirection::Backward, now);
            }
            2 => {
                let _ = app.jump_to(((seed >> 8) % 8) as u16, now);
            }
            3 => {
                let _ = app.open_index(((seed >> 8) % 3) as u16, now);
            }
            4 => app.close(now),
            _ => {
                let _ = app.tick(now);
            }
        }
        now += (seed >> 16) as u64 % 300;

        let state = app.state();
        if state.is_open() {
            assert!(state.page_index <= state.page_count);
        }
    }
}

#[test]
fn scripted_input_drives_library_and_reader() {
    let events = [
        InputEvent::Next,
        InputEvent::Previous,
        InputEvent::Select,
        InputEvent::Next,
        InputEvent::Next,
    ];
    let (mut app, _, _) = make_app_with(ScriptedInput::new(&events), RecordingSpeech::default());

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    let state = app.state();
    assert_eq!(state.story, Some(0));
    assert_eq!(state.page_index, 0);
    assert!(state.transition_in_flight);

    let _ = app.tick(TURN_MS);
    assert_eq!(app.state().page_index, 1);
}

#[test]
fn press_on_the_due_tick_starts_the_next_turn() {
    let input = QueuedInput::default();
    let queue = input.queue.clone();
    let (mut app, _, _) = make_app_with(input, RecordingSpeech::default());
    app.open_story("patient-fox", 0).unwrap();

    queue.borrow_mut().push_back(InputEvent::Next);
    let _ = app.tick(0);
    assert!(app.state().transition_in_flight);

    queue.borrow_mut().push_back(InputEvent::Next);
    let _ = app.tick(TURN_MS);
    let state = app.state();
    assert_eq!(state.page_index, 1);
    assert!(state.transition_in_flight);

    let _ = app.tick(2 * TURN_MS);
    assert_eq!(app.state().page_index, 2);
    assert!(!app.state().transition_in_flight);
}

#[test]
fn end_screen_select_returns_to_the_library() {
    let events = [
        InputEvent::Next,
        InputEvent::Select,
        InputEvent::JumpTo(5),
        InputEvent::Select,
    ];
    let (mut app, _, _) = make_app_with(ScriptedInput::new(&events), RecordingSpeech::default());
    let _ = app.tick(0);

    assert!(!app.state().is_open());
    let mut cursor = None;
    app.with_screen(0, |screen| {
        if let Screen::Library { cursor: at, .. } = screen {
            cursor = Some(at);
        }
    });
    assert_eq!(cursor, Some(1));
}

#[test]
fn exit_tears_down_pending_work() {
    let events = [
        InputEvent::Select,
        InputEvent::ReadAloud,
        InputEvent::Next,
        InputEvent::Exit,
    ];
    let (mut app, log, _) = make_app_with(ScriptedInput::new(&events), RecordingSpeech::default());
    let _ = app.tick(0);

    assert!(app.exit_requested());
    assert!(!app.state().transition_in_flight);
    assert!(!app.with_speech_mut(|speech| speech.is_speaking()));
    assert_eq!(log.borrow().spoken.len(), 1);

    let _ = app.tick(10 * TURN_MS);
    assert_eq!(app.state().page_index, 0);
}

#[test]
fn screens_project_catalog_and_page_data() {
    let (mut app, _, _) = make_app();

    let mut blurbs = Vec::new();
    app.with_screen(0, |screen| {
        if let Screen::Library { cards, sponsor, .. } = screen {
            assert!(!sponsor.is_empty());
            blurbs.extend(cards.iter().map(|card| StdString::from(card.blurb)));
        }
    });
    assert_eq!(blurbs, ["A story about Patience", "A story about Honesty"]);

    app.open_story("patient-fox", 0).unwrap();
    let mut seen = None;
    app.with_screen(0, |screen| {
        if let Screen::Page {
            text,
            image,
            progress_label,
            progress,
            ..
        } = screen
        {
            seen = Some((
                StdString::from(text),
                StdString::from(image),
                StdString::from(progress_label),
                progress.positions(),
            ));
        }
    });
    let (text, image, label, positions) = seen.unwrap();
    assert_eq!(text, "p0");
    assert_eq!(image, "fox-0.png");
    assert_eq!(label, "Page 1 of 3");
    assert_eq!(positions, 4);

    assert!(app.jump_to(3, 0));
    let mut moral = None;
    app.with_screen(0, |screen| {
        if let Screen::Finished { moral: text, headline, .. } = screen {
            assert_eq!(headline, "The End!");
            moral = Some(StdString::from(text));
        }
    });
    assert_eq!(moral.as_deref(), Some(FOX.moral));
}
