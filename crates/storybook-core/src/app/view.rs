impl<C, IN, SP, FS> ReaderApp<C, IN, SP, FS>
where
    C: StoryCatalog,
    IN: InputProvider,
    SP: SpeechSynth,
    FS: FullscreenControl,
{
    pub fn new(
        catalog: C,
        input: IN,
        speech: SP,
        fullscreen: FS,
        mut config: ReaderConfig,
        app_title: &'static str,
    ) -> Self {
        config.page_turn_ms = config
            .page_turn_ms
            .clamp(ReaderConfig::MIN_PAGE_TURN_MS, ReaderConfig::MAX_PAGE_TURN_MS);
        config.speech = config.speech.clamped();

        let fullscreen_active = fullscreen.is_fullscreen();

        Self {
            catalog,
            input,
            speech,
            fullscreen,
            config,
            app_title,
            ui: UiState::Library { cursor: 0 },
            locale: LocaleCode::default(),
            pending_turn: None,
            fullscreen_active,
            notice: None,
            pending_redraw: true,
            transition: None,
            exit_requested: false,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        // Expired turns land before input is read.
        let mut changed = self.complete_pending_turn(now_ms);
        self.process_inputs(now_ms);

        changed |= self.sync_fullscreen();
        changed |= self.expire_notice(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            changed = true;
        }

        if changed || self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let animation = self.transition_frame(now_ms);
        let notice = self.notice.map(|notice| notice.text);
        let fullscreen = self.fullscreen_active;

        match self.ui {
            UiState::Library { cursor } => {
                let total = self.catalog.story_count() as usize;
                let selected = (cursor as usize).min(total.saturating_sub(1));
                let window_start = if total <= MAX_LIBRARY_ITEMS {
                    0
                } else {
                    selected
                        .saturating_sub(MAX_LIBRARY_ITEMS / 2)
                        .min(total - MAX_LIBRARY_ITEMS)
                };
                let window_end = core::cmp::min(total, window_start + MAX_LIBRARY_ITEMS);

                let mut blurbs: [String<BLURB_BYTES>; MAX_LIBRARY_ITEMS] =
                    core::array::from_fn(|_| String::new());
                for (slot, index) in (window_start..window_end).enumerate() {
                    if let Some(story) = self.catalog.story_at(index as u16) {
                        blurbs[slot] = story_blurb(story.theme);
                    }
                }

                let mut cards = [StoryCardView::default(); MAX_LIBRARY_ITEMS];
                let mut count = 0usize;
                for (slot, index) in (window_start..window_end).enumerate() {
                    let Some(story) = self.catalog.story_at(index as u16) else {
                        break;
                    };
                    cards[slot] = StoryCardView {
                        title: story.title,
                        cover: story.cover,
                        blurb: blurbs[slot].as_str(),
                    };
                    count = slot + 1;
                }

                f(Screen::Library {
                    title: self.app_title,
                    subtitle: LIBRARY_SUBTITLE,
                    cards: &cards[..count],
                    cursor: selected.saturating_sub(window_start).min(count.saturating_sub(1)),
                    sponsor: SPONSOR_PLACEHOLDER,
                    notice,
                    fullscreen,
                    animation,
                });
            }
            UiState::Reading { story, page } => {
                let Some(story) = self.catalog.story_at(story) else {
                    warn!("reader: open story index vanished from catalog");
                    f(Screen::Library {
                        title: self.app_title,
                        subtitle: LIBRARY_SUBTITLE,
                        cards: &[],
                        cursor: 0,
                        sponsor: SPONSOR_PLACEHOLDER,
                        notice,
                        fullscreen,
                        animation,
                    });
                    return;
                };

                let page_count = story.page_count();
                let controls = ControlsView {
                    prev_enabled: TurnDirection::Backward.target(page, page_count).is_some(),
                    next_enabled: TurnDirection::Forward.target(page, page_count).is_some(),
                    read_aloud_enabled: page < page_count,
                };
                let progress = ProgressView {
                    position: page,
                    finished_position: page_count,
                };
                let turning = self.pending_turn.is_some();

                match story.page_at(page) {
                    Some(current) => {
                        let progress_label =
                            page_progress_label(page.saturating_add(1), page_count);
                        f(Screen::Page {
                            story_title: story.title,
                            text: current.text,
                            image: current.image,
                            progress_label: progress_label.as_str(),
                            controls,
                            progress,
                            turning,
                            notice,
                            fullscreen,
                            animation,
                        });
                    }
                    None => f(Screen::Finished {
                        story_title: story.title,
                        headline: END_HEADLINE,
                        moral: story.moral,
                        upsell_heading: UPSELL_HEADING,
                        upsell_action: UPSELL_ACTION,
                        controls,
                        progress,
                        turning,
                        notice,
                        fullscreen,
                        animation,
                    }),
                }
            }
        }
    }

    pub fn state(&self) -> ReaderState {
        match self.ui {
            UiState::Library { .. } => ReaderState {
                story: None,
                page_index: 0,
                page_count: 0,
                locale: self.locale.clone(),
                transition_in_flight: self.pending_turn.is_some(),
            },
            UiState::Reading { story, page } => ReaderState {
                story: Some(story),
                page_index: page,
                page_count: self.page_count_of(story),
                locale: self.locale.clone(),
                transition_in_flight: self.pending_turn.is_some(),
            },
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_active
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.map(|notice| notice.text)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    pub fn with_speech_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut SP) -> R,
    {
        f(&mut self.speech)
    }
}
