impl<C, IN, SP, FS> ReaderApp<C, IN, SP, FS>
where
    C: StoryCatalog,
    IN: InputProvider,
    SP: SpeechSynth,
    FS: FullscreenControl,
{
    /// Narrates the current page in the session locale, replacing any
    /// utterance already playing. No-op without an open story and on the
    /// finished node.
    pub fn read_aloud(&mut self) -> Result<(), ReaderError> {
        let UiState::Reading { story, page } = self.ui else {
            debug!("reader: read aloud ignored, no story open");
            return Ok(());
        };
        let Some(story) = self.catalog.story_at(story) else {
            return Ok(());
        };
        let Some(current) = story.page_at(page) else {
            debug!("reader: read aloud ignored on finished page");
            return Ok(());
        };

        self.speech.cancel();
        let utterance = Utterance {
            text: current.text,
            lang: self.locale.as_str(),
            pitch: self.config.speech.pitch,
            rate: self.config.speech.rate,
        };
        debug!(
            "reader: read aloud page={} lang={} chars={}",
            page,
            utterance.lang,
            utterance.text.len()
        );
        self.speech.speak(utterance).map_err(|err| {
            warn!("reader: read aloud failed: {}", err);
            ReaderError::Speech(err)
        })
    }

    /// Updates the session locale. Affects the next utterance only.
    pub fn set_locale(&mut self, code: LocaleCode) {
        if code == self.locale {
            return;
        }
        info!("reader: locale {} -> {}", self.locale, code);
        self.locale = code;
        self.pending_redraw = true;
    }

    /// Flips fullscreen based on what the platform currently reports.
    pub fn toggle_fullscreen(&mut self) -> Result<(), ReaderError> {
        let platform_active = self.fullscreen.is_fullscreen();
        let result = if platform_active {
            self.fullscreen.exit()
        } else {
            self.fullscreen.request()
        };

        self.fullscreen_active = self.fullscreen.is_fullscreen();
        self.pending_redraw = true;

        result.map_err(|err| {
            warn!(
                "reader: fullscreen toggle failed from active={}: {}",
                platform_active, err
            );
            ReaderError::Fullscreen(err)
        })
    }

    /// Adopts platform-initiated fullscreen changes, e.g. the user leaving
    /// fullscreen with a system key.
    fn sync_fullscreen(&mut self) -> bool {
        let platform_active = self.fullscreen.is_fullscreen();
        if platform_active == self.fullscreen_active {
            return false;
        }

        info!(
            "reader: fullscreen changed by platform active={}",
            platform_active
        );
        self.fullscreen_active = platform_active;
        true
    }

    fn show_notice(&mut self, text: &'static str, now_ms: u64) {
        self.notice = Some(Notice {
            text,
            until_ms: now_ms.saturating_add(self.config.notice_ms as u64),
        });
        self.pending_redraw = true;
    }

    fn expire_notice(&mut self, now_ms: u64) -> bool {
        match self.notice {
            Some(notice) if now_ms >= notice.until_ms => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    fn move_library_cursor(&mut self, cursor: u16, forward: bool, now_ms: u64) {
        let total = self.catalog.story_count();
        let next = if forward {
            rotate_cw(cursor, total)
        } else {
            rotate_ccw(cursor, total)
        };
        self.ui = UiState::Library { cursor: next };
        let kind = if forward {
            AnimationKind::SlideLeft
        } else {
            AnimationKind::SlideRight
        };
        self.start_transition(kind, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }
}
