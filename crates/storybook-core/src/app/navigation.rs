impl<C, IN, SP, FS> ReaderApp<C, IN, SP, FS>
where
    C: StoryCatalog,
    IN: InputProvider,
    SP: SpeechSynth,
    FS: FullscreenControl,
{
    /// Opens the story with the given id at its first page.
    pub fn open_story(&mut self, id: &str, now_ms: u64) -> Result<(), ReaderError> {
        let Some(index) = self.catalog.find_story(id) else {
            debug!("reader: open rejected id={:?} status=not_found", id);
            return Err(ReaderError::NotFound);
        };
        self.open_index(index, now_ms)
    }

    /// Opens the story at a catalog index. Re-opening replaces the current
    /// story and resets the page index.
    pub fn open_index(&mut self, index: u16, now_ms: u64) -> Result<(), ReaderError> {
        let Some(story) = self.catalog.story_at(index) else {
            debug!("reader: open rejected index={} status=not_found", index);
            return Err(ReaderError::NotFound);
        };
        info!(
            "reader: open story={} pages={}",
            story.id,
            story.page_count()
        );

        self.cancel_pending_turn("open");
        self.speech.cancel();
        self.ui = UiState::Reading {
            story: index,
            page: 0,
        };
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
        Ok(())
    }

    /// Returns to the library. No-op when no story is open.
    pub fn close(&mut self, now_ms: u64) {
        let UiState::Reading { story, page } = self.ui else {
            return;
        };
        debug!("reader: close story_index={} page={}", story, page);

        self.cancel_pending_turn("close");
        self.speech.cancel();
        self.enter_library(story, now_ms);
    }

    /// Requests a page turn. Returns whether the request was accepted; the
    /// page index itself changes on the first tick at or after the turn
    /// animation ends.
    pub fn turn(&mut self, direction: TurnDirection, now_ms: u64) -> bool {
        let UiState::Reading { story, page } = self.ui else {
            return false;
        };

        if let Some(pending) = self.pending_turn {
            debug!(
                "reader: turn {:?} dropped page={} pending_target={}",
                direction, page, pending.target
            );
            return false;
        }

        let page_count = self.page_count_of(story);
        let Some(target) = direction.target(page, page_count) else {
            debug!(
                "reader: turn {:?} guarded page={}/{}",
                direction, page, page_count
            );
            return false;
        };

        debug!(
            "reader: turn {:?} accepted page={} target={}/{}",
            direction, page, target, page_count
        );
        let duration_ms = self.config.page_turn_ms;
        self.pending_turn = Some(PendingTurn {
            story,
            target,
            due_ms: now_ms.saturating_add(duration_ms as u64),
        });
        self.start_transition(direction.animation(), now_ms, duration_ms);
        self.pending_redraw = true;
        true
    }

    /// Moves straight to a page position (`page_count` is the finished
    /// node). Cancels any pending turn and in-progress speech.
    pub fn jump_to(&mut self, page: u16, now_ms: u64) -> bool {
        let UiState::Reading { story, page: current } = self.ui else {
            return false;
        };

        let page_count = self.page_count_of(story);
        if page > page_count {
            debug!(
                "reader: jump guarded page={} target={}/{}",
                current, page, page_count
            );
            return false;
        }

        debug!(
            "reader: jump page={} target={}/{}",
            current, page, page_count
        );
        self.cancel_pending_turn("jump");
        self.speech.cancel();
        self.ui = UiState::Reading { story, page };
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
        true
    }

    /// Releases the pending turn and silences narration. Call before the
    /// app is dropped so no delayed turn outlives the session.
    pub fn shutdown(&mut self) {
        info!("reader: shutdown");
        self.cancel_pending_turn("shutdown");
        self.speech.cancel();
        self.transition = None;
    }

    fn enter_library(&mut self, cursor: u16, now_ms: u64) {
        let max_index = self.catalog.story_count().saturating_sub(1);
        self.ui = UiState::Library {
            cursor: cursor.min(max_index),
        };
        self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }

    fn complete_pending_turn(&mut self, now_ms: u64) -> bool {
        let Some(pending) = self.pending_turn else {
            return false;
        };
        if now_ms < pending.due_ms {
            return false;
        }
        self.pending_turn = None;

        match self.ui {
            UiState::Reading { story, page } if story == pending.story => {
                debug!(
                    "reader: turn applied page={} -> {}",
                    page, pending.target
                );
                self.ui = UiState::Reading {
                    story,
                    page: pending.target,
                };
                true
            }
            _ => {
                debug!("reader: stale turn discarded target={}", pending.target);
                false
            }
        }
    }

    fn cancel_pending_turn(&mut self, reason: &str) {
        if let Some(pending) = self.pending_turn.take() {
            debug!(
                "reader: pending turn cancelled reason={} target={}",
                reason, pending.target
            );
        }
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }

    fn page_count_of(&self, story: u16) -> u16 {
        self.catalog
            .story_at(story)
            .map(|story| story.page_count())
            .unwrap_or(0)
    }
}
