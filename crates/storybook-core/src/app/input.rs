impl<C, IN, SP, FS> ReaderApp<C, IN, SP, FS>
where
    C: StoryCatalog,
    IN: InputProvider,
    SP: SpeechSynth,
    FS: FullscreenControl,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("reader: input provider failed");
                    self.show_notice(INPUT_NOTICE, now_ms);
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Exit => {
                self.shutdown();
                self.exit_requested = true;
                return;
            }
            InputEvent::ToggleFullscreen => {
                if self.toggle_fullscreen().is_err() {
                    self.show_notice(FULLSCREEN_NOTICE, now_ms);
                }
                return;
            }
            _ => {}
        }

        match self.ui {
            UiState::Library { cursor } => self.apply_library_input(cursor, event, now_ms),
            UiState::Reading { story, page } => {
                self.apply_reading_input(story, page, event, now_ms)
            }
        }
    }

    fn apply_library_input(&mut self, cursor: u16, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Next => self.move_library_cursor(cursor, true, now_ms),
            InputEvent::Previous => self.move_library_cursor(cursor, false, now_ms),
            InputEvent::Select => {
                if self.open_index(cursor, now_ms).is_err() {
                    self.show_notice(NOT_FOUND_NOTICE, now_ms);
                }
            }
            InputEvent::Back
            | InputEvent::ReadAloud
            | InputEvent::JumpTo(_)
            | InputEvent::ToggleFullscreen
            | InputEvent::Exit => {}
        }
    }

    fn apply_reading_input(&mut self, story: u16, page: u16, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Next => {
                let _ = self.turn(TurnDirection::Forward, now_ms);
            }
            InputEvent::Previous => {
                let _ = self.turn(TurnDirection::Backward, now_ms);
            }
            InputEvent::Back => self.close(now_ms),
            InputEvent::Select => {
                if page == self.page_count_of(story) {
                    self.close(now_ms);
                }
            }
            InputEvent::ReadAloud => {
                if self.read_aloud().is_err() {
                    self.show_notice(SPEECH_NOTICE, now_ms);
                }
            }
            InputEvent::JumpTo(target) => {
                let _ = self.jump_to(target, now_ms);
            }
            InputEvent::ToggleFullscreen | InputEvent::Exit => {}
        }
    }
}
