//! Speech through an external synthesizer program (espeak-ng compatible).
//!
//! Each utterance runs as one child process; cancelling kills it. The
//! program is expected to accept `-v <voice> -p <pitch 0..99> -s <wpm>`
//! followed by the text.

use std::{
    io,
    process::{Child, Command, Stdio},
};

use log::{debug, warn};
use storybook_core::platform::{SpeechError, SpeechSynth, Utterance};

pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

const BASE_PITCH: f32 = 50.0;
const MAX_PITCH: f32 = 99.0;
const BASE_WPM: f32 = 175.0;
const MIN_WPM: f32 = 80.0;
const MAX_WPM: f32 = 450.0;

#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: None,
        }
    }

    /// Command-line arguments for one utterance.
    pub fn args_for(utterance: &Utterance<'_>) -> [String; 7] {
        let pitch = (utterance.pitch * BASE_PITCH).clamp(0.0, MAX_PITCH).round() as u32;
        let wpm = (utterance.rate * BASE_WPM).clamp(MIN_WPM, MAX_WPM).round() as u32;
        [
            "-v".to_string(),
            utterance.lang.to_string(),
            "-p".to_string(),
            pitch.to_string(),
            "-s".to_string(),
            wpm.to_string(),
            utterance.text.to_string(),
        ]
    }
}

impl Default for CommandSpeech {
    fn default() -> Self {
        Self::new(DEFAULT_SPEECH_PROGRAM)
    }
}

impl SpeechSynth for CommandSpeech {
    fn cancel(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        if matches!(child.try_wait(), Ok(None)) {
            debug!("speech: cancelling pid={}", child.id());
            if let Err(err) = child.kill() {
                debug!("speech: kill failed: {}", err);
            }
        }
        let _ = child.wait();
    }

    fn speak(&mut self, utterance: Utterance<'_>) -> Result<(), SpeechError> {
        self.cancel();

        let spawned = Command::new(&self.program)
            .args(Self::args_for(&utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(
                    "speech: started pid={} lang={}",
                    child.id(),
                    utterance.lang
                );
                self.child = Some(child);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("speech: program {:?} not found", self.program);
                Err(SpeechError::Unsupported)
            }
            Err(err) => {
                warn!("speech: program {:?} failed to start: {}", self.program, err);
                Err(SpeechError::Unavailable)
            }
        }
    }

    fn is_speaking(&mut self) -> bool {
        self.child
            .as_mut()
            .is_some_and(|child| matches!(child.try_wait(), Ok(None)))
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}
