use std::path::PathBuf;

use log::warn;
use storybook_core::locale::LocaleCode;
use storybook_host::speech::command::DEFAULT_SPEECH_PROGRAM;

const DEFAULT_FRAME_MS: u64 = 33;
const MIN_FRAME_MS: u64 = 5;
const MAX_FRAME_MS: u64 = 1_000;

/// Startup settings taken from `STORYBOOK_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct HostConfig {
    pub(super) locale: LocaleCode,
    pub(super) locale_file: Option<PathBuf>,
    pub(super) speech_program: String,
    pub(super) frame_ms: u64,
    pub(super) log_file: Option<PathBuf>,
}

impl HostConfig {
    pub(super) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(super) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let locale = match non_empty("STORYBOOK_LOCALE") {
            Some(raw) => LocaleCode::parse(&raw).unwrap_or_else(|err| {
                warn!("config: STORYBOOK_LOCALE={:?} rejected: {}", raw, err);
                LocaleCode::default()
            }),
            None => LocaleCode::default(),
        };

        let frame_ms = match non_empty("STORYBOOK_FRAME_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(value) => value.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
                Err(_) => {
                    warn!("config: STORYBOOK_FRAME_MS={:?} is not a number", raw);
                    DEFAULT_FRAME_MS
                }
            },
            None => DEFAULT_FRAME_MS,
        };

        Self {
            locale,
            locale_file: non_empty("STORYBOOK_LOCALE_FILE").map(PathBuf::from),
            speech_program: non_empty("STORYBOOK_SPEECH_CMD")
                .unwrap_or_else(|| DEFAULT_SPEECH_PROGRAM.to_string()),
            frame_ms,
            log_file: non_empty("STORYBOOK_LOG_FILE").map(PathBuf::from),
        }
    }
}
