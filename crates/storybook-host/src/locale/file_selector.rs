//! Locale selector backed by a small text file.
//!
//! The file holds one locale code (e.g. `fr`). Whatever writes it plays the
//! role of the language picker; the reader only ever reads it.

use std::{fs, io, path::PathBuf};

use log::debug;
use storybook_core::locale::{LocaleCode, LocaleSource};

#[derive(Debug, Clone)]
pub struct FileLocaleSource {
    path: PathBuf,
}

impl FileLocaleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocaleSource for FileLocaleSource {
    type Error = io::Error;

    fn selected(&mut self) -> Result<Option<LocaleCode>, Self::Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        match LocaleCode::parse(&raw) {
            Ok(code) => Ok(Some(code)),
            Err(err) => {
                debug!("locale: ignoring selector file {:?}: {}", self.path, err);
                Ok(None)
            }
        }
    }
}
