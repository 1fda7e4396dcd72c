//! Locale codes, the country fun-fact table, and the selector poll step.

use core::fmt;

use heapless::String;
use log::debug;

use crate::text_policy::{BANNER_BYTES, locale_banner};

pub const LOCALE_CODE_BYTES: usize = 16;
pub const DEFAULT_LOCALE: &str = "en";
pub const LOCALE_POLL_INTERVAL_MS: u64 = 2_000;

pub type LocaleBanner = String<BANNER_BYTES>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleError {
    Empty,
    TooLong,
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("locale code is empty"),
            Self::TooLong => write!(f, "locale code exceeds {} bytes", LOCALE_CODE_BYTES),
        }
    }
}

/// Language/region code as chosen by the user, e.g. `en` or `zh-CN`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleCode(String<LOCALE_CODE_BYTES>);

impl LocaleCode {
    pub fn parse(raw: &str) -> Result<Self, LocaleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut code = String::new();
        code.push_str(trimmed).map_err(|()| LocaleError::TooLong)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        let mut code = String::new();
        let _ = code.push_str(DEFAULT_LOCALE);
        Self(code)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag and national animal shown for a supported locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountryInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub animal: &'static str,
}

pub const COUNTRY_INFO: [CountryInfo; 6] = [
    CountryInfo {
        code: "en",
        flag: "🇺🇸 / 🇬🇧",
        animal: "Eagle / Lion",
    },
    CountryInfo {
        code: "si",
        flag: "🇱🇰",
        animal: "Jungle Fowl",
    },
    CountryInfo {
        code: "hi",
        flag: "🇮🇳",
        animal: "Bengal Tiger",
    },
    CountryInfo {
        code: "es",
        flag: "🇪🇸",
        animal: "Bull",
    },
    CountryInfo {
        code: "fr",
        flag: "🇫🇷",
        animal: "Gallic Rooster",
    },
    CountryInfo {
        code: "zh-CN",
        flag: "🇨🇳",
        animal: "Giant Panda",
    },
];

pub fn country_info(code: &str) -> Option<&'static CountryInfo> {
    COUNTRY_INFO.iter().find(|info| info.code == code)
}

/// Externally rendered locale selector. Read-only from the reader's side.
pub trait LocaleSource {
    type Error;

    /// Current selector value, `None` while nothing is selected.
    fn selected(&mut self) -> Result<Option<LocaleCode>, Self::Error>;
}

/// Result of a poll step that observed a new selector value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleUpdate {
    pub code: LocaleCode,
    /// Refreshed banner; `None` when the code has no table entry and the
    /// previous banner stays on screen.
    pub banner: Option<LocaleBanner>,
}

/// Pull-based synchronization with a [`LocaleSource`].
///
/// Run [`LocaleSync::poll`] on a fixed schedule. It only reports changes, so
/// an idle selector costs one read per interval.
pub struct LocaleSync<LS> {
    source: LS,
    last_seen: Option<LocaleCode>,
    banner: LocaleBanner,
}

impl<LS> LocaleSync<LS>
where
    LS: LocaleSource,
{
    pub fn new(source: LS) -> Self {
        Self {
            source,
            last_seen: None,
            banner: LocaleBanner::new(),
        }
    }

    pub fn poll(&mut self) -> Result<Option<LocaleUpdate>, LS::Error> {
        let Some(selected) = self.source.selected()? else {
            return Ok(None);
        };

        if self.last_seen.as_ref() == Some(&selected) {
            return Ok(None);
        }

        let banner = match country_info(selected.as_str()) {
            Some(info) => {
                self.banner = locale_banner(info, selected.as_str());
                Some(self.banner.clone())
            }
            None => {
                debug!("locale: no country info for code={}", selected);
                None
            }
        };

        debug!("locale: selector changed code={}", selected);
        self.last_seen = Some(selected.clone());
        Ok(Some(LocaleUpdate {
            code: selected,
            banner,
        }))
    }

    pub fn banner(&self) -> &str {
        self.banner.as_str()
    }

    pub fn last_seen(&self) -> Option<&LocaleCode> {
        self.last_seen.as_ref()
    }
}
