//! Fixed-capacity label formatting for the library, reader and locale banner.

use heapless::String;

use crate::locale::CountryInfo;

pub const BLURB_BYTES: usize = 64;
pub const PROGRESS_LABEL_BYTES: usize = 24;
pub const BANNER_BYTES: usize = 160;

/// Card subtitle: "A story about {theme}".
pub fn story_blurb(theme: &str) -> String<BLURB_BYTES> {
    let mut out = String::new();
    push_truncated(&mut out, "A story about ");
    push_truncated(&mut out, theme);
    out
}

/// One-based page label, e.g. "Page 2 of 5".
pub fn page_progress_label(page_number: u16, page_total: u16) -> String<PROGRESS_LABEL_BYTES> {
    let mut out = String::new();
    push_truncated(&mut out, "Page ");
    push_u16(&mut out, page_number);
    push_truncated(&mut out, " of ");
    push_u16(&mut out, page_total);
    out
}

/// Locale fun-fact line shown above the library and reader.
pub fn locale_banner(info: &CountryInfo, code: &str) -> String<BANNER_BYTES> {
    let mut out = String::new();
    push_truncated(&mut out, info.flag);
    push_truncated(&mut out, " Reading in ");
    for ch in code.chars() {
        if out.push(ch.to_ascii_uppercase()).is_err() {
            return out;
        }
    }
    push_truncated(&mut out, " | Fun Fact: National Animal is ");
    push_truncated(&mut out, info.animal);
    out
}

/// Appends as many whole characters of `text` as fit.
pub fn push_truncated<const N: usize>(out: &mut String<N>, text: &str) {
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
}

fn push_u16<const N: usize>(out: &mut String<N>, mut value: u16) {
    let mut digits = [0u8; 5];
    let mut n = 0usize;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    for &digit in digits[..n].iter().rev() {
        if out.push(digit as char).is_err() {
            break;
        }
    }
}
