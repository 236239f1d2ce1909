//! Verse-range references (`"2:201"`, `"1:2-7"`) and deep links.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Host that verse deep links point at.
pub const QURAN_HOST: &str = "https://quran.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("invalid verse reference `{0}`: expected `<surah>:<verse>` or `<surah>:<start>-<end>`")]
    Malformed(String),
    #[error("invalid verse reference `{0}`: surah and verse numbers start at 1")]
    Zero(String),
    #[error("invalid verse reference `{0}`: range ends before it starts")]
    Reversed(String),
}

/// A contiguous run of verses within one surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseRange {
    pub surah: u16,
    pub start: u32,
    pub end: u32,
}

impl VerseRange {
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Never true for a parsed range.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// `"<surah>:<n>"` for every verse in the range, in order.
    pub fn verse_keys(&self) -> impl Iterator<Item = String> + '_ {
        (self.start..=self.end).map(move |v| format!("{}:{v}", self.surah))
    }

    pub fn url(&self) -> String {
        format!("{QURAN_HOST}/{self}")
    }
}

fn parse_number<T: FromStr>(part: &str, whole: &str) -> Result<T, ReferenceError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReferenceError::Malformed(whole.to_string()));
    }
    part.parse()
        .map_err(|_| ReferenceError::Malformed(whole.to_string()))
}

impl FromStr for VerseRange {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (surah, verses) = s
            .split_once(':')
            .ok_or_else(|| ReferenceError::Malformed(s.to_string()))?;
        let (start, end) = match verses.split_once('-') {
            Some((start, end)) => (start, Some(end)),
            None => (verses, None),
        };

        let surah: u16 = parse_number(surah, s)?;
        let start: u32 = parse_number(start, s)?;
        let end: u32 = match end {
            Some(end) => parse_number(end, s)?,
            None => start,
        };

        if surah == 0 || start == 0 {
            return Err(ReferenceError::Zero(s.to_string()));
        }
        if end < start {
            return Err(ReferenceError::Reversed(s.to_string()));
        }
        Ok(Self { surah, start, end })
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}:{}", self.surah, self.start)
        } else {
            write!(f, "{}:{}-{}", self.surah, self.start, self.end)
        }
    }
}

/// Deep link for a reference string, passed through verbatim.
///
/// ```
/// assert_eq!(tilawah::quran_url("1:2-7"), "https://quran.com/1:2-7");
/// ```
pub fn quran_url(verse_range: &str) -> String {
    format!("{QURAN_HOST}/{verse_range}")
}
