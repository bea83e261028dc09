use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;

/// Inclusive range of ingredient ids. `start <= end` always holds.
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    /// Panics if `start > end`; parsed input goes through [`Range::parse`] instead.
    pub fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "Inverted range {start}-{end}");
        Self { start, end }
    }

    /// Parses an `A-B` line. `line` is the 1-based line number used in errors.
    pub fn parse(line: usize, text: &str) -> Result<Self, ParseError> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^([+-]?\d+)-([+-]?\d+)$").unwrap();
        }
        let malformed = || ParseError::MalformedRange {
            line,
            text: text.to_owned(),
        };
        let (start, end) = RE
            .captures(text.trim())
            .and_then(|cap| match (cap.get(1), cap.get(2)) {
                (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
                _ => None,
            })
            .ok_or_else(malformed)?;
        let start: i64 = start.parse().map_err(|_| malformed())?;
        let end: i64 = end.parse().map_err(|_| malformed())?;
        if start > end {
            return Err(ParseError::InvertedRange { line, start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of ids in the range. Saturates only for the full `i64` domain.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id <= self.end
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<std::ops::RangeInclusive<i64>> for Range {
    fn from(value: std::ops::RangeInclusive<i64>) -> Self {
        Self::new(*value.start(), *value.end())
    }
}
