//! # Interval Codec
//!
//! Converts interval and scale-degree strings to and from array notation.
//!
//! ## Grammar
//! `sign? number quality?`
//! - sign: `-` (descending) or `+`
//! - number: one-based interval number, `1` is a unison, `8` an octave
//! - quality: `d`-`dddd`, `m`, `M`, `P`, `A`-`AAAA`, or the scale-degree
//!   shorthand `b`-`bbbb` / `#`-`####`. No quality means perfect or major.
//!
//! ## Quality Ladders
//! Degrees 1, 4 and 5 are perfect; 2, 3, 6 and 7 are major. Each kind has its
//! own ladder of qualities centred on its natural quality:
//! ```text
//! offset    -4    -3   -2  -1  0  +1  +2   +3   +4
//! perfect  dddd  ddd  dd  d   P  A   AA  AAA  AAAA
//! major    ddd   dd   d   m   M  A   AA  AAA  AAAA
//! ```
//! The `b`/`#` shorthand skips the ladder: the alteration is the run length.
//! `2b` and `2m` both give alteration -1, but `5b` gives -1 while `5m` is
//! not a valid interval at all.
//!
//! ## Descending Intervals
//! A descending interval is stored as its inversion one octave down, so
//! `-2M` becomes `[6, -1, -1]`: a minor seventh below the octave under the root.
//!
//! ## Examples
//! ```rust
//! use notation::{build_interval, parse_interval, Interval};
//!
//! assert_eq!(parse_interval("-9M"), Some(Interval::new(6, -1, -2)));
//! assert_eq!(build_interval(&Interval::new(1, -1, 1)), Some("9m".to_string()));
//! assert_eq!(build_interval(&Interval::new(0, -1, -4)), Some("-29A".to_string()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Interval;

static INTERVAL_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([-+]?)([0-9]+)(d{1,4}|m|M|P|A{1,4}|b{1,4}|#{1,4}|)$")
        .expect("interval grammar is valid")
});

/// Natural quality of an interval degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalType {
    Perfect,
    Major,
}

/// Type of each simple interval, unison to seventh (`P M M P P M M`)
pub const INTERVAL_TYPES: [IntervalType; 7] = [
    IntervalType::Perfect,
    IntervalType::Major,
    IntervalType::Major,
    IntervalType::Perfect,
    IntervalType::Perfect,
    IntervalType::Major,
    IntervalType::Major,
];

pub const PERFECT_QUALITIES: [&str; 9] = [
    "dddd", "ddd", "dd", "d", "P", "A", "AA", "AAA", "AAAA",
];
pub const MAJOR_QUALITIES: [&str; 9] = ["ddd", "dd", "d", "m", "M", "A", "AA", "AAA", "AAAA"];

/// Index of the natural quality in a ladder
const NATURAL: i64 = 4;

impl IntervalType {
    /// Type of a simple interval number; wraps `|simple| mod 7`.
    pub fn of(simple: i64) -> Self {
        INTERVAL_TYPES[(simple.unsigned_abs() % 7) as usize]
    }

    fn ladder(self) -> &'static [&'static str; 9] {
        match self {
            IntervalType::Perfect => &PERFECT_QUALITIES,
            IntervalType::Major => &MAJOR_QUALITIES,
        }
    }

    /// Alteration for a named quality, `None` if this type has no such quality.
    pub fn alteration_of(self, quality: &str) -> Option<i64> {
        let index = self.ladder().iter().position(|q| *q == quality)?;
        Some(index as i64 - NATURAL)
    }

    /// Named quality for an alteration, `None` past four steps either way.
    pub fn quality_of(self, alteration: i64) -> Option<&'static str> {
        let index = usize::try_from(alteration.checked_add(NATURAL)?).ok()?;
        self.ladder().get(index).copied()
    }

    /// Alteration of the inverted interval. Applying it twice is the identity.
    pub fn invert(self, alteration: i64) -> i64 {
        match self {
            IntervalType::Perfect => alteration.saturating_neg(),
            IntervalType::Major => alteration.saturating_add(1).saturating_neg(),
        }
    }
}

/// Parse an interval or scale-degree string.
pub fn parse_interval(s: &str) -> Option<Interval> {
    let caps = INTERVAL_GRAMMAR.captures(s)?;

    let descending = &caps[1] == "-";
    let number: i64 = caps[2].parse().ok()?;
    // No unison below 1: "0" is rejected rather than read as simple interval -1
    if number == 0 {
        return None;
    }
    let num = number - 1;

    let mut simple = num % 7;
    let mut octave = num / 7;
    if descending {
        octave = -octave;
    }
    let kind = IntervalType::of(simple);

    let quality = &caps[3];
    let run = quality.len() as i64;
    let mut alteration = if quality.is_empty() {
        0
    } else if quality.starts_with('#') {
        run
    } else if quality.starts_with('b') {
        -run
    } else {
        kind.alteration_of(quality)?
    };

    if descending {
        alteration = kind.invert(alteration);
        if simple != 0 {
            simple = 7 - simple;
            octave -= 1;
        }
    }

    Some(Interval::new(simple, alteration, octave))
}

/// Build an interval string. Fails when the alteration has no named quality.
pub fn build_interval(interval: &Interval) -> Option<String> {
    let kind = IntervalType::of(interval.simple);
    let number = interval_number(interval)?;
    let alteration = if number < 0 {
        kind.invert(interval.alteration)
    } else {
        interval.alteration
    };
    let quality = kind.quality_of(alteration)?;
    Some(format!("{}{}", number, quality))
}

/// Signed one-based interval number, negative when descending.
///
/// Without an octave the number is just the simple interval.
pub fn interval_number(interval: &Interval) -> Option<i64> {
    let simple = interval.simple % 7 + 1;
    let Some(octave) = interval.octave else {
        return Some(simple);
    };

    let (direction, simple, octaves) = if octave < 0 {
        (-1, 9 - simple, octave.checked_abs()? - 1)
    } else {
        (1, simple, octave)
    };
    let magnitude = octaves.checked_mul(7)?.checked_add(simple)?;
    Some(direction * magnitude)
}
