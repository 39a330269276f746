//! # Pitch Codec
//!
//! Converts pitch strings in scientific notation to and from array notation.
//!
//! ## Grammar
//! `letter accidentals? octave?`
//! - letter: `A`-`G`, either case
//! - accidentals: 1-4 `#`, 1-4 `b`, or 1-2 `x` (each `x` is a double sharp)
//! - octave: optional non-negative integer
//!
//! ## Examples
//! ```rust
//! use notation::{parse_pitch, Notation, Pitch, PitchClass};
//!
//! assert_eq!(parse_pitch("g4"), Some(Notation::Pitch(Pitch::new(4, 0, 4))));
//! let fx = PitchClass { step: 3, alteration: 2 };
//! assert_eq!(parse_pitch("fx"), Some(Notation::PitchClass(fx)));
//! assert_eq!(parse_pitch("blah"), None);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Notation, Pitch, PitchClass};

/// Letter names indexed by step
pub const LETTERS: &str = "CDEFGAB";

static PITCH_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-gA-G])(#{1,4}|b{1,4}|x{1,2}|)([0-9]*)$")
        .expect("pitch grammar is valid")
});

/// Parse a pitch or pitch class string.
///
/// Returns a `Pitch` when an octave is written, a `PitchClass` otherwise.
pub fn parse_pitch(s: &str) -> Option<Notation> {
    let caps = PITCH_GRAMMAR.captures(s)?;

    let letter = caps[1].to_ascii_uppercase();
    let step = LETTERS.find(letter.as_str())? as i64;

    let accidentals = &caps[2];
    let mut alteration = accidentals.replace('x', "##").len() as i64;
    if accidentals.starts_with('b') {
        alteration = -alteration;
    }

    let octave = &caps[3];
    if octave.is_empty() {
        return Some(Notation::PitchClass(PitchClass { step, alteration }));
    }
    // An octave too large for i64 cannot round-trip
    let octave: i64 = octave.parse().ok()?;
    Some(Notation::Pitch(Pitch::new(step, alteration, octave)))
}

/// Longest accidental run a build will write
pub const MAX_ACCIDENTALS: u64 = 1024;

/// Build a pitch string. The reserved slot is ignored.
///
/// Fails when the alteration needs more than [`MAX_ACCIDENTALS`] accidentals.
pub fn build_pitch(pitch: &Pitch) -> Option<String> {
    let mut out = letter_and_accidentals(pitch.step, pitch.alteration)?;
    if let Some(octave) = pitch.octave {
        out.push_str(&octave.to_string());
    }
    Some(out)
}

/// Build a pitch class string.
pub fn build_pitch_class(pc: &PitchClass) -> Option<String> {
    letter_and_accidentals(pc.step, pc.alteration)
}

/// Out-of-range and negative steps wrap as `|step| mod 7`.
fn letter_and_accidentals(step: i64, alteration: i64) -> Option<String> {
    let count = alteration.unsigned_abs();
    if count > MAX_ACCIDENTALS {
        return None;
    }

    let index = (step.unsigned_abs() % 7) as usize;
    let mut out = LETTERS[index..=index].to_string();
    let accidental = if alteration < 0 { "b" } else { "#" };
    out.push_str(&accidental.repeat(count as usize));
    Some(out)
}
