//! # Array Notation Types
//!
//! Pitches and intervals travel between the codecs and their consumers as
//! short integer arrays. The array length alone used to say what an array
//! meant; here every shape gets its own variant.
//!
//! ## Shapes
//! ```text
//! Notation
//!   ├── PitchClass  [step, alteration]                    "C#"
//!   ├── Pitch       [step, alteration, octave, reserved]  "C#4"
//!   └── Interval    [simple, alteration, octave]          "3M", "-2M"
//! ```
//!
//! ### Slots
//! A raw array is a list of [`Slot`]s. `None` is the absent value, which is
//! not the same as octave `0`: `[0, 0, null, 0]` builds `"C"` while
//! `[0, 0, 0, 0]` builds `"C0"`.
//!
//! ### Length Rule
//! [`Notation::from_slots`] maps a raw array to a shape by length:
//! - 0 slots: no shape
//! - 1 or 2 slots: `PitchClass`
//! - 3 slots: `Interval`
//! - 4 or more slots: `Pitch` (slots after the fourth are ignored)
//!
//! ### Interval Octave
//! The interval octave doubles as the direction: a negative octave marks a
//! descending interval. `[6, -1, -1]` is `"-2M"`, not "a seventh in octave -1".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dispatch::{self, DEFAULT_GRAMMAR_ORDER};
use crate::error::NotationError;

/// One position of a raw notation array. `None` is the absent value.
pub type Slot = Option<i64>;

/// Pitch without octave, e.g. `C#`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClass {
    pub step: i64,
    pub alteration: i64,
}

/// Pitch with an octave slot, e.g. `C#4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pitch {
    pub step: i64,
    pub alteration: i64,
    pub octave: Option<i64>,
    /// Always `0` when parsed; never read when building.
    pub reserved: i64,
}

impl Pitch {
    pub fn new(step: i64, alteration: i64, octave: i64) -> Self {
        Self {
            step,
            alteration,
            octave: Some(octave),
            reserved: 0,
        }
    }
}

/// Interval or scale degree, e.g. `3M`, `b2` written as `2b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    /// Zero-based simple interval number, 0 (unison) to 6 (seventh)
    pub simple: i64,
    pub alteration: i64,
    /// Octave count, negative for descending intervals
    pub octave: Option<i64>,
}

impl Interval {
    pub fn new(simple: i64, alteration: i64, octave: i64) -> Self {
        Self {
            simple,
            alteration,
            octave: Some(octave),
        }
    }
}

impl FromStr for Interval {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::interval::parse_interval(s)
            .ok_or_else(|| NotationError::no_match(s))
    }
}

/// A parsed pitch, pitch class or interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slot>", into = "Vec<Slot>")]
pub enum Notation {
    PitchClass(PitchClass),
    Pitch(Pitch),
    Interval(Interval),
}

impl Notation {
    /// Pick a shape for a raw array by its length.
    ///
    /// Absent step and alteration slots read as `0`; an absent octave stays absent.
    ///
    /// ```
    /// use notation::{Interval, Notation};
    ///
    /// let n = Notation::from_slots(&[Some(1), Some(-1), None]);
    /// let expected = Interval {
    ///     simple: 1,
    ///     alteration: -1,
    ///     octave: None,
    /// };
    /// assert_eq!(n, Some(Notation::Interval(expected)));
    /// assert_eq!(Notation::from_slots(&[]), None);
    /// ```
    pub fn from_slots(slots: &[Slot]) -> Option<Notation> {
        let int = |i: usize| slots.get(i).copied().flatten().unwrap_or(0);
        let opt = |i: usize| slots.get(i).copied().flatten();

        match slots.len() {
            0 => None,
            1 | 2 => Some(Notation::PitchClass(PitchClass {
                step: int(0),
                alteration: int(1),
            })),
            3 => Some(Notation::Interval(Interval {
                simple: int(0),
                alteration: int(1),
                octave: opt(2),
            })),
            _ => Some(Notation::Pitch(Pitch {
                step: int(0),
                alteration: int(1),
                octave: opt(2),
                reserved: int(3),
            })),
        }
    }

    /// The canonical raw array for this shape.
    pub fn to_slots(&self) -> Vec<Slot> {
        match *self {
            Notation::PitchClass(pc) => vec![Some(pc.step), Some(pc.alteration)],
            Notation::Pitch(p) => vec![
                Some(p.step),
                Some(p.alteration),
                p.octave,
                Some(p.reserved),
            ],
            Notation::Interval(i) => vec![Some(i.simple), Some(i.alteration), i.octave],
        }
    }

    /// Short name of the shape, used in cache keys and logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Notation::PitchClass(_) => "pitch-class",
            Notation::Pitch(_) => "pitch",
            Notation::Interval(_) => "interval",
        }
    }

    /// Render with the codec for this shape (uncached).
    pub fn build(&self) -> Option<String> {
        dispatch::build_notation(self)
    }
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dispatch::parse_with(&DEFAULT_GRAMMAR_ORDER, s)
            .ok_or_else(|| NotationError::no_match(s))
    }
}

impl TryFrom<Vec<Slot>> for Notation {
    type Error = NotationError;

    fn try_from(slots: Vec<Slot>) -> Result<Self, Self::Error> {
        Notation::from_slots(&slots)
            .ok_or_else(|| NotationError::no_match(format_slots(&slots)))
    }
}

impl From<Notation> for Vec<Slot> {
    fn from(notation: Notation) -> Self {
        notation.to_slots()
    }
}

impl From<PitchClass> for Notation {
    fn from(pc: PitchClass) -> Self {
        Notation::PitchClass(pc)
    }
}

impl From<Pitch> for Notation {
    fn from(p: Pitch) -> Self {
        Notation::Pitch(p)
    }
}

impl From<Interval> for Notation {
    fn from(i: Interval) -> Self {
        Notation::Interval(i)
    }
}

/// Input to the dispatcher: either a notation string or a raw array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Array(Vec<Slot>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Slot>> for Value {
    fn from(slots: Vec<Slot>) -> Self {
        Value::Array(slots)
    }
}

impl From<Notation> for Value {
    fn from(notation: Notation) -> Self {
        Value::Array(notation.to_slots())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Array(slots) => f.write_str(&format_slots(slots)),
        }
    }
}

/// Format a raw array as `[0, 1, null]`.
pub fn format_slots(slots: &[Slot]) -> String {
    let items: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Some(n) => n.to_string(),
            None => "null".to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}
