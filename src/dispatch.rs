//! # Dispatcher
//!
//! Routes strings to a grammar and notations to a codec.
//!
//! Parsing tries each [`Grammar`] in order and keeps the first match. The
//! default order is pitch first, then interval, which matters for strings
//! both grammars could read. Building picks the codec from the notation's
//! shape, or from the array length for raw arrays.
//!
//! Nothing here is cached; see [`crate::Converter`] for the memoized entry points.

use serde::Deserialize;

use crate::interval::{build_interval, parse_interval};
use crate::pitch::{build_pitch, build_pitch_class, parse_pitch};
use crate::types::{Notation, Slot};

/// A notation grammar the dispatcher can try
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    Pitch,
    Interval,
}

impl Grammar {
    pub fn parse(self, s: &str) -> Option<Notation> {
        match self {
            Grammar::Pitch => parse_pitch(s),
            Grammar::Interval => parse_interval(s).map(Notation::Interval),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Grammar::Pitch => "pitch",
            Grammar::Interval => "interval",
        }
    }
}

pub const DEFAULT_GRAMMAR_ORDER: [Grammar; 2] = [Grammar::Pitch, Grammar::Interval];

/// Parse with the first grammar in `order` that accepts `s`.
pub fn parse_with(order: &[Grammar], s: &str) -> Option<Notation> {
    let parsed = order.iter().find_map(|grammar| grammar.parse(s));
    if parsed.is_none() {
        log::debug!("no grammar matches {:?}", s);
    }
    parsed
}

/// Build a notation with the codec for its shape.
pub fn build_notation(notation: &Notation) -> Option<String> {
    match notation {
        Notation::PitchClass(pc) => build_pitch_class(pc),
        Notation::Pitch(p) => build_pitch(p),
        Notation::Interval(i) => build_interval(i),
    }
}

/// Build a raw array, choosing the codec by length.
pub fn build_slots(slots: &[Slot]) -> Option<String> {
    Notation::from_slots(slots).and_then(|n| build_notation(&n))
}
