pub mod cache;
pub mod config;
pub mod converter;
pub mod dispatch;
pub mod error;
pub mod interval;
pub mod pitch;
pub mod types;

use once_cell::sync::Lazy;

pub use cache::{CacheStats, NotationCache};
pub use config::ConverterConfig;
pub use converter::Converter;
pub use dispatch::{Grammar, DEFAULT_GRAMMAR_ORDER};
pub use error::NotationError;
pub use interval::{build_interval, interval_number, parse_interval, IntervalType};
pub use pitch::{build_pitch, build_pitch_class, parse_pitch};
pub use types::*;

static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::new);

/// The process-wide converter behind [`convert`], [`parse`] and [`build`].
pub fn default_converter() -> &'static Converter {
    &DEFAULT_CONVERTER
}

/// Parse a string, or build an array. This is the main entry point for the library.
pub fn convert(value: &Value) -> Option<Value> {
    DEFAULT_CONVERTER.convert(value)
}

/// Parse a pitch or interval string (memoized)
pub fn parse(input: &str) -> Option<Notation> {
    DEFAULT_CONVERTER.parse(input)
}

/// Build the string for a notation (memoized)
pub fn build(notation: &Notation) -> Option<String> {
    DEFAULT_CONVERTER.build(notation)
}
