//! # Converter
//!
//! Memoized entry points over the dispatcher.
//!
//! A `Converter` owns its caches, so tests and embedders can keep separate
//! instances. The crate-level [`crate::convert`], [`crate::parse`] and
//! [`crate::build`] share one process-wide converter.
//!
//! ## Example
//! ```rust
//! use notation::{Converter, Value};
//!
//! let converter = Converter::new();
//! let arr = converter.convert(&Value::from("C#4"));
//! assert_eq!(arr, Some(Value::Array(vec![Some(0), Some(1), Some(4), Some(0)])));
//!
//! let text = converter.convert(&Value::Array(vec![Some(1), Some(-1), Some(1)]));
//! assert_eq!(text, Some(Value::Text("9m".to_string())));
//! ```

use crate::cache::{CacheStats, NotationCache};
use crate::config::ConverterConfig;
use crate::dispatch::{build_notation, parse_with, Grammar};
use crate::types::{Notation, Slot, Value};

#[derive(Debug)]
pub struct Converter {
    cache: NotationCache,
    memoize: bool,
    grammar_order: Vec<Grammar>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            cache: NotationCache::new(),
            memoize: config.memoize,
            grammar_order: config.grammar_order,
        }
    }

    /// Parse a pitch or interval string.
    pub fn parse(&self, input: &str) -> Option<Notation> {
        let order = &self.grammar_order;
        if self.memoize {
            self.cache.get_or_parse(input, |s| parse_with(order, s))
        } else {
            parse_with(order, input)
        }
    }

    /// Build the string for a notation.
    pub fn build(&self, notation: &Notation) -> Option<String> {
        if self.memoize {
            self.cache.get_or_build(notation, build_notation)
        } else {
            build_notation(notation)
        }
    }

    /// Build a raw array, choosing the codec by its length.
    pub fn build_slots(&self, slots: &[Slot]) -> Option<String> {
        let notation = Notation::from_slots(slots)?;
        self.build(&notation)
    }

    /// Array form of a value. Arrays pass through unchanged.
    pub fn to_array(&self, value: &Value) -> Option<Vec<Slot>> {
        match value {
            Value::Array(slots) => Some(slots.clone()),
            Value::Text(s) => self.parse(s).map(|n| n.to_slots()),
        }
    }

    /// String form of an array. Strings have none.
    pub fn to_text(&self, value: &Value) -> Option<String> {
        match value {
            Value::Array(slots) => self.build_slots(slots),
            Value::Text(_) => None,
        }
    }

    /// Parse strings, build arrays.
    pub fn convert(&self, value: &Value) -> Option<Value> {
        match value {
            Value::Text(_) => self.to_array(value).map(Value::Array),
            Value::Array(_) => self.to_text(value).map(Value::Text),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
