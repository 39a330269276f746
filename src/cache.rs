//! # Memoization
//!
//! Two unbounded maps remember every parse and build result, misses included.
//! Entries are never evicted; [`NotationCache::clear`] empties both maps.
//!
//! ## Keys
//! - parse: the raw input string
//! - build: `shape|s0|s1|s2|s3|s4`, the notation's slots with absent slots as
//!   empty segments, e.g. `interval|1|-1|||`
//!
//! The codecs are pure, so two threads racing on the same key compute equal
//! values and the later insert is harmless.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::types::Notation;

/// Entry counts of both caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub parsed: usize,
    pub built: usize,
}

#[derive(Debug, Default)]
pub struct NotationCache {
    parsed: RwLock<HashMap<String, Option<Notation>>>,
    built: RwLock<HashMap<String, Option<String>>>,
}

impl NotationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached parse of `input`, computing it with `parse` on a miss.
    pub fn get_or_parse<F>(&self, input: &str, parse: F) -> Option<Notation>
    where
        F: FnOnce(&str) -> Option<Notation>,
    {
        let cached = self
            .parsed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(input)
            .copied();
        if let Some(hit) = cached {
            log::trace!("parse cache hit for {:?}", input);
            return hit;
        }

        log::trace!("parse cache miss for {:?}", input);
        let result = parse(input);
        self.parsed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(input.to_string(), result);
        result
    }

    /// Cached build of `notation`, computing it with `build` on a miss.
    pub fn get_or_build<F>(&self, notation: &Notation, build: F) -> Option<String>
    where
        F: FnOnce(&Notation) -> Option<String>,
    {
        let key = build_key(notation);
        let cached = self
            .built
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(hit) = cached {
            log::trace!("build cache hit for {}", key);
            return hit;
        }

        log::trace!("build cache miss for {}", key);
        let result = build(notation);
        self.built
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, result.clone());
        result
    }

    pub fn clear(&self) {
        self.parsed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.built
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        log::debug!("notation caches cleared");
    }

    pub fn stats(&self) -> CacheStats {
        let parsed = self.parsed.read().unwrap_or_else(PoisonError::into_inner);
        let built = self.built.read().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            parsed: parsed.len(),
            built: built.len(),
        }
    }
}

/// Build-cache key: shape tag then the first five slots.
pub fn build_key(notation: &Notation) -> String {
    let slots = notation.to_slots();
    let mut key = notation.shape().to_string();
    for i in 0..5 {
        key.push('|');
        if let Some(Some(n)) = slots.get(i) {
            key.push_str(&n.to_string());
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Interval, PitchClass};
    use std::cell::Cell;

    #[test]
    fn test_build_key() {
        let interval = Notation::Interval(Interval {
            simple: 1,
            alteration: -1,
            octave: None,
        });
        assert_eq!(build_key(&interval), "interval|1|-1|||");

        let class = Notation::PitchClass(PitchClass {
            step: 1,
            alteration: -1,
        });
        assert_eq!(build_key(&class), "pitch-class|1|-1|||");
    }

    #[test]
    fn test_parse_computed_once() {
        let cache = NotationCache::new();
        let calls = Cell::new(0);
        let parse = |s: &str| {
            calls.set(calls.get() + 1);
            crate::pitch::parse_pitch(s)
        };

        let first = cache.get_or_parse("C4", parse);
        let second = cache.get_or_parse("C4", parse);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_misses_are_cached() {
        let cache = NotationCache::new();
        let calls = Cell::new(0);
        let parse = |_: &str| {
            calls.set(calls.get() + 1);
            None
        };

        assert_eq!(cache.get_or_parse("blah", parse), None);
        assert_eq!(cache.get_or_parse("blah", parse), None);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                parsed: 1,
                built: 0
            }
        );
    }

    #[test]
    fn test_clear() {
        let cache = NotationCache::new();
        let n = Notation::Interval(Interval::new(1, 0, 0));
        cache.get_or_build(&n, crate::dispatch::build_notation);
        cache.get_or_parse("2M", |s| crate::dispatch::Grammar::Interval.parse(s));
        assert_eq!(
            cache.stats(),
            CacheStats {
                parsed: 1,
                built: 1
            }
        );

        cache.clear();
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(
            cache.get_or_build(&n, crate::dispatch::build_notation).as_deref(),
            Some("2M")
        );
    }
}
