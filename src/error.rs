//! # Error Types
//!
//! The codecs signal a failed parse or build by returning `None`. This module
//! holds the error type for the surfaces that need a `Result` instead:
//! `FromStr`, `TryFrom`, serde deserialization and configuration loading.
//!
//! ## Usage
//! ```rust
//! use notation::{Notation, NotationError};
//!
//! match "blah".parse::<Notation>() {
//!     Ok(n) => println!("{:?}", n.to_slots()),
//!     Err(NotationError::NoMatch { input }) => eprintln!("not a pitch or interval: {}", input),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The input matches neither the pitch nor the interval grammar, or the
    /// array has no shape a codec accepts.
    ///
    /// # Example
    /// ```
    /// # use notation::NotationError;
    /// let err = NotationError::NoMatch { input: "blah".to_string() };
    /// assert_eq!(err.to_string(), "No match for notation: blah");
    /// ```
    #[error("No match for notation: {input}")]
    NoMatch { input: String },

    /// Invalid converter configuration.
    ///
    /// # Example
    /// ```
    /// # use notation::NotationError;
    /// let err = NotationError::ConfigError("grammar-order must not be empty".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: grammar-order must not be empty");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl NotationError {
    pub(crate) fn no_match(input: impl Into<String>) -> Self {
        NotationError::NoMatch {
            input: input.into(),
        }
    }
}
