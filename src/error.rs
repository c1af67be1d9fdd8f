//! # Error Types
//!
//! This module defines all error types for the theory engine.
//!
//! Every failure is an input-validation failure: the engine does no partial work,
//! so there is nothing to roll back and nothing worth retrying.
//!
//! ## Error Types
//! - `UnknownNote` - Note name/spelling not recognized
//! - `UnknownChordType` - Chord template not in the catalog
//! - `MalformedChordSymbol` - Chord symbol like "D#maj7" that doesn't follow the grammar
//! - `ConfigError` - Invalid YAML or out-of-range engine configuration
//!
//! ## Usage
//! ```rust
//! use theory_quest::{build_chord, TheoryError};
//!
//! match build_chord("H", "Minor") {
//!     Ok(chord) => println!("{:?}", chord.names()),
//!     Err(TheoryError::UnknownNote(name)) => eprintln!("No such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// Note name not recognized, including enharmonic spellings.
    ///
    /// # Example
    /// ```
    /// # use theory_quest::TheoryError;
    /// let err = TheoryError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// Chord type not present in the catalog.
    ///
    /// # Example
    /// ```
    /// # use theory_quest::TheoryError;
    /// let err = TheoryError::UnknownChordType("Lydian".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord type: Lydian");
    /// ```
    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    /// Chord symbol that doesn't split into a root token and a known flavor token.
    ///
    /// # Example
    /// ```
    /// # use theory_quest::TheoryError;
    /// let err = TheoryError::MalformedChordSymbol {
    ///     symbol: "Cwobble".to_string(),
    ///     message: "unknown chord flavor 'wobble'".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Malformed chord symbol 'Cwobble': unknown chord flavor 'wobble'"
    /// );
    /// ```
    #[error("Malformed chord symbol '{symbol}': {message}")]
    MalformedChordSymbol { symbol: String, message: String },

    /// Invalid engine configuration.
    ///
    /// Occurs when the YAML config can't be read or holds out-of-range values.
    #[error("Invalid config: {0}")]
    ConfigError(String),
}
