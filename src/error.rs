//! # Error Types
//!
//! This module defines all error types for the carol player.
//!
//! Decoding errors carry the offending token and its character offset so a
//! song author can find the bad spot in a long MML string.
//!
//! ## Error Types
//! - `DecodeError` - An MML token the decoder does not understand
//! - `DivisionByZero` - A note whose duration divisor (`n * tempo`) is zero
//! - `ConfigError` - Invalid YAML configuration
//! - `UnknownSong` - A song name missing from the library
//!
//! ## Usage
//! ```rust
//! use carol::{decode_all, MmlError};
//!
//! match decode_all("c4 z") {
//!     Ok(events) => println!("{} events", events.len()),
//!     Err(MmlError::DecodeError { token, offset, .. }) => {
//!         eprintln!("Unknown token {:?} at offset {}", token, offset);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MmlError {
    /// Unrecognized token.
    ///
    /// Decoding halts at the first token that is neither a separator, a
    /// directive, an octave shift, a rest, a note number nor a known step.
    ///
    /// # Example
    /// ```
    /// # use carol::MmlError;
    /// let err = MmlError::DecodeError {
    ///     token: "z".to_string(),
    ///     number: 4,
    ///     dots: 1,
    ///     offset: 7,
    /// };
    /// assert_eq!(err.to_string(), "Unrecognized token 'z' at offset 7 (number 4, dots 1)");
    /// ```
    #[error("Unrecognized token '{token}' at offset {offset} (number {number}, dots {dots})")]
    DecodeError {
        token: String,
        number: u32,
        dots: usize,
        offset: usize,
    },

    /// Duration divisor is zero.
    ///
    /// Raised for `n0` (note numbers never fall back to the default length),
    /// and for any note or rest played after `T0` or `l0`.
    #[error("Division by zero computing the duration of '{token}' at offset {offset}")]
    DivisionByZero { token: String, offset: usize },

    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use carol::MmlError;
    /// let err = MmlError::ConfigError("colorway must not be empty".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: colorway must not be empty");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Unknown song: {0}")]
    UnknownSong(String),
}
