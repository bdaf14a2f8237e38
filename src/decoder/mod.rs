//! # Decoder Module
//!
//! Turn an MML string into a lazy sequence of tone/rest events.
//!
//! ## Purpose
//! The decoder walks the MML text left to right, one logical token at a time
//! (see [`crate::lexer`]), keeps a [`PerformanceContext`] up to date and yields
//! an [`Event`] for every rest, step name and explicit note number.
//!
//! ## Sub-modules
//! - `types` - Event and PerformanceContext definitions
//!
//! ## Entry Points
//! - [`decode()`] - Lazy iterator, one event per pull
//! - [`decode_all()`] - Collect every event, stopping at the first error
//!
//! ## Example
//! ```rust
//! use carol::decode;
//!
//! let mut events = decode("T132V15b4");
//! let event = events.next().unwrap().unwrap();
//!
//! assert_eq!(event.duration, 240.0 / (4.0 * 132.0));
//! assert_eq!(event.volume, 15);
//! assert!(events.next().is_none());
//! ```
//!
//! ## Durations
//!
//! A length code `n` lasts `240 / (n * tempo)` seconds, so at the default tempo
//! of 120 `c4` is half a second. A missing number means the default length
//! (`l`, initially 5). A dot adds `n / 2` to `n` before the formula is applied;
//! `c4.` therefore uses code 6. Further dots change nothing.
//!
//! ## Ties
//!
//! The `&` marker is accepted after a note but does not lengthen it. The
//! embedded songs were written against this behavior.
//!
//! ## Failure
//!
//! Decoding stops at the first error and the iterator yields nothing after it.
//! `n` with no number (or `n0`) never falls back to the default length and
//! fails with [`MmlError::DivisionByZero`], as does any note after `T0`.

mod types;

#[cfg(test)]
mod tests;

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::MmlError;
use crate::lexer::{Directive, Lexer, ScannedToken, Token};
use crate::pitch::frequency;

pub use types::{Event, PerformanceContext};

/// Lazy MML decoder
///
/// Created by [`decode()`]. Each call to `next` resumes scanning where the
/// previous one stopped. The decoder cannot be rewound; decode the text again
/// to replay it.
pub struct Decoder<'a> {
    lexer: Lexer<'a>,
    context: PerformanceContext,
    finished: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            context: PerformanceContext::default(),
            finished: false,
        }
    }

    /// Apply one token to the context, returning the event it produces, if any.
    fn interpret(&mut self, token: &ScannedToken<'_>) -> Result<Option<Event>, MmlError> {
        let event = match token.classify() {
            Token::Separator => return Ok(None),
            Token::Directive(directive, n) => {
                self.apply_directive(directive, n);
                return Ok(None);
            }
            Token::OctaveDown => {
                self.context.octave = self.context.octave.saturating_sub(1);
                return Ok(None);
            }
            Token::OctaveUp => {
                self.context.octave = self.context.octave.saturating_add(1);
                return Ok(None);
            }
            Token::Rest(n) => {
                let n = self.context.length_or_default(n);
                Event {
                    frequency: 0.0,
                    duration: self.duration(n, token)?,
                    volume: 0,
                }
            }
            Token::NoteNumber(n) => {
                let octave = i32::try_from(n / 12).unwrap_or(i32::MAX);
                let step = i32::try_from(n % 12).unwrap_or_default();
                Event {
                    frequency: frequency(octave, step),
                    duration: self.duration(n, token)?,
                    volume: self.context.volume,
                }
            }
            Token::Step(offset, n) => {
                let n = self.context.length_or_default(n);
                Event {
                    frequency: frequency(self.context.octave, offset),
                    duration: self.duration(n, token)?,
                    volume: self.context.volume,
                }
            }
            Token::Unknown => {
                return Err(MmlError::DecodeError {
                    token: token.name.to_string(),
                    number: token.number,
                    dots: token.dots,
                    offset: token.offset,
                });
            }
        };

        trace!(
            token = token.name,
            frequency = event.frequency,
            duration = event.duration,
            volume = event.volume,
            "decoded event"
        );
        Ok(Some(event))
    }

    fn apply_directive(&mut self, directive: Directive, n: u32) {
        match directive {
            Directive::Tempo => self.context.tempo = n,
            Directive::Length => self.context.length = n,
            Directive::Volume => self.context.volume = n,
            Directive::Octave => self.context.octave = i32::try_from(n).unwrap_or(i32::MAX),
        }
        debug!(?directive, value = n, "context updated");
    }

    fn duration(&self, n: u32, token: &ScannedToken<'_>) -> Result<f64, MmlError> {
        self.context
            .duration(n)
            .ok_or_else(|| MmlError::DivisionByZero {
                token: token.name.to_string(),
                offset: token.offset,
            })
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = Result<Event, MmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(token) = self.lexer.next_token() {
            match self.interpret(&token) {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        self.finished = true;
        None
    }
}

impl<'a> FusedIterator for Decoder<'a> {}

/// Decode an MML string lazily.
///
/// Every call starts from a fresh [`PerformanceContext`] (tempo 120, length 5,
/// volume 15, octave 4).
pub fn decode(text: &str) -> Decoder<'_> {
    Decoder::new(text)
}

/// Decode an MML string into a vector of events.
///
/// # Errors
/// Returns the first [`MmlError`] the decoder hits; events before it are
/// discarded.
pub fn decode_all(text: &str) -> Result<Vec<Event>, MmlError> {
    decode(text).collect()
}
