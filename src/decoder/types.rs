//! Decoder type definitions
//!
//! This module defines the events produced by the decoder and the performance
//! context the decoder keeps between tokens.

use serde::Serialize;

/// A single tone or rest
///
/// # Fields
/// - `frequency`: Tone frequency in Hz, `0.0` for a rest
/// - `duration`: How long the tone (or silence) lasts, in seconds
/// - `volume`: 0-15 by convention, `0` for a rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Event {
    pub frequency: f64,
    pub duration: f64,
    pub volume: u32,
}

impl Event {
    pub fn is_rest(&self) -> bool {
        self.frequency == 0.0
    }
}

/// Mutable interpreter state
///
/// Each decoder owns its own context; directive tokens (`T`, `l`, `V`, `o`)
/// and octave shifts (`<`, `>`) change it in place.
///
/// # Fields
/// - `tempo`: Beats (quarter notes) per minute
/// - `length`: Length code used when a note or rest has no number
/// - `volume`: Volume given to every note
/// - `octave`: Octave used for step names
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceContext {
    pub tempo: u32,
    pub length: u32,
    pub volume: u32,
    pub octave: i32,
}

impl Default for PerformanceContext {
    fn default() -> Self {
        Self {
            tempo: 120,
            length: 5,
            volume: 15,
            octave: 4,
        }
    }
}

impl PerformanceContext {
    /// Length code for a note or rest, falling back to the default length.
    pub fn length_or_default(&self, n: u32) -> u32 {
        if n == 0 {
            self.length
        } else {
            n
        }
    }

    /// Duration in seconds of length code `n`: `240 / (n * tempo)`.
    ///
    /// Returns `None` when the divisor is zero.
    pub fn duration(&self, n: u32) -> Option<f64> {
        let divisor = f64::from(n) * f64::from(self.tempo);
        if divisor == 0.0 {
            None
        } else {
            Some(240.0 / divisor)
        }
    }
}
