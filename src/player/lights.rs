//! Light-ring pattern
//!
//! Every pixel keeps its own counter into a repeating colorway. After each
//! event the pixel shows `colorway[counter mod len]` and the counter takes a
//! random step of +1 or -1, so neighbouring pixels drift in and out of phase.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hardware::PixelRing;
use crate::error::MmlError;

/// RGB color, deserialized from a `[r, g, b]` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

pub const RED: Color = Color(255, 7, 7);
pub const GREEN: Color = Color(7, 255, 7);
pub const OFF: Color = Color(0, 0, 0);

/// Red-red-off-green-green
pub fn default_colorway() -> Vec<Color> {
    vec![RED, RED, OFF, GREEN, GREEN]
}

/// Random-walk color pattern for a ring of pixels
#[derive(Debug, Clone)]
pub struct LightPattern {
    colorway: Vec<Color>,
    counters: Vec<i64>,
}

impl LightPattern {
    pub fn new(colorway: Vec<Color>, pixel_count: usize) -> Result<Self, MmlError> {
        if colorway.is_empty() {
            return Err(MmlError::ConfigError("colorway must not be empty".to_string()));
        }
        Ok(Self {
            colorway,
            counters: vec![0; pixel_count],
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.counters.len()
    }

    pub fn counters(&self) -> &[i64] {
        &self.counters
    }

    /// Color the given counter value selects
    pub fn color_at(&self, counter: i64) -> Color {
        let len = self.colorway.len() as i64;
        self.colorway[counter.rem_euclid(len) as usize]
    }

    /// Paint the ring from the current counters, then move every counter one step.
    pub fn advance<P, R>(&mut self, ring: &mut P, rng: &mut R)
    where
        P: PixelRing + ?Sized,
        R: Rng + ?Sized,
    {
        let visible = ring.len();
        for index in 0..self.counters.len() {
            if index < visible {
                ring.set_pixel(index, self.color_at(self.counters[index]));
            }
            self.counters[index] += if rng.gen::<bool>() { 1 } else { -1 };
        }
    }
}
