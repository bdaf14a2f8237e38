//! # Ornament Configuration
//!
//! YAML settings for the player. Every key is optional:
//!
//! ```yaml
//! brightness: 0.2
//! pixel-count: 10
//! colorway:
//!   - [255, 7, 7]
//!   - [255, 7, 7]
//!   - [0, 0, 0]
//!   - [7, 255, 7]
//!   - [7, 255, 7]
//! songs: [jingle-bells, deck-the-halls]   # empty = every song
//! rounds: 3                               # omit to loop forever
//! seed: 42                                # omit for a random seed
//! ```

use serde::Deserialize;

use crate::error::MmlError;
use crate::player::{default_colorway, Color, LightPattern};
use crate::songs::{select_songs, Song};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OrnamentConfig {
    pub brightness: f32,
    pub pixel_count: usize,
    pub colorway: Vec<Color>,
    pub songs: Vec<String>,
    pub rounds: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for OrnamentConfig {
    fn default() -> Self {
        Self {
            brightness: 0.2,
            pixel_count: 10,
            colorway: default_colorway(),
            songs: Vec::new(),
            rounds: None,
            seed: None,
        }
    }
}

impl OrnamentConfig {
    /// Parse and validate YAML configuration.
    pub fn from_yaml(content: &str) -> Result<Self, MmlError> {
        // An empty document is a null value, which serde_yaml will not turn into a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: OrnamentConfig = serde_yaml::from_str(content)
            .map_err(|e| MmlError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MmlError> {
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(MmlError::ConfigError(format!(
                "brightness must be between 0 and 1, got {}",
                self.brightness
            )));
        }
        if self.pixel_count == 0 {
            return Err(MmlError::ConfigError(
                "pixel-count must be at least 1".to_string(),
            ));
        }
        if self.colorway.is_empty() {
            return Err(MmlError::ConfigError(
                "colorway must not be empty".to_string(),
            ));
        }
        self.selected_songs()
            .map_err(|e| MmlError::ConfigError(e.to_string()))?;
        Ok(())
    }

    pub fn light_pattern(&self) -> Result<LightPattern, MmlError> {
        LightPattern::new(self.colorway.clone(), self.pixel_count)
    }

    pub fn selected_songs(&self) -> Result<Vec<Song>, MmlError> {
        select_songs(&self.songs)
    }
}
