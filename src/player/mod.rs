//! # Player Module
//!
//! Play decoded MML on a tone generator while animating a light ring.
//!
//! ## Purpose
//! The player is the ornament's main loop. For every event it:
//! 1. Stops the current tone
//! 2. Starts a new tone if the switch is on and the event has volume
//!    (rests have volume 0, so they stay silent)
//! 3. Advances the light pattern one frame
//! 4. Sleeps for the event's duration
//!
//! Between songs it picks the next one at random.
//!
//! ## Sub-modules
//! - `hardware` - ToneOutput, PixelRing, Switch and Clock traits plus console implementations
//! - `lights` - Color and the random-walk LightPattern
//!
//! ## Example
//! ```rust
//! use carol::player::{Hardware, LightPattern, Player, VirtualClock, FixedSwitch, ConsoleRing, ConsoleTone};
//! use carol::player::default_colorway;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let hardware = Hardware {
//!     tone: ConsoleTone::default(),
//!     ring: ConsoleRing::new(10),
//!     switch: FixedSwitch(false),
//!     clock: VirtualClock::default(),
//! };
//! let pattern = LightPattern::new(default_colorway(), 10).unwrap();
//! let mut player = Player::new(hardware, pattern, StdRng::seed_from_u64(1));
//!
//! let played = player.play_song("T120 c4 r4").unwrap();
//! assert_eq!(played, 2);
//! assert_eq!(player.hardware().clock.elapsed.as_secs_f64(), 1.0);
//! ```

mod hardware;
mod lights;


use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::OrnamentConfig;
use crate::decoder::decode;
use crate::error::MmlError;
use crate::songs::Song;

pub use hardware::{
    Clock, ConsoleRing, ConsoleTone, FixedSwitch, Hardware, PixelRing, Switch, SystemClock,
    ToneOutput, VirtualClock,
};
pub use lights::{default_colorway, Color, LightPattern, GREEN, OFF, RED};

/// Playback driver
pub struct Player<T, P, S, C, R> {
    hardware: Hardware<T, P, S, C>,
    pattern: LightPattern,
    rng: R,
}

impl<T, P, S, C, R> Player<T, P, S, C, R>
where
    T: ToneOutput,
    P: PixelRing,
    S: Switch,
    C: Clock,
    R: Rng,
{
    pub fn new(hardware: Hardware<T, P, S, C>, pattern: LightPattern, rng: R) -> Self {
        Self {
            hardware,
            pattern,
            rng,
        }
    }

    pub fn hardware(&self) -> &Hardware<T, P, S, C> {
        &self.hardware
    }

    pub fn pattern(&self) -> &LightPattern {
        &self.pattern
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.hardware.ring.set_brightness(brightness);
    }

    /// Play one MML string to the end.
    ///
    /// Returns the number of events played.
    ///
    /// # Errors
    /// A decode error silences the tone and ends the song. Events before the
    /// bad token have already been played.
    pub fn play_song(&mut self, mml: &str) -> Result<usize, MmlError> {
        let mut played = 0;
        for event in decode(mml) {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    self.hardware.tone.stop_tone();
                    warn!(error = %e, played, "song aborted");
                    return Err(e);
                }
            };

            self.hardware.tone.stop_tone();
            if self.hardware.switch.is_on() && event.volume != 0 {
                self.hardware.tone.start_tone(event.frequency);
            }

            // TODO: subtract the time spent updating the ring from the sleep
            self.pattern.advance(&mut self.hardware.ring, &mut self.rng);
            self.hardware.clock.sleep(Duration::from_secs_f64(event.duration));
            played += 1;
        }
        Ok(played)
    }

    /// Pick a song uniformly at random.
    pub fn choose_song<'s>(&mut self, songs: &'s [Song]) -> Option<&'s Song> {
        songs.choose(&mut self.rng)
    }

    /// Play randomly chosen songs, `rounds` times or forever.
    pub fn run(&mut self, songs: &[Song], rounds: Option<usize>) -> Result<(), MmlError> {
        let mut round = 0;
        while rounds.map_or(true, |limit| round < limit) {
            let Some(song) = self.choose_song(songs) else {
                debug!("no songs to play");
                break;
            };
            info!(song = song.name, round, "playing");
            self.play_song(song.mml)?;
            round += 1;
        }
        self.hardware.tone.stop_tone();
        Ok(())
    }
}

impl<T, P, S, C> Player<T, P, S, C, StdRng>
where
    T: ToneOutput,
    P: PixelRing,
    S: Switch,
    C: Clock,
{
    /// Build a player from configuration, seeding the random source from
    /// `seed` or from the operating system.
    pub fn from_config(
        hardware: Hardware<T, P, S, C>,
        config: &OrnamentConfig,
    ) -> Result<Self, MmlError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut player = Player::new(hardware, config.light_pattern()?, rng);
        player.set_brightness(config.brightness);
        Ok(player)
    }
}
