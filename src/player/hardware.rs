//! Hardware seams for the player
//!
//! The player only talks to the outside world through these traits; the
//! console implementations below drive a terminal simulation.

use std::thread;
use std::time::Duration;

use tracing::debug;

use super::lights::Color;

/// Single-channel tone generator
pub trait ToneOutput {
    fn start_tone(&mut self, frequency: f64);
    fn stop_tone(&mut self);
}

/// Ring of addressable RGB pixels
pub trait PixelRing {
    fn len(&self) -> usize;
    fn set_pixel(&mut self, index: usize, color: Color);
    fn set_brightness(&mut self, brightness: f32);
}

/// Physical on/off switch
pub trait Switch {
    fn is_on(&self) -> bool;
}

/// Blocking sleep between events
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// The set of peripherals a player drives
pub struct Hardware<T, P, S, C> {
    pub tone: T,
    pub ring: P,
    pub switch: S,
    pub clock: C,
}

/// Tone generator that logs instead of making sound
#[derive(Debug, Default)]
pub struct ConsoleTone {
    playing: Option<f64>,
}

impl ToneOutput for ConsoleTone {
    fn start_tone(&mut self, frequency: f64) {
        debug!("tone on at {:.2} Hz", frequency);
        self.playing = Some(frequency);
    }

    fn stop_tone(&mut self) {
        if self.playing.take().is_some() {
            debug!("tone off");
        }
    }
}

/// Pixel ring kept in memory, optionally echoed to stderr as a row of dots
#[derive(Debug)]
pub struct ConsoleRing {
    pixels: Vec<Color>,
    brightness: f32,
    echo: bool,
}

impl ConsoleRing {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color(0, 0, 0); len],
            brightness: 1.0,
            echo: false,
        }
    }

    /// Redraw the ring on stderr every time its last pixel is written
    pub fn with_echo(len: usize) -> Self {
        Self {
            echo: true,
            ..Self::new(len)
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// ANSI true-color rendering of the ring, scaled by brightness
    pub fn render(&self) -> String {
        let scale = |v: u8| (f32::from(v) * self.brightness).round() as u8;
        let mut line = String::new();
        for &Color(r, g, b) in &self.pixels {
            line.push_str(&format!("\x1b[38;2;{};{};{}m●\x1b[0m", scale(r), scale(g), scale(b)));
        }
        line
    }
}

impl PixelRing for ConsoleRing {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        if self.echo && index + 1 == self.pixels.len() {
            eprint!("\r{}", self.render());
        }
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }
}

/// Switch stuck in one position
#[derive(Debug, Clone, Copy)]
pub struct FixedSwitch(pub bool);

impl Switch for FixedSwitch {
    fn is_on(&self) -> bool {
        self.0
    }
}

/// Real-time clock, optionally sped up
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    pub speed: f64,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if self.speed > 0.0 {
            thread::sleep(duration.div_f64(self.speed));
        }
    }
}

/// Clock that returns immediately and adds up the time it was asked to wait
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualClock {
    pub elapsed: Duration,
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}
