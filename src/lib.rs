pub mod config;
pub mod decoder;
pub mod error;
pub mod lexer;
pub mod pitch;
pub mod player;
pub mod songs;

pub use config::OrnamentConfig;
pub use decoder::{decode, decode_all, Decoder, Event, PerformanceContext};
pub use error::*;
pub use pitch::frequency;
pub use songs::{all_songs, get_song, list_songs, Song};
