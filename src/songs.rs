//! Embedded song library
//!
//! The MML sources live in `songs/*.mml` and are compiled into the binary.

use crate::error::MmlError;

/// Embedded song files
static SONGS: &[(&str, &str)] = &[
    ("jingle-bells", include_str!("../songs/jingle-bells.mml")),
    ("joy-to-the-world", include_str!("../songs/joy-to-the-world.mml")),
    ("deck-the-halls", include_str!("../songs/deck-the-halls.mml")),
    (
        "we-wish-you-a-merry-christmas",
        include_str!("../songs/we-wish-you-a-merry-christmas.mml"),
    ),
];

/// A song with its name and MML source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Song {
    pub name: &'static str,
    pub mml: &'static str,
}

/// Get all embedded songs
pub fn all_songs() -> Vec<Song> {
    SONGS.iter().map(|&(name, mml)| Song { name, mml }).collect()
}

/// Get a song by name
pub fn get_song(name: &str) -> Option<Song> {
    SONGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(name, mml)| Song { name, mml })
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}

/// Resolve a list of names; an empty list selects every song.
pub fn select_songs(names: &[String]) -> Result<Vec<Song>, MmlError> {
    if names.is_empty() {
        return Ok(all_songs());
    }
    names
        .iter()
        .map(|name| get_song(name).ok_or_else(|| MmlError::UnknownSong(name.clone())))
        .collect()
}
