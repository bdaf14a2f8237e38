//! # Pitch Model
//!
//! Equal-tempered frequencies referenced to concert A (A4 = 440 Hz).
//!
//! Octave 0 sits around the threshold of hearing: C0 is about 16.35 Hz and
//! A0 is 27.5 Hz. Inputs are not range checked; a very high or very low octave
//! just produces a very high or very low frequency.

/// Concert pitch of A4 in Hz.
pub const CONCERT_A: f64 = 440.0;

/// Semitone index of A4 counted from C0.
pub const A4_INDEX: i32 = 57;

/// Frequency in Hz of `step` semitones above C in the given octave.
///
/// ```
/// use carol::pitch::frequency;
///
/// assert_eq!(frequency(4, 9), 440.0);
/// assert_eq!(frequency(0, 9), 27.5);
/// ```
pub fn frequency(octave: i32, step: i32) -> f64 {
    // Float arithmetic so huge octaves cannot overflow the semitone index
    let semitones = f64::from(step) + f64::from(octave) * 12.0 - f64::from(A4_INDEX);
    CONCERT_A * 2f64.powf(semitones / 12.0)
}

/// Semitone offset relative to C for a step name such as `"c"`, `"f+"` or `"b-"`.
///
/// Sharps are written `+`, `#` or `♯`; flats are written `-` or `♭`.
/// `c-` (-1) and `b+` (12) spill into the neighbouring octave. Combinations
/// that are not in the table, like `e+` or `f-`, return `None`.
pub fn step_offset(name: &str) -> Option<i32> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    let modifier = chars.next();
    if chars.next().is_some() {
        return None;
    }

    let offset = match (letter, modifier.map(Accidental::from_char)) {
        ('c', None) => 0,
        ('d', None) => 2,
        ('e', None) => 4,
        ('f', None) => 5,
        ('g', None) => 7,
        ('a', None) => 9,
        ('b', None) => 11,

        ('c', Some(Some(Accidental::Flat))) => -1,
        ('c', Some(Some(Accidental::Sharp))) | ('d', Some(Some(Accidental::Flat))) => 1,
        ('d', Some(Some(Accidental::Sharp))) | ('e', Some(Some(Accidental::Flat))) => 3,
        ('f', Some(Some(Accidental::Sharp))) | ('g', Some(Some(Accidental::Flat))) => 6,
        ('g', Some(Some(Accidental::Sharp))) | ('a', Some(Some(Accidental::Flat))) => 8,
        ('a', Some(Some(Accidental::Sharp))) | ('b', Some(Some(Accidental::Flat))) => 10,
        ('b', Some(Some(Accidental::Sharp))) => 12,

        _ => return None,
    };
    Some(offset)
}

/// Sharp or flat written after a step letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' | '#' | '♯' => Some(Accidental::Sharp),
            '-' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// True for any character the scanner merges into the preceding token.
pub fn is_modifier(c: char) -> bool {
    Accidental::from_char(c).is_some()
}
