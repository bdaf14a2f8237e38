//! # MML Lexer
//!
//! Splits an MML string into logical tokens and classifies each one.
//!
//! A logical token is a name (one character, or two when the second is a
//! sharp/flat modifier), an optional decimal number, optional dots and an
//! optional `&` tie marker:
//!
//! ```text
//! f+16.&
//! ^^ ^^^^
//! |  | ||
//! |  | |+-- tie (consumed, no effect)
//! |  | +--- dot (n += n / 2, once)
//! |  +----- number
//! +-------- name with modifier
//! ```
//!
//! The lexer never fails; names it cannot classify come back as
//! [`Token::Unknown`] and the decoder turns them into errors.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::pitch::{is_modifier, step_offset};

/// Context field changed by a directive letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    Tempo,   // T
    Length,  // l
    Volume,  // V
    Octave,  // o
}

impl Directive {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(Directive::Tempo),
            'l' => Some(Directive::Length),
            'V' => Some(Directive::Volume),
            'o' => Some(Directive::Octave),
            _ => None,
        }
    }
}

/// Classified token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Separator,
    /// Directive with the raw scanned number (dots ignored)
    Directive(Directive, u32),
    OctaveDown,
    OctaveUp,
    /// Rest with its length code (0 = default length)
    Rest(u32),
    /// Explicit note number, also used as its own length code
    NoteNumber(u32),
    /// Step offset from C and its length code (0 = default length)
    Step(i32, u32),
    Unknown,
}

/// One logical token as it appears in the source
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedToken<'a> {
    pub name: &'a str,
    /// Digits as written
    pub raw_number: u32,
    /// Number after the dot adjustment
    pub number: u32,
    pub dots: usize,
    pub tied: bool,
    /// Character offset of the token's first character
    pub offset: usize,
}

impl<'a> ScannedToken<'a> {
    pub fn classify(&self) -> Token {
        let mut chars = self.name.chars();
        let (Some(first), second) = (chars.next(), chars.next()) else {
            return Token::Unknown;
        };

        if second.is_none() {
            if first.is_whitespace() || first == ',' || first == ';' {
                return Token::Separator;
            }
            if let Some(directive) = Directive::from_char(first) {
                return Token::Directive(directive, self.raw_number);
            }
            match first {
                '<' => return Token::OctaveDown,
                '>' => return Token::OctaveUp,
                'p' | 'r' => return Token::Rest(self.number),
                'n' => return Token::NoteNumber(self.number),
                _ => {}
            }
        }

        match step_offset(self.name) {
            Some(offset) => Token::Step(offset, self.number),
            None => Token::Unknown,
        }
    }
}

/// Lexer for scanning MML source
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            position: 0,
        }
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next()?;
        self.position += 1;
        Some(next)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Byte index just past the last consumed character
    fn byte_position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    /// Scan the next logical token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Option<ScannedToken<'a>> {
        let offset = self.position;
        let (start, _) = self.advance()?;

        // The modifier must be merged before digits and dots are scanned
        if self.peek().is_some_and(is_modifier) {
            self.advance();
        }
        let end = self.byte_position();

        let mut number: u32 = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.advance();
            number = number.saturating_mul(10).saturating_add(digit);
        }
        let raw_number = number;

        let mut dots = 0;
        while self.peek() == Some('.') {
            self.advance();
            dots += 1;
        }
        if dots > 0 {
            // Only one dot's worth; ".." would be +3/4 but is not supported
            number = number.saturating_add(number / 2);
        }

        let tied = self.peek() == Some('&');
        if tied {
            self.advance();
        }

        Some(ScannedToken {
            name: &self.input[start..end],
            raw_number,
            number,
            dots,
            tied,
            offset,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = ScannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
