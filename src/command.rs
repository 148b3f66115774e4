//! Remote command language
//!
//! ```text
//! command   := keyword | solid-cmd
//! keyword   := "default" | palette-name | "sparkle" | "off" | "black"
//! solid-cmd := "solid" KSEP int [VSEP int VSEP int]
//! KSEP      := "-" | VSEP
//! VSEP      := "," | whitespace
//! int       := ["-"] digit+
//! ```
//!
//! Matching is case-insensitive and every token is trimmed. `solid <h>` is
//! shorthand for `solid <h>,255,255`. A dash is a separator only right after
//! the keyword (`solid-120`) or standing alone (`solid - 1 2 3`); in front of
//! digits it is a sign.
//!
//! Numbers outside `0..=255`, negative ones included, read as 0. Tokens that
//! are not numbers reject the whole command: `solid 10,abc,3` is an error,
//! not `(10,0,3)`.

use core::str::FromStr;

use crate::color::Hsv;
use crate::effect::PalettePreset;

const COMMAND_NAME_DEFAULT: &str = "default";
const COMMAND_NAME_SPARKLE: &str = "sparkle";
const COMMAND_NAME_OFF: &str = "off";
const COMMAND_NAME_BLACK: &str = "black";
const COMMAND_NAME_SOLID: &str = "solid";

/// Saturation and value used by the single-value `solid` form
const SOLID_SHORTHAND_LEVEL: u8 = 255;

/// Parsed state mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spectrum effect with the default gradient
    Default,
    /// Two-tone effect with a named palette
    Palette(PalettePreset),
    /// Dark strip
    Off,
    /// Flip the sparkle overlay on or off
    ToggleSparkle,
    /// One color on every pixel
    Solid(Hsv),
}

/// Reason a command text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace
    Empty,
    /// Keyword is not part of the language
    UnknownKeyword,
    /// A value token is not an unsigned integer
    InvalidNumber,
    /// Wrong number of values for the keyword
    WrongArity,
}

impl ParseError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty command",
            Self::UnknownKeyword => "unknown keyword",
            Self::InvalidNumber => "invalid number",
            Self::WrongArity => "wrong number of values",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    /// Parse one command line
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let (key, args) = split_keyword(input);
        if key.eq_ignore_ascii_case(COMMAND_NAME_SOLID) {
            return parse_solid(args).map(Self::Solid);
        }

        let command = if key.eq_ignore_ascii_case(COMMAND_NAME_DEFAULT) {
            Self::Default
        } else if key.eq_ignore_ascii_case(COMMAND_NAME_SPARKLE) {
            Self::ToggleSparkle
        } else if key.eq_ignore_ascii_case(COMMAND_NAME_OFF)
            || key.eq_ignore_ascii_case(COMMAND_NAME_BLACK)
        {
            Self::Off
        } else if let Some(preset) = PalettePreset::parse_from_str(key) {
            Self::Palette(preset)
        } else {
            return Err(ParseError::UnknownKeyword);
        };

        if value_tokens(args).next().is_none() {
            Ok(command)
        } else {
            Err(ParseError::WrongArity)
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

const fn is_keyword_separator(c: char) -> bool {
    c == '-' || is_value_separator(c)
}

const fn is_value_separator(c: char) -> bool {
    c == ',' || c.is_ascii_whitespace()
}

/// Split `input` at the first separator into a keyword and its arguments
///
/// A dash glued to the keyword is consumed here; any other dash is left for
/// the value tokens.
fn split_keyword(input: &str) -> (&str, &str) {
    match input.find(is_keyword_separator) {
        Some(at) => {
            let (key, rest) = input.split_at(at);
            let rest = rest.strip_prefix('-').unwrap_or(rest);
            (key.trim(), rest.trim())
        }
        None => (input, ""),
    }
}

/// Value tokens of `args`, skipping lone dashes
fn value_tokens(args: &str) -> impl Iterator<Item = &str> {
    args.split(is_value_separator)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != "-")
}

fn parse_solid(args: &str) -> Result<Hsv, ParseError> {
    let mut values = [0u8; 3];
    let mut count = 0;

    for token in value_tokens(args) {
        let slot = values.get_mut(count).ok_or(ParseError::WrongArity)?;
        *slot = parse_channel(token)?;
        count += 1;
    }

    match count {
        1 => Ok(Hsv::new(
            values[0],
            SOLID_SHORTHAND_LEVEL,
            SOLID_SHORTHAND_LEVEL,
        )),
        3 => Ok(Hsv::new(values[0], values[1], values[2])),
        _ => Err(ParseError::WrongArity),
    }
}

/// Parse a channel value; anything outside `0..=255` reads as 0
fn parse_channel(token: &str) -> Result<u8, ParseError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber);
    }
    if negative {
        return Ok(0);
    }
    Ok(digits.parse::<u8>().unwrap_or(0))
}
