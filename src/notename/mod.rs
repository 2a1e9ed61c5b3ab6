use std::{error::Error, fmt, str::FromStr};

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteNameStyle {
    /// "C#", the spelling used for fretboard and chord tables
    Sharp,
    /// "Db"
    Flat,
    /// "C♯ / D♭"
    #[default]
    Both,
}

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

const BOTH_NAMES: [&str; 12] = [
    "C",
    "C♯ / D♭",
    "D",
    "D♯ / E♭",
    "E",
    "F",
    "F♯ / G♭",
    "G",
    "G♯ / A♭",
    "A",
    "A♯ / B♭",
    "B",
];

/// The name of the pitch class `pc`, taken modulo 12.
pub fn pitch_class_name(pc: u8, style: NoteNameStyle) -> &'static str {
    let i = (pc % 12) as usize;
    match style {
        NoteNameStyle::Sharp => SHARP_NAMES[i],
        NoteNameStyle::Flat => FLAT_NAMES[i],
        NoteNameStyle::Both => BOTH_NAMES[i],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteNameErr {
    Empty,
    OutOfRange(u32),
    Unrecognised(String),
}

impl fmt::Display for NoteNameErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteNameErr::Empty => write!(f, "empty note name"),
            NoteNameErr::OutOfRange(n) => {
                write!(f, "pitch class {n} is out of range (expected 0 to 11)")
            }
            NoteNameErr::Unrecognised(s) => write!(f, "not a note name: \"{s}\""),
        }
    }
}

impl Error for NoteNameErr {}

/// Parses either a number in `0..12` or a letter name with any number of accidentals.
///
/// Sharps may be written `#` or `♯`, flats `b` or `♭`. Spellings wrap around the octave, so
/// "Cb" is 11 and "B#" is 0. For names like "C♯ / D♭", only the part before the slash is read.
pub fn parse_pitch_class(input: &str) -> Result<u8, NoteNameErr> {
    let str = match input.split_once('/') {
        Some((first, _)) => first.trim(),
        None => input.trim(),
    };
    if str.is_empty() {
        return Err(NoteNameErr::Empty);
    }

    if str.chars().all(|c| c.is_ascii_digit()) {
        return match str.parse::<u32>() {
            Ok(n) if n < 12 => Ok(n as u8),
            Ok(n) => Err(NoteNameErr::OutOfRange(n)),
            Err(_) => Err(NoteNameErr::Unrecognised(input.into())),
        };
    }

    let mut chars = str.chars();
    let base: i32 = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return Err(NoteNameErr::Unrecognised(input.into())),
    };
    let mut offset = 0;
    for c in chars {
        match c {
            '#' | '♯' => offset += 1,
            'b' | '♭' => offset -= 1,
            _ => return Err(NoteNameErr::Unrecognised(input.into())),
        }
    }
    Ok((base + offset).rem_euclid(12) as u8)
}

/// A pitch class that reads and writes as a note name. Displays with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName(pub u8);

impl FromStr for NoteName {
    type Err = NoteNameErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pitch_class(s).map(NoteName)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(pitch_class_name(self.0, NoteNameStyle::Sharp))
    }
}
