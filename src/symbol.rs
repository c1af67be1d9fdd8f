//! Chord symbol parsing
//!
//! Parses course-style chord symbols ("Cmin", "D#maj7", "Bbm7b5") into a root and a
//! catalog chord type.
//!
//! # Grammar
//! ```text
//! symbol     := root flavor
//! root       := letter accidental?
//! letter     := "A" | "B" | "C" | "D" | "E" | "F" | "G"
//! accidental := "#" | "b" | "♯" | "♭"
//! flavor     := "" | alias
//! ```
//!
//! # Supported Flavors
//! - **Major**: ``, `maj`, `M`
//! - **Minor**: `m`, `min`, `-`
//! - **Minor 7**: `m7`, `min7`, `-7`
//! - **Minor 9**: `m9`, `min9`, `-9`
//! - **Major 7**: `maj7`, `M7`
//! - **Dominant 7**: `7`
//! - **Sus2** / **Sus4**: `sus2`, `sus4`, and `sus` for Sus4
//! - **Diminished**: `dim`, `°`
//! - **Augmented**: `aug`, `+`
//! - **Half-diminished**: `m7b5`, `ø`
//!
//! Anything else is a [`TheoryError::MalformedChordSymbol`]. An unknown flavor is
//! never read as a major chord.

use crate::chord::{self, Chord, ChordType};
use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// A parsed chord symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordSymbol {
    pub root: PitchClass,
    pub chord_type: &'static ChordType,
}

impl ChordSymbol {
    pub fn to_chord(&self) -> Chord {
        Chord::new(self.root, self.chord_type)
    }
}

fn flavor_to_chord_type(flavor: &str) -> Option<&'static ChordType> {
    let ct = match flavor {
        "" | "maj" | "M" => &chord::MAJOR,
        "m" | "min" | "-" => &chord::MINOR,
        "m7" | "min7" | "-7" => &chord::MINOR_7,
        "m9" | "min9" | "-9" => &chord::MINOR_9,
        "maj7" | "M7" => &chord::MAJOR_7,
        "7" => &chord::DOMINANT_7,
        "sus2" => &chord::SUS2,
        "sus4" | "sus" => &chord::SUS4,
        "dim" | "°" => &chord::DIMINISHED,
        "aug" | "+" => &chord::AUGMENTED,
        "m7b5" | "ø" => &chord::HALF_DIMINISHED,
        _ => return None,
    };
    Some(ct)
}

/// Split a chord symbol into root and chord type.
///
/// # Examples
/// ```
/// use theory_quest::parse_chord_symbol;
///
/// let sym = parse_chord_symbol("D#maj7")?;
/// assert_eq!(sym.root.name(), "D#");
/// assert_eq!(sym.chord_type.name, "Major 7");
///
/// assert!(parse_chord_symbol("Cwobble").is_err());
/// # Ok::<(), theory_quest::TheoryError>(())
/// ```
pub fn parse_chord_symbol(symbol: &str) -> Result<ChordSymbol, TheoryError> {
    let malformed = |message: String| TheoryError::MalformedChordSymbol {
        symbol: symbol.to_string(),
        message,
    };
    let trimmed = symbol.trim();

    let mut chars = trimmed.char_indices();
    let letter = match chars.next() {
        Some((_, c)) if ('A'..='G').contains(&c) => c,
        Some((_, c)) => return Err(malformed(format!("'{}' is not a note letter", c))),
        None => return Err(malformed("empty chord symbol".to_string())),
    };

    // The root takes an accidental only when one directly follows the letter
    let root_len = match chars.next() {
        Some((i, c)) if matches!(c, '#' | 'b' | '♯' | '♭') => i + c.len_utf8(),
        _ => letter.len_utf8(),
    };
    let (root_token, flavor) = trimmed.split_at(root_len);

    let root = PitchClass::from_name(root_token)
        .map_err(|_| malformed(format!("unknown root '{}'", root_token)))?;
    let chord_type = flavor_to_chord_type(flavor)
        .ok_or_else(|| malformed(format!("unknown chord flavor '{}'", flavor)))?;

    Ok(ChordSymbol { root, chord_type })
}
