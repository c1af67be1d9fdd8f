//! # Chord Catalog and Construction
//!
//! Chord types are plain data: a name, the semitone offsets from the root, and an
//! optional "vibe" tag the lesson cards show next to the chord. The catalog is a
//! constant table; there is no behavior that differs between chord types beyond
//! their offsets.
//!
//! ## Construction
//! A [`Chord`] is a chord type applied to a root. Each offset maps to
//! `(root + offset) mod 12`, in the order the catalog declares it. The result is a
//! sequence, not a set: offsets that collide mod 12 would produce duplicates, and
//! Minor 9's ninth (offset 14) folds down onto the second.
//!
//! ```rust
//! use theory_quest::build_chord;
//!
//! let chord = build_chord("F", "Minor 7")?;
//! assert_eq!(chord.names(), vec!["F", "G#", "C", "D#"]);
//! # Ok::<(), theory_quest::TheoryError>(())
//! ```
//!
//! ## Matching
//! [`matches_chord`] compares a held-note snapshot against a chord as sets. Missing
//! notes and extra notes both fail, so a player can't pass a drill by holding part of
//! the chord or by mashing every pad.

use serde::Serialize;

use crate::error::TheoryError;
use crate::pitch::{PitchClass, PitchClassSet};

/// A named chord template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordType {
    pub name: &'static str,
    pub intervals: &'static [u8],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<&'static str>,
}

impl ChordType {
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

pub const MAJOR: ChordType = ChordType {
    name: "Major",
    intervals: &[0, 4, 7],
    vibe: Some("bright, resolved"),
};
pub const MINOR: ChordType = ChordType {
    name: "Minor",
    intervals: &[0, 3, 7],
    vibe: Some("dark, resolved"),
};
pub const MINOR_7: ChordType = ChordType {
    name: "Minor 7",
    intervals: &[0, 3, 7, 10],
    vibe: Some("moody intro pad"),
};
pub const MINOR_9: ChordType = ChordType {
    name: "Minor 9",
    intervals: &[0, 3, 7, 10, 14],
    vibe: Some("lush, melodic dubstep"),
};
pub const MAJOR_7: ChordType = ChordType {
    name: "Major 7",
    intervals: &[0, 4, 7, 11],
    vibe: Some("dreamy"),
};
pub const SUS2: ChordType = ChordType {
    name: "Sus2",
    intervals: &[0, 2, 7],
    vibe: Some("open, floating"),
};
pub const SUS4: ChordType = ChordType {
    name: "Sus4",
    intervals: &[0, 5, 7],
    vibe: Some("pre-drop tension"),
};
pub const DOMINANT_7: ChordType = ChordType {
    name: "Dominant 7",
    intervals: &[0, 4, 7, 10],
    vibe: Some("bluesy pull"),
};
pub const HALF_DIMINISHED: ChordType = ChordType {
    name: "Half-diminished",
    intervals: &[0, 3, 6, 10],
    vibe: Some("uneasy, cinematic"),
};
pub const DIMINISHED: ChordType = ChordType {
    name: "Diminished",
    intervals: &[0, 3, 6],
    vibe: Some("horror-movie tension"),
};
pub const AUGMENTED: ChordType = ChordType {
    name: "Augmented",
    intervals: &[0, 4, 8],
    vibe: Some("unresolved, rising"),
};

/// Every chord type the engine knows, in menu order
pub const CHORD_TYPES: &[ChordType] = &[
    MINOR,
    MINOR_7,
    MINOR_9,
    MAJOR,
    MAJOR_7,
    SUS2,
    SUS4,
    DOMINANT_7,
    HALF_DIMINISHED,
    DIMINISHED,
    AUGMENTED,
];

/// The public catalog
pub fn chord_types() -> &'static [ChordType] {
    CHORD_TYPES
}

/// Look up a chord type by name (case-insensitive, surrounding whitespace ignored).
///
/// # Errors
/// Returns [`TheoryError::UnknownChordType`] if no catalog entry has that name.
pub fn chord_type(name: &str) -> Result<&'static ChordType, TheoryError> {
    let wanted = name.trim();
    let found = CHORD_TYPES
        .iter()
        .find(|ct| ct.name.eq_ignore_ascii_case(wanted));
    match found {
        Some(ct) => Ok(ct),
        None => {
            log::debug!("chord type lookup failed for {:?}", name);
            Err(TheoryError::UnknownChordType(name.to_string()))
        }
    }
}

/// A chord type applied to a root
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub root: PitchClass,
    pub chord_type: &'static ChordType,
    pub notes: Vec<PitchClass>,
}

impl Chord {
    pub fn new(root: PitchClass, chord_type: &'static ChordType) -> Self {
        let notes = chord_type
            .intervals
            .iter()
            .map(|&offset| root.transpose(offset as i32))
            .collect();
        Self {
            root,
            chord_type,
            notes,
        }
    }

    /// Canonical note names in chord order
    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|pc| pc.name()).collect()
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        self.notes.iter().copied().collect()
    }

    /// Exact set comparison against held notes
    pub fn matches(&self, observed: &PitchClassSet) -> bool {
        *observed == self.pitch_classes()
    }

    /// Ascending voicing with the root at `base_midi + root`, keeping extensions above the octave.
    ///
    /// Offsets that would land above MIDI 127 are dropped.
    pub fn midi_notes(&self, base_midi: u8) -> Vec<u8> {
        let root = base_midi as u16 + self.root.index() as u16;
        self.chord_type
            .intervals
            .iter()
            .map(|&offset| root + offset as u16)
            .filter(|&note| note <= 127)
            .map(|note| note as u8)
            .collect()
    }

    /// Display label like "F Minor 7"
    pub fn label(&self) -> String {
        format!("{} {}", self.root, self.chord_type.name)
    }
}

/// Build a chord from a root name and a chord type name.
///
/// The root is validated before the chord type.
///
/// # Errors
/// - [`TheoryError::UnknownNote`] for an unrecognized root
/// - [`TheoryError::UnknownChordType`] for a chord type outside the catalog
pub fn build_chord(root_name: &str, chord_type_name: &str) -> Result<Chord, TheoryError> {
    let root = PitchClass::from_name(root_name)?;
    let chord_type = chord_type(chord_type_name)?;
    Ok(Chord::new(root, chord_type))
}

/// True only if `observed` holds exactly the chord's pitch classes.
///
/// ```rust
/// use theory_quest::{matches_chord, PitchClassSet};
///
/// let held = PitchClassSet::from_names(["F", "Ab", "C", "Eb"])?;
/// assert!(matches_chord(&held, "F", "Minor 7")?);
///
/// let partial = PitchClassSet::from_names(["F", "Ab", "C"])?;
/// assert!(!matches_chord(&partial, "F", "Minor 7")?);
/// # Ok::<(), theory_quest::TheoryError>(())
/// ```
pub fn matches_chord(
    observed: &PitchClassSet,
    root_name: &str,
    chord_type_name: &str,
) -> Result<bool, TheoryError> {
    Ok(build_chord(root_name, chord_type_name)?.matches(observed))
}
