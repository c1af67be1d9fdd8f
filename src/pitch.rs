//! # Pitch Classes
//!
//! The 12 notes of the chromatic scale, independent of octave.
//!
//! ## Spelling
//! Every pitch class has exactly one canonical name, spelled with sharps:
//! `C C# D D# E F F# G G# A A# B`. Parsing accepts a natural letter followed by at
//! most one accidental (`#`, `♯`, `b`, `♭`), so enharmonic spellings fold onto the
//! same pitch class:
//!
//! ```rust
//! use theory_quest::pitch_class_index;
//!
//! assert_eq!(pitch_class_index("Bb")?, pitch_class_index("A#")?);
//! assert_eq!(pitch_class_index("Cb")?, 11);
//! # Ok::<(), theory_quest::TheoryError>(())
//! ```
//!
//! ## Sets
//! [`PitchClassSet`] is the snapshot of "currently held" notes that the ear-training
//! and pad-drill callers compare against a chord. It is a 12-bit mask, so equality
//! is exact set equality and octave information is gone by construction.

use std::fmt;

use serde::Serialize;

use crate::error::TheoryError;

/// Canonical names indexed by pitch class
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class in `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any integer, wrapping modulo 12
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    /// Pitch class of a MIDI note number (C4 = 60 -> C)
    pub fn from_midi(note: u8) -> Self {
        PitchClass(note % 12)
    }

    /// Parse a note name, folding enharmonic spellings.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let unknown = || TheoryError::UnknownNote(name.to_string());
        let trimmed = name.trim();
        let mut chars = trimmed.chars();

        let base: i32 = match chars.next().ok_or_else(unknown)? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(unknown()),
        };
        let accidental: i32 = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return Err(unknown()),
        };
        if chars.next().is_some() {
            return Err(unknown());
        }

        Ok(PitchClass::new(base + accidental))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move by any number of semitones, wrapping at the octave
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// All twelve pitch classes from C upward
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PitchClass> for &'static str {
    fn from(pc: PitchClass) -> Self {
        pc.name()
    }
}

/// Index of a note name in `0..12`.
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] if the spelling isn't recognized.
pub fn pitch_class_index(name: &str) -> Result<u8, TheoryError> {
    PitchClass::from_name(name).map(PitchClass::index)
}

/// A set of pitch classes stored as a 12-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every name, failing on the first unknown spelling
    pub fn from_names<I, S>(names: I) -> Result<Self, TheoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| PitchClass::from_name(name.as_ref()))
            .collect()
    }

    /// Fold held MIDI note numbers down to their pitch classes
    pub fn from_midi_notes<I: IntoIterator<Item = u8>>(notes: I) -> Self {
        notes.into_iter().map(PitchClass::from_midi).collect()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.0;
    }

    pub fn remove(&mut self, pc: PitchClass) {
        self.0 &= !(1 << pc.0);
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.0) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &PitchClassSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in ascending pitch-class order
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<T: IntoIterator<Item = PitchClass>>(iter: T) -> Self {
        let mut set = PitchClassSet::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

impl Extend<PitchClass> for PitchClassSet {
    fn extend<T: IntoIterator<Item = PitchClass>>(&mut self, iter: T) {
        for pc in iter {
            self.insert(pc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for (i, name) in NOTE_NAMES.iter().enumerate() {
            assert_eq!(pitch_class_index(name).unwrap(), i as u8);
            assert_eq!(PitchClass::new(i as i32).name(), *name);
        }
    }

    #[test]
    fn test_enharmonic_flats() {
        assert_eq!(pitch_class_index("Bb").unwrap(), pitch_class_index("A#").unwrap());
        assert_eq!(pitch_class_index("Db").unwrap(), pitch_class_index("C#").unwrap());
        assert_eq!(pitch_class_index("Eb").unwrap(), pitch_class_index("D#").unwrap());
        assert_eq!(pitch_class_index("Gb").unwrap(), pitch_class_index("F#").unwrap());
        assert_eq!(pitch_class_index("Ab").unwrap(), pitch_class_index("G#").unwrap());
    }

    #[test]
    fn test_spellings_across_the_octave_break() {
        assert_eq!(pitch_class_index("Cb").unwrap(), 11);
        assert_eq!(pitch_class_index("B#").unwrap(), 0);
        assert_eq!(pitch_class_index("E#").unwrap(), 5);
        assert_eq!(pitch_class_index("Fb").unwrap(), 4);
    }

    #[test]
    fn test_unicode_accidentals_and_whitespace() {
        assert_eq!(pitch_class_index("B♭").unwrap(), 10);
        assert_eq!(pitch_class_index("F♯").unwrap(), 6);
        assert_eq!(pitch_class_index("  G ").unwrap(), 7);
    }

    #[test]
    fn test_unknown_notes() {
        for bad in ["H", "", "c", "C##", "Bbb", "A#m", "X#"] {
            assert_eq!(
                pitch_class_index(bad),
                Err(TheoryError::UnknownNote(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::new(9).transpose(3), PitchClass::new(0));
        assert_eq!(PitchClass::new(0).transpose(-1).name(), "B");
        assert_eq!(PitchClass::new(0).transpose(14).name(), "D");
    }

    #[test]
    fn test_from_midi() {
        assert_eq!(PitchClass::from_midi(60), PitchClass::new(0));
        assert_eq!(PitchClass::from_midi(69), PitchClass::new(9));
        assert_eq!(PitchClass::from_midi(61).name(), "C#");
    }

    #[test]
    fn test_set_ignores_octave_and_duplicates() {
        let set = PitchClassSet::from_midi_notes([48, 60, 72, 64]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(PitchClass::new(0)));
        assert!(set.contains(PitchClass::new(4)));
    }

    #[test]
    fn test_set_subset_and_remove() {
        let mut big = PitchClassSet::from_names(["C", "E", "G"]).unwrap();
        let small = PitchClassSet::from_names(["C", "G"]).unwrap();
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));

        big.remove(PitchClass::new(4));
        assert_eq!(big, small);
        assert_eq!(big.iter().map(PitchClass::name).collect::<Vec<_>>(), vec!["C", "G"]);
    }

    #[test]
    fn test_set_from_names_rejects_unknown() {
        let result = PitchClassSet::from_names(["C", "H"]);
        assert_eq!(result, Err(TheoryError::UnknownNote("H".to_string())));
    }
}
