//! # Equal-Tempered Tuning
//!
//! Frequencies come from MIDI note numbers anchored at A4 (MIDI 69):
//!
//! ```text
//! freq = reference_hz * 2^((midi - 69) / 12)
//! ```
//!
//! Note names carry no octave, so [`frequency_of`] places every pitch class in the
//! octave starting at a fixed base MIDI number. The default base is
//! [`DEFAULT_BASE_MIDI`] (A3 = 57), which puts C at MIDI 57 and B at MIDI 68:
//! chords built in the chord builder all sound in one octave, between 220 Hz and
//! 415 Hz.
//!
//! ```rust
//! use theory_quest::{frequency_of, DEFAULT_BASE_MIDI};
//!
//! let a = frequency_of("A", 60)?; // A in the octave from C4
//! assert!((a - 440.0).abs() < 1e-9);
//! let c = frequency_of("C", DEFAULT_BASE_MIDI)?;
//! assert!((c - 220.0).abs() < 1e-9);
//! # Ok::<(), theory_quest::TheoryError>(())
//! ```

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Concert pitch for A4
pub const A4_HZ: f64 = 440.0;

/// MIDI number of A4
pub const A4_MIDI: i32 = 69;

/// Base MIDI number for the engine's default octave (A3)
pub const DEFAULT_BASE_MIDI: u8 = 57;

/// Highest base that still fits B inside the MIDI range
pub const MAX_BASE_MIDI: u8 = 127 - 11;

/// Frequency of a MIDI note number, for any reference pitch
pub fn midi_to_frequency(midi: i32, reference_hz: f64) -> f64 {
    reference_hz * 2.0_f64.powf((midi - A4_MIDI) as f64 / 12.0)
}

/// MIDI number of a pitch class in the octave starting at `base_midi`
pub fn midi_number(pc: PitchClass, base_midi: u8) -> i32 {
    base_midi as i32 + pc.index() as i32
}

/// Frequency in Hz of a note name placed in the octave starting at `base_midi`.
///
/// `base_midi` is not range-checked. Bases above [`MAX_BASE_MIDI`] put the upper
/// notes past MIDI 127 and give frequencies above the MIDI range; callers taking a
/// base from user input should check it against [`MAX_BASE_MIDI`] first, as
/// [`EngineConfig`](crate::EngineConfig) does.
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] if the note name isn't recognized.
pub fn frequency_of(note_name: &str, base_midi: u8) -> Result<f64, TheoryError> {
    let pc = PitchClass::from_name(note_name)?;
    Ok(midi_to_frequency(midi_number(pc, base_midi), A4_HZ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_a4_is_exactly_440() {
        assert_eq!(midi_to_frequency(69, A4_HZ), 440.0);
    }

    #[test]
    fn test_a3_from_base_48() {
        // C3 = 48, so A lands on 57
        assert_relative_eq!(frequency_of("A", 48).unwrap(), 220.0, max_relative = 1e-6);
    }

    #[test]
    fn test_default_base_starts_on_a3() {
        assert_relative_eq!(frequency_of("C", DEFAULT_BASE_MIDI).unwrap(), 220.0, max_relative = 1e-6);
        assert_relative_eq!(
            frequency_of("A", DEFAULT_BASE_MIDI).unwrap(),
            369.994_422_711_634_4,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_middle_c() {
        assert_abs_diff_eq!(midi_to_frequency(60, A4_HZ), 261.625_565, epsilon = 1e-5);
    }

    #[test]
    fn test_octave_doubles() {
        for name in ["C", "F#", "B"] {
            let low = frequency_of(name, 48).unwrap();
            let high = frequency_of(name, 60).unwrap();
            assert_relative_eq!(high, low * 2.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_enharmonic_same_frequency() {
        assert_eq!(
            frequency_of("Bb", DEFAULT_BASE_MIDI).unwrap(),
            frequency_of("A#", DEFAULT_BASE_MIDI).unwrap()
        );
    }

    #[test]
    fn test_custom_reference() {
        assert_relative_eq!(midi_to_frequency(69, 432.0), 432.0, max_relative = 1e-12);
        assert_relative_eq!(midi_to_frequency(57, 432.0), 216.0, max_relative = 1e-12);
    }

    #[test]
    fn test_highest_base_tops_out_at_midi_127() {
        assert_relative_eq!(
            frequency_of("B", MAX_BASE_MIDI).unwrap(),
            midi_to_frequency(127, A4_HZ),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_unknown_note() {
        assert_eq!(
            frequency_of("H", DEFAULT_BASE_MIDI),
            Err(TheoryError::UnknownNote("H".to_string()))
        );
    }
}
