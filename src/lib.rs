//! # Theory Quest Engine
//!
//! Pitch-class arithmetic, chord construction, tuning and chord matching for the
//! Dubstep Theory Quest lessons, chord builder, ear-training quiz and pad drill.
//!
//! Every operation is a pure function: callers pass a snapshot of inputs and get a
//! value (or a [`TheoryError`]) back. Rendering, progress storage, audio output and
//! MIDI decoding live in the callers.
//!
//! ## Modules
//! - `pitch` - [`PitchClass`], enharmonic folding, [`PitchClassSet`]
//! - `chord` - The [`ChordType`] catalog, [`build_chord`], [`matches_chord`]
//! - `symbol` - Chord symbols like "D#maj7" via [`parse_chord_symbol`]
//! - `tuning` - Equal temperament, [`frequency_of`]
//! - `synth` - Strum offsets and envelope data for the audio side
//! - `config` - [`EngineConfig`] loaded from YAML
//!
//! ## Example
//! ```rust
//! use theory_quest::{build_chord, matches_chord, strum_chord, PitchClassSet};
//!
//! let chord = build_chord("A", "Minor")?;
//! assert_eq!(chord.names(), vec!["A", "C", "E"]);
//!
//! // A pad drill hands over whatever MIDI notes are held
//! let held = PitchClassSet::from_midi_notes([57, 60, 64, 69]);
//! assert!(matches_chord(&held, "A", "Minor")?);
//!
//! let notes = strum_chord("A", "Minor")?;
//! assert_eq!(notes.len(), 3);
//! assert!(notes[1].start_offset > notes[0].start_offset);
//! # Ok::<(), theory_quest::TheoryError>(())
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod pitch;
pub mod symbol;
pub mod synth;
pub mod tuning;

pub use chord::{build_chord, chord_type, chord_types, matches_chord, Chord, ChordType, CHORD_TYPES};
pub use config::EngineConfig;
pub use error::*;
pub use pitch::{pitch_class_index, PitchClass, PitchClassSet, NOTE_NAMES};
pub use symbol::{parse_chord_symbol, ChordSymbol};
pub use synth::{strum, synth_plan, Envelope, StrumNote, SynthPlan, Waveform};
pub use tuning::{frequency_of, midi_to_frequency, DEFAULT_BASE_MIDI};

/// Build a chord and strum it with the default config.
///
/// Returns one `(frequency, start offset)` entry per chord note.
pub fn strum_chord(root_name: &str, chord_type_name: &str) -> Result<Vec<StrumNote>, TheoryError> {
    let chord = build_chord(root_name, chord_type_name)?;
    Ok(strum(&chord, &EngineConfig::default()))
}

/// Build a chord from a symbol like "Fm7" and produce its full synth plan.
pub fn plan_symbol(symbol: &str, config: &EngineConfig) -> Result<SynthPlan, TheoryError> {
    let chord = parse_chord_symbol(symbol)?.to_chord();
    Ok(synth_plan(&chord, config))
}
