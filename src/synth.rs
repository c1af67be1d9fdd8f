//! # Synthesis Parameters
//!
//! Turns a built chord into plain data for the audio-output side: one
//! `(frequency, start offset)` pair per note plus the waveform and gain envelope to
//! play them with. Nothing here touches an audio device.
//!
//! ## Strum
//! Notes start one after another in chord order, `strum_spacing` seconds apart
//! (40 ms by default), so the chord rolls like a strummed pad instead of a single
//! hit. Offsets are strictly increasing as long as the spacing is positive, which
//! the config loader enforces.
//!
//! ## Envelope
//! All envelope times are measured from the chord onset, not from each note's own
//! start:
//!
//! ```text
//! gain
//! peak ─┐   ╱╲
//!       │  ╱  ╲__
//!       │ ╱      ╲____
//! start ┴╱            ╲______ end        (stop)
//!       0  attack       decay         release
//! ```

use serde::Serialize;

use crate::chord::Chord;
use crate::config::EngineConfig;
use crate::pitch::PitchClass;
use crate::tuning::{midi_number, midi_to_frequency};

/// Oscillator shape for the chord builder voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    #[default]
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "sawtooth" | "saw" => Some(Waveform::Sawtooth),
            "triangle" => Some(Waveform::Triangle),
            _ => None,
        }
    }
}

/// Exponential gain envelope, times in seconds from chord onset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub start_gain: f64,
    pub attack: f64,
    pub peak_gain: f64,
    pub decay: f64,
    pub end_gain: f64,
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            start_gain: 0.0001,
            attack: 0.02,
            peak_gain: 0.35,
            decay: 1.0,
            end_gain: 0.001,
            release: 1.5,
        }
    }
}

/// One note of a strummed chord
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumNote {
    pub note: PitchClass,
    pub frequency_hz: f64,
    pub start_offset: f64,
}

/// Everything the audio side needs to play a chord
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthPlan {
    pub label: String,
    pub waveform: Waveform,
    pub envelope: Envelope,
    pub notes: Vec<StrumNote>,
}

/// Frequencies and staggered start offsets, in chord order.
///
/// Each note sounds in the octave starting at `config.base_midi`, so extensions
/// such as Minor 9's ninth fold back into that octave.
pub fn strum(chord: &Chord, config: &EngineConfig) -> Vec<StrumNote> {
    chord
        .notes
        .iter()
        .enumerate()
        .map(|(i, &note)| StrumNote {
            note,
            frequency_hz: midi_to_frequency(midi_number(note, config.base_midi), config.reference_hz),
            start_offset: i as f64 * config.strum_spacing,
        })
        .collect()
}

/// Strum list bundled with the configured waveform and envelope
pub fn synth_plan(chord: &Chord, config: &EngineConfig) -> SynthPlan {
    SynthPlan {
        label: chord.label(),
        waveform: config.waveform,
        envelope: config.envelope,
        notes: strum(chord, config),
    }
}
