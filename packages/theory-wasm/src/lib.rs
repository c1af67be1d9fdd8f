use serde::Serialize;
use theory_quest::{EngineConfig, PitchClassSet, TheoryError};
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct EngineError {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChordView {
    label: String,
    root: &'static str,
    chord_type: &'static str,
    notes: Vec<&'static str>,
}

fn to_engine_error(e: TheoryError) -> EngineError {
    let kind = match e {
        TheoryError::UnknownNote(_) => "unknownNote",
        TheoryError::UnknownChordType(_) => "unknownChordType",
        TheoryError::MalformedChordSymbol { .. } => "malformedChordSymbol",
        TheoryError::ConfigError(_) => "config",
    };
    EngineError {
        kind,
        message: e.to_string(),
    }
}

fn to_js_error(e: TheoryError) -> JsValue {
    let json = serde_json::to_string(&to_engine_error(e))
        .unwrap_or_else(|_| r#"{"kind":"internal","message":"unserializable error"}"#.to_string());
    JsValue::from_str(&json)
}

fn chord_view(chord: &theory_quest::Chord) -> ChordView {
    ChordView {
        label: chord.label(),
        root: chord.root.name(),
        chord_type: chord.chord_type.name,
        notes: chord.names(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn load_config(config_yaml: Option<String>) -> Result<EngineConfig, JsValue> {
    match config_yaml {
        Some(yaml) => EngineConfig::from_yaml(&yaml).map_err(to_js_error),
        None => Ok(EngineConfig::default()),
    }
}

/// Chord type catalog as a JSON array
#[wasm_bindgen]
pub fn chord_catalog() -> Result<String, JsValue> {
    to_json(&theory_quest::chord_types())
}

/// Notes of a chord, e.g. ("F", "Minor 7")
#[wasm_bindgen]
pub fn build_chord(root: &str, chord_type: &str) -> Result<JsValue, JsValue> {
    let chord = theory_quest::build_chord(root, chord_type).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&chord_view(&chord)).map_err(JsValue::from)
}

/// Parse a chord symbol like "D#maj7" and return its notes
#[wasm_bindgen]
pub fn parse_chord_symbol(symbol: &str) -> Result<JsValue, JsValue> {
    let chord = theory_quest::parse_chord_symbol(symbol)
        .map_err(to_js_error)?
        .to_chord();
    serde_wasm_bindgen::to_value(&chord_view(&chord)).map_err(JsValue::from)
}

/// Frequency of a note in the octave starting at base_midi (default A3 = 57)
#[wasm_bindgen]
pub fn frequency_of(note: &str, base_midi: Option<u8>) -> Result<f64, JsValue> {
    let base = base_midi.unwrap_or(theory_quest::DEFAULT_BASE_MIDI);
    theory_quest::frequency_of(note, base).map_err(to_js_error)
}

/// Check held note names (any spelling) against a chord
#[wasm_bindgen]
pub fn matches_chord(held: Vec<String>, root: &str, chord_type: &str) -> Result<bool, JsValue> {
    let observed = PitchClassSet::from_names(&held).map_err(to_js_error)?;
    theory_quest::matches_chord(&observed, root, chord_type).map_err(to_js_error)
}

/// Check held MIDI note numbers against a chord, ignoring octave
#[wasm_bindgen]
pub fn matches_midi_notes(held: Vec<u8>, root: &str, chord_type: &str) -> Result<bool, JsValue> {
    let observed = PitchClassSet::from_midi_notes(held);
    theory_quest::matches_chord(&observed, root, chord_type).map_err(to_js_error)
}

/// Synth plan (strum offsets, waveform, envelope) as JSON.
/// `config_yaml` overrides the engine defaults.
#[wasm_bindgen]
pub fn strum_chord(root: &str, chord_type: &str, config_yaml: Option<String>) -> Result<String, JsValue> {
    let config = load_config(config_yaml)?;
    let chord = theory_quest::build_chord(root, chord_type).map_err(to_js_error)?;
    to_json(&theory_quest::synth_plan(&chord, &config))
}
