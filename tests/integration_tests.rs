//! Integration tests for the theory engine
//!
//! Exercises the public API the way the chord builder, quiz and pad drill call it.

use approx::assert_relative_eq;
use theory_quest::{
    build_chord, frequency_of, matches_chord, parse_chord_symbol, plan_symbol, strum_chord,
    EngineConfig, PitchClassSet, TheoryError, Waveform,
};

#[test]
fn test_chord_builder_default_selection() {
    // The chord builder opens on F Minor 7
    let chord = build_chord("F", "Minor 7").unwrap();
    assert_eq!(chord.names(), vec!["F", "G#", "C", "D#"]);
}

#[test]
fn test_quiz_chords_in_f() {
    // The ear-training quiz always plays its chord on F
    let cases = [
        ("Minor", vec!["F", "G#", "C"]),
        ("Major", vec!["F", "A", "C"]),
        ("Sus2", vec!["F", "G", "C"]),
        ("Sus4", vec!["F", "A#", "C"]),
        ("Minor 9", vec!["F", "G#", "C", "D#", "G"]),
        ("Half-diminished", vec!["F", "G#", "B", "D#"]),
        ("Dominant 7", vec!["F", "A", "C", "D#"]),
    ];
    for (chord_type, expected) in cases {
        assert_eq!(build_chord("F", chord_type).unwrap().names(), expected, "{}", chord_type);
    }
}

#[test]
fn test_pad_drill_rejects_partial_and_extra_notes() {
    let full = PitchClassSet::from_midi_notes([53, 56, 60, 63]);
    assert!(matches_chord(&full, "F", "Minor 7").unwrap());

    let partial = PitchClassSet::from_midi_notes([53, 56, 60]);
    assert!(!matches_chord(&partial, "F", "Minor 7").unwrap());

    let extra = PitchClassSet::from_midi_notes([53, 56, 60, 63, 67]);
    assert!(!matches_chord(&extra, "F", "Minor 7").unwrap());
}

#[test]
fn test_flat_spellings_match_sharp_chords() {
    let held = PitchClassSet::from_names(["Bb", "Db", "F"]).unwrap();
    assert!(matches_chord(&held, "A#", "Minor").unwrap());
    assert!(matches_chord(&held, "Bb", "Minor").unwrap());
}

#[test]
fn test_a4_reference() {
    assert_relative_eq!(frequency_of("A", 60).unwrap(), 440.0, max_relative = 1e-12);
}

#[test]
fn test_strum_chord_defaults() {
    let notes = strum_chord("F", "Minor 7").unwrap();
    assert_eq!(notes.len(), 4);
    assert_eq!(notes[0].start_offset, 0.0);
    assert_relative_eq!(notes[3].start_offset, 0.12, epsilon = 1e-12);
    // F sits on MIDI 62 with the default base
    assert_relative_eq!(notes[0].frequency_hz, 293.664_767_917_407_6, max_relative = 1e-9);
}

#[test]
fn test_plan_symbol_with_yaml_config() {
    let config = EngineConfig::from_yaml("waveform: square\nstrum-spacing: 0.02").unwrap();
    let plan = plan_symbol("Ebm7", &config).unwrap();

    assert_eq!(plan.label, "D# Minor 7");
    assert_eq!(plan.waveform, Waveform::Square);
    assert_relative_eq!(plan.notes[1].start_offset, 0.02, epsilon = 1e-12);
}

#[test]
fn test_symbol_and_name_agree() {
    let from_symbol = parse_chord_symbol("Bbm7b5").unwrap().to_chord();
    let from_names = build_chord("Bb", "Half-diminished").unwrap();
    assert_eq!(from_symbol.names(), from_names.names());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        build_chord("H", "Minor").unwrap_err().to_string(),
        "Unknown note: H"
    );
    assert_eq!(
        build_chord("C", "Lydian").unwrap_err().to_string(),
        "Unknown chord type: Lydian"
    );
    assert!(matches!(
        plan_symbol("Cwobble", &EngineConfig::default()),
        Err(TheoryError::MalformedChordSymbol { .. })
    ));
}
