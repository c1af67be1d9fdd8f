use std::env;
use std::process;

use simple_logger::SimpleLogger;
use theory_quest::{
    build_chord, chord_types, frequency_of, matches_chord, parse_chord_symbol, synth_plan,
    EngineConfig, PitchClassSet, TheoryError,
};
use theory_quest::tuning::MAX_BASE_MIDI;

const USAGE: &str = "Usage: theory-quest [--verbose] [--config <file.yaml>] <command> [args]

Commands:
  catalog                       List chord types
  chord <root> <type>           Notes of a chord, e.g. chord F \"Minor 7\"
  symbol <symbol>               Notes of a chord symbol, e.g. symbol D#maj7
  freq <note> [base-midi]       Frequency of a note in the octave from base-midi
  match <root> <type> <note>... Check held notes against a chord
  strum <root> <type>           Strum offsets and envelope for a chord";

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut verbose = false;
    let mut config_path: Option<&String> = None;
    let mut idx = 0;

    // Parse flags
    while idx < args.len() {
        match args[idx].as_str() {
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                idx += 1;
                config_path = match args.get(idx) {
                    Some(path) => Some(path),
                    None => usage_exit(),
                };
            }
            _ => break,
        }
        idx += 1;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Could not start logger: {}", e);
    }

    let config = match config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let rest = &args[idx..];
    let Some(command) = rest.first() else {
        usage_exit();
    };

    if let Err(e) = run(command, &rest[1..], &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: &str, args: &[String], config: &EngineConfig) -> Result<(), TheoryError> {
    match (command, args) {
        ("catalog", []) => {
            for ct in chord_types() {
                let vibe = ct.vibe.map(|v| format!("  ({})", v)).unwrap_or_default();
                println!("{:<16} {:?}{}", ct.name, ct.intervals, vibe);
            }
        }
        ("chord", [root, chord_type]) => {
            let chord = build_chord(root, chord_type)?;
            println!("{}", chord.names().join(" "));
        }
        ("symbol", [symbol]) => {
            let chord = parse_chord_symbol(symbol)?.to_chord();
            println!("{}: {}", chord.label(), chord.names().join(" "));
        }
        ("freq", [note]) => {
            println!("{:.3} Hz", frequency_of(note, config.base_midi)?);
        }
        ("freq", [note, base]) => {
            let Some(base) = parse_base_midi(base) else {
                eprintln!("base-midi must be a number from 0 to {}, got '{}'", MAX_BASE_MIDI, base);
                usage_exit();
            };
            println!("{:.3} Hz", frequency_of(note, base)?);
        }
        ("match", [root, chord_type, held @ ..]) if !held.is_empty() => {
            let observed = PitchClassSet::from_names(held)?;
            if matches_chord(&observed, root, chord_type)? {
                println!("match");
            } else {
                let expected = build_chord(root, chord_type)?;
                println!("no match (expected {})", expected.names().join(" "));
            }
        }
        ("strum", [root, chord_type]) => {
            let chord = build_chord(root, chord_type)?;
            let plan = synth_plan(&chord, config);
            println!("{} ({:?})", plan.label, plan.waveform);
            for note in &plan.notes {
                println!(
                    "  {:<3} {:>9.3} Hz  +{:.0} ms",
                    note.note.name(),
                    note.frequency_hz,
                    note.start_offset * 1000.0
                );
            }
            let env = plan.envelope;
            println!(
                "  envelope: {} -> {} over {}s, {} by {}s, stop at {}s",
                env.start_gain, env.peak_gain, env.attack, env.end_gain, env.decay, env.release
            );
        }
        _ => usage_exit(),
    }
    Ok(())
}

/// Base MIDI number from the command line, within the range every note fits in
fn parse_base_midi(arg: &str) -> Option<u8> {
    arg.trim().parse::<u8>().ok().filter(|&base| base <= MAX_BASE_MIDI)
}
