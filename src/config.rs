//! # Engine Configuration
//!
//! Tuning and synthesis defaults, optionally loaded from YAML:
//!
//! ```yaml
//! reference-hz: 440
//! base-midi: 57
//! strum-spacing: 0.04
//! waveform: sawtooth
//! attack: 0.02
//! peak-gain: 0.35
//! decay: 1.0
//! release: 1.5
//! ```
//!
//! Every key is optional. Missing keys keep their defaults; present keys are
//! range-checked and rejected with [`TheoryError::ConfigError`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TheoryError;
use crate::synth::{Envelope, Waveform};
use crate::tuning::{A4_HZ, DEFAULT_BASE_MIDI, MAX_BASE_MIDI};

/// Default gap between strummed notes, in seconds
pub const DEFAULT_STRUM_SPACING: f64 = 0.04;

/// Validated engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub reference_hz: f64,
    pub base_midi: u8,
    pub strum_spacing: f64,
    pub waveform: Waveform,
    pub envelope: Envelope,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_hz: A4_HZ,
            base_midi: DEFAULT_BASE_MIDI,
            strum_spacing: DEFAULT_STRUM_SPACING,
            waveform: Waveform::default(),
            envelope: Envelope::default(),
        }
    }
}

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub reference_hz: Option<f64>,
    pub base_midi: Option<u8>,
    pub strum_spacing: Option<f64>,
    pub waveform: Option<String>,
    pub attack: Option<f64>,
    pub peak_gain: Option<f64>,
    pub decay: Option<f64>,
    pub release: Option<f64>,
}

impl EngineConfig {
    /// Parse and validate YAML config content
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| TheoryError::ConfigError(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Read a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        log::debug!("loading engine config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            TheoryError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, TheoryError> {
        let defaults = Self::default();

        let reference_hz = raw.reference_hz.unwrap_or(defaults.reference_hz);
        if !(reference_hz.is_finite() && reference_hz > 0.0) {
            return Err(TheoryError::ConfigError(format!(
                "reference-hz must be a positive frequency, got {}",
                reference_hz
            )));
        }

        let base_midi = raw.base_midi.unwrap_or(defaults.base_midi);
        if base_midi > MAX_BASE_MIDI {
            return Err(TheoryError::ConfigError(format!(
                "base-midi must be at most {} so the octave stays in MIDI range, got {}",
                MAX_BASE_MIDI, base_midi
            )));
        }

        let strum_spacing = raw.strum_spacing.unwrap_or(defaults.strum_spacing);
        if !(strum_spacing.is_finite() && strum_spacing > 0.0) {
            return Err(TheoryError::ConfigError(format!(
                "strum-spacing must be greater than zero, got {}",
                strum_spacing
            )));
        }
        if !(0.02..=0.04).contains(&strum_spacing) {
            log::warn!(
                "strum-spacing {}s is outside the usual 20-40ms strum range",
                strum_spacing
            );
        }

        let waveform = match raw.waveform {
            Some(ref w) => Waveform::from_str(w)
                .ok_or_else(|| TheoryError::ConfigError(format!("Invalid waveform: {}", w)))?,
            None => defaults.waveform,
        };

        let envelope = Envelope {
            attack: raw.attack.unwrap_or(defaults.envelope.attack),
            peak_gain: raw.peak_gain.unwrap_or(defaults.envelope.peak_gain),
            decay: raw.decay.unwrap_or(defaults.envelope.decay),
            release: raw.release.unwrap_or(defaults.envelope.release),
            ..defaults.envelope
        };
        validate_envelope(&envelope)?;

        Ok(Self {
            reference_hz,
            base_midi,
            strum_spacing,
            waveform,
            envelope,
        })
    }
}

fn validate_envelope(env: &Envelope) -> Result<(), TheoryError> {
    if !(env.peak_gain > env.start_gain && env.peak_gain <= 1.0) {
        return Err(TheoryError::ConfigError(format!(
            "peak-gain must be in ({}, 1.0], got {}",
            env.start_gain, env.peak_gain
        )));
    }
    if !(env.attack > 0.0 && env.attack < env.decay && env.decay <= env.release) {
        return Err(TheoryError::ConfigError(format!(
            "envelope times must satisfy 0 < attack < decay <= release, got {} / {} / {}",
            env.attack, env.decay, env.release
        )));
    }
    Ok(())
}
