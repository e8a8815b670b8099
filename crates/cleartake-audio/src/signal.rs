//! Deterministic test-signal synthesis.
//!
//! Generates a sine tone mixed with white noise, quantized to 16-bit PCM.
//! The noise stream is seeded through BLAKE3 derivation so the same
//! [`ToneSpec`] always produces the same buffer, which makes WAV hashes
//! reproducible across runs and platforms.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::{AudioError, AudioResult};
use crate::rng::create_component_rng;
use crate::wav::DEFAULT_SAMPLE_RATE;

/// Parameters for a synthesized tone-plus-noise signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Signal duration in milliseconds.
    pub duration_ms: u32,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Tone amplitude in [0.0, 1.0].
    pub tone_level: f64,
    /// White-noise amplitude in [0.0, 1.0].
    pub noise_level: f64,
    /// Base seed for the noise stream.
    pub seed: u32,
}

impl ToneSpec {
    /// Creates a spec for a one-second tone at the given frequency.
    pub fn new(frequency: f64) -> Self {
        Self {
            duration_ms: 1000,
            sample_rate: DEFAULT_SAMPLE_RATE,
            frequency,
            tone_level: 0.5,
            noise_level: 0.1,
            seed: 42,
        }
    }

    /// Sets the duration in milliseconds.
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the tone amplitude.
    pub fn with_tone_level(mut self, tone_level: f64) -> Self {
        self.tone_level = tone_level;
        self
    }

    /// Sets the white-noise amplitude.
    pub fn with_noise_level(mut self, noise_level: f64) -> Self {
        self.noise_level = noise_level;
        self
    }

    /// Sets the base seed for the noise stream.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of samples this spec produces.
    pub fn num_samples(&self) -> usize {
        (self.duration_ms as u64 * self.sample_rate as u64 / 1000) as usize
    }

    /// Validates the spec parameters.
    ///
    /// # Returns
    /// `Ok(())` if valid, or an error describing the first violation
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(AudioError::invalid_param(
                "frequency",
                "must be a finite non-negative value",
            ));
        }
        if !(0.0..=1.0).contains(&self.tone_level) {
            return Err(AudioError::invalid_param(
                "tone_level",
                "must be in [0.0, 1.0]",
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(AudioError::invalid_param(
                "noise_level",
                "must be in [0.0, 1.0]",
            ));
        }
        Ok(())
    }
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self::new(440.0)
    }
}

/// Generates a sine tone mixed with white noise as 16-bit PCM.
///
/// The tone uses a phase accumulator; the noise stream comes from a PCG32
/// generator seeded via `derive_component_seed(spec.seed, "noise")`. The
/// mixed value is clipped to [-1.0, 1.0] before quantization.
///
/// # Arguments
/// * `spec` - Signal parameters
///
/// # Returns
/// The synthesized samples, or an error if the spec is invalid
pub fn noisy_tone(spec: &ToneSpec) -> AudioResult<Vec<i16>> {
    spec.validate()?;

    let num_samples = spec.num_samples();
    let mut samples = Vec::with_capacity(num_samples);

    let dt = 1.0 / spec.sample_rate as f64;
    let two_pi = 2.0 * PI;
    let mut phase: f64 = 0.0;
    let mut rng = create_component_rng(spec.seed, "noise");

    for _ in 0..num_samples {
        let tone = phase.sin() * spec.tone_level;
        let noise = (rng.gen::<f64>() * 2.0 - 1.0) * spec.noise_level;

        let mixed = (tone + noise).clamp(-1.0, 1.0);
        samples.push((mixed * 32767.0).round() as i16);

        // Update phase and wrap to prevent precision loss
        phase += two_pi * spec.frequency * dt;
        if phase >= two_pi {
            phase -= two_pi;
        }
    }

    Ok(samples)
}
