//! Synth command implementation
//!
//! Writes a deterministic tone-plus-noise WAV for exercising the
//! enhancement pipeline. The same parameters always produce the same file,
//! so synthesized fixtures can be compared by hash across machines.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use cleartake_audio::{noisy_tone, AudioResult, ToneSpec, WavResult};

use super::json_output::{error_codes, JsonError, SynthOutput, SynthResult};

/// Run the synth command
///
/// # Arguments
/// * `out` - Output WAV path
/// * `seed` - Base seed for the noise stream
/// * `duration_ms` - Signal duration in milliseconds
/// * `frequency` - Tone frequency in Hz
/// * `sample_rate` - Output sample rate in Hz
/// * `tone_level` - Tone amplitude in [0.0, 1.0]
/// * `noise_level` - White-noise amplitude in [0.0, 1.0]
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
#[allow(clippy::too_many_arguments)]
pub fn run(
    out: &str,
    seed: u32,
    duration_ms: u32,
    frequency: f64,
    sample_rate: u32,
    tone_level: f64,
    noise_level: f64,
    json_output: bool,
) -> Result<ExitCode> {
    let spec = ToneSpec::new(frequency)
        .with_duration_ms(duration_ms)
        .with_sample_rate(sample_rate)
        .with_tone_level(tone_level)
        .with_noise_level(noise_level)
        .with_seed(seed);

    if json_output {
        run_json(out, &spec)
    } else {
        run_human(out, &spec)
    }
}

/// Run synth with human-readable (colored) output
fn run_human(out: &str, spec: &ToneSpec) -> Result<ExitCode> {
    let wav = synthesize(spec).context("Synthesis failed")?;

    fs::write(out, &wav.wav_data).with_context(|| format!("Failed to write {}", out))?;

    println!("{}", "Synthesized test signal:".cyan().bold());
    println!("  {} {}", "Output:".dimmed(), out);
    println!(
        "  {} {} Hz tone + noise, seed {}",
        "Signal:".dimmed(),
        spec.frequency,
        spec.seed
    );
    println!(
        "  {} {} samples at {} Hz ({:.3} s)",
        "Length:".dimmed(),
        wav.num_samples,
        wav.sample_rate,
        wav.duration_seconds()
    );
    println!("  {} {}", "PCM hash:".dimmed(), wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Run synth with machine-readable JSON output
fn run_json(out: &str, spec: &ToneSpec) -> Result<ExitCode> {
    let wav = match synthesize(spec) {
        Ok(wav) => wav,
        Err(e) => {
            let error = JsonError::new(error_codes::SYNTH_ERROR, e.to_string());
            let output = SynthOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    if let Err(e) = fs::write(out, &wav.wav_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, e.to_string()).with_file(out);
        let output = SynthOutput::failure(vec![error]);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::from(1));
    }

    let output = SynthOutput::success(SynthResult {
        path: out.to_string(),
        seed: spec.seed,
        duration_ms: spec.duration_ms,
        frequency: spec.frequency,
        sample_rate: spec.sample_rate,
        num_samples: wav.num_samples,
        pcm_hash: wav.pcm_hash.clone(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}

/// Generate the signal and package it as a WAV.
fn synthesize(spec: &ToneSpec) -> AudioResult<WavResult> {
    let samples = noisy_tone(spec)?;
    WavResult::mono(&samples, spec.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_default(out: &str, json: bool) -> Result<ExitCode> {
        run(out, 42, 100, 440.0, 16_000, 0.5, 0.1, json)
    }

    #[test]
    fn test_synth_writes_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tone.wav");

        let code = run_default(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let data = fs::read(&path).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        // 100 ms at 16 kHz = 1600 samples
        assert_eq!(data.len(), 44 + 1600 * 2);
    }

    #[test]
    fn test_synth_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let path_a = tmp.path().join("a.wav");
        let path_b = tmp.path().join("b.wav");

        run_default(path_a.to_str().unwrap(), true).unwrap();
        run_default(path_b.to_str().unwrap(), true).unwrap();

        assert_eq!(fs::read(&path_a).unwrap(), fs::read(&path_b).unwrap());
    }

    #[test]
    fn test_synth_seed_changes_output() {
        let tmp = tempfile::tempdir().unwrap();
        let path_a = tmp.path().join("a.wav");
        let path_b = tmp.path().join("b.wav");

        run(path_a.to_str().unwrap(), 1, 100, 440.0, 16_000, 0.5, 0.1, true).unwrap();
        run(path_b.to_str().unwrap(), 2, 100, 440.0, 16_000, 0.5, 0.1, true).unwrap();

        assert_ne!(fs::read(&path_a).unwrap(), fs::read(&path_b).unwrap());
    }

    #[test]
    fn test_synth_rejects_bad_levels_in_json_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tone.wav");

        let code = run(path.to_str().unwrap(), 42, 100, 440.0, 16_000, 2.0, 0.1, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!path.exists());
    }

    #[test]
    fn test_synth_human_mode_propagates_errors() {
        let result = run("/tmp/unused.wav", 42, 100, 440.0, 0, 0.5, 0.1, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_synth_unwritable_path() {
        let code = run_default("/nonexistent-dir/out.wav", true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
