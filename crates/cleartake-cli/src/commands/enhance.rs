//! Enhance command implementation
//!
//! Reads a 16-bit PCM WAV, runs it through an enhancement engine frame by
//! frame, and writes the raw and enhanced takes side by side so they can
//! be listened to or diffed.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[cfg(feature = "rnnoise")]
use cleartake_audio::RnnoiseEngine;
use cleartake_audio::{enhance_samples, EnhancementEngine, PassthroughEngine, SessionOutput};

use crate::input::read_wav;

use super::json_output::{error_codes, EnhanceOutput, EnhanceResult, JsonError};

/// Default frame length for the passthrough engine (10 ms at 16 kHz).
const DEFAULT_PASSTHROUGH_FRAME: usize = 160;

/// Run the enhance command
///
/// # Arguments
/// * `input` - Path to the input WAV (mono 16-bit PCM)
/// * `output_dir` - Directory for the raw and enhanced output files
/// * `engine_name` - Engine to process frames with
/// * `frame_length` - Frame length override (passthrough only)
/// * `delay` - Engine delay override (passthrough only)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &str,
    output_dir: &str,
    engine_name: &str,
    frame_length: Option<usize>,
    delay: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input, output_dir, engine_name, frame_length, delay)
    } else {
        run_human(input, output_dir, engine_name, frame_length, delay)
    }
}

/// Run enhance with human-readable (colored) output
fn run_human(
    input: &str,
    output_dir: &str,
    engine_name: &str,
    frame_length: Option<usize>,
    delay: Option<usize>,
) -> Result<ExitCode> {
    let wav_input = read_wav(Path::new(input))?;
    let mut engine = build_engine(engine_name, wav_input.sample_rate, frame_length, delay)?;

    let output = enhance_samples(engine.as_mut(), &wav_input.samples)
        .context("Enhancement pipeline failed")?;

    let (raw_path, enhanced_path) = output_paths(input, output_dir);
    write_takes(output_dir, &raw_path, &enhanced_path, &output)?;

    println!("{}", "Enhanced recording:".cyan().bold());
    println!(
        "  {} {} ({} samples at {} Hz)",
        "Input:".dimmed(),
        input,
        wav_input.samples.len(),
        wav_input.sample_rate
    );
    println!(
        "  {} {} (frame {}, delay {})",
        "Engine:".dimmed(),
        engine_name,
        engine.frame_length(),
        engine.delay_samples()
    );
    println!(
        "  {} {} captured, {} enhanced, {} dropped for delay",
        "Frames:".dimmed(),
        output.frames_captured,
        output.frames_enhanced,
        output.frames_dropped
    );
    if output.trailing_samples > 0 {
        println!(
            "  {} {} samples left unframed",
            "Trailing:".dimmed(),
            output.trailing_samples
        );
    }
    println!(
        "  {} {} ({})",
        "Raw:".dimmed(),
        raw_path.display(),
        &output.raw.pcm_hash[..16]
    );
    println!(
        "  {} {} ({})",
        "Enhanced:".dimmed(),
        enhanced_path.display(),
        &output.enhanced.pcm_hash[..16]
    );

    if output.has_engine_errors() {
        println!(
            "\n{}",
            format!("Engine errors ({}):", output.engine_errors.len())
                .yellow()
                .bold()
        );
        for err in &output.engine_errors {
            println!("  {} {}", err.code().yellow(), err);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run enhance with machine-readable JSON output
fn run_json(
    input: &str,
    output_dir: &str,
    engine_name: &str,
    frame_length: Option<usize>,
    delay: Option<usize>,
) -> Result<ExitCode> {
    let wav_input = match read_wav(Path::new(input)) {
        Ok(w) => w,
        Err(e) => {
            let error = JsonError::new(error_codes::WAV_PARSE, format!("{:#}", e)).with_file(input);
            let output = EnhanceOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let mut engine = match build_engine(engine_name, wav_input.sample_rate, frame_length, delay) {
        Ok(engine) => engine,
        Err(e) => {
            let error = JsonError::new(error_codes::ENGINE_UNAVAILABLE, format!("{:#}", e));
            let output = EnhanceOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = match enhance_samples(engine.as_mut(), &wav_input.samples) {
        Ok(output) => output,
        Err(e) => {
            let error = JsonError::new(error_codes::ENHANCE_ERROR, e.to_string());
            let output = EnhanceOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let (raw_path, enhanced_path) = output_paths(input, output_dir);
    if let Err(e) = write_takes(output_dir, &raw_path, &enhanced_path, &output) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e));
        let json = EnhanceOutput::failure(vec![error]);
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(ExitCode::from(1));
    }

    let result = EnhanceResult {
        input: input.to_string(),
        raw_path: raw_path.display().to_string(),
        enhanced_path: enhanced_path.display().to_string(),
        engine: engine_name.to_string(),
        sample_rate: engine.sample_rate(),
        frame_length: engine.frame_length(),
        delay_samples: engine.delay_samples(),
        frames_captured: output.frames_captured,
        frames_enhanced: output.frames_enhanced,
        frames_dropped: output.frames_dropped,
        trailing_samples: output.trailing_samples,
        raw_hash: output.raw.pcm_hash.clone(),
        enhanced_hash: output.enhanced.pcm_hash.clone(),
        raw_duration_seconds: output.raw.duration_seconds(),
        enhanced_duration_seconds: output.enhanced.duration_seconds(),
        engine_errors: output.engine_errors.iter().map(JsonError::from).collect(),
    };

    let json = EnhanceOutput::success(result);
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(ExitCode::SUCCESS)
}

/// Constructs the engine named on the command line.
fn build_engine(
    engine_name: &str,
    sample_rate: u32,
    frame_length: Option<usize>,
    delay: Option<usize>,
) -> Result<Box<dyn EnhancementEngine>> {
    match engine_name {
        "passthrough" => {
            let frame_length = frame_length.unwrap_or(DEFAULT_PASSTHROUGH_FRAME);
            let delay = delay.unwrap_or(0);
            let engine = PassthroughEngine::new(frame_length, sample_rate).with_delay(delay);
            Ok(Box::new(engine))
        }
        #[cfg(feature = "rnnoise")]
        "rnnoise" => {
            if frame_length.is_some() || delay.is_some() {
                anyhow::bail!("--frame-length and --delay apply to the passthrough engine only");
            }
            if sample_rate != RnnoiseEngine::SAMPLE_RATE {
                anyhow::bail!(
                    "The rnnoise engine requires {} Hz input, got {} Hz",
                    RnnoiseEngine::SAMPLE_RATE,
                    sample_rate
                );
            }
            Ok(Box::new(RnnoiseEngine::new()))
        }
        #[cfg(not(feature = "rnnoise"))]
        "rnnoise" => {
            anyhow::bail!("This build does not include the rnnoise engine")
        }
        other => anyhow::bail!("Unknown engine: {}", other),
    }
}

/// Output file locations for a given input stem.
fn output_paths(input: &str, output_dir: &str) -> (PathBuf, PathBuf) {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("recording");
    let dir = Path::new(output_dir);
    (
        dir.join(format!("{}-raw.wav", stem)),
        dir.join(format!("{}-enhanced.wav", stem)),
    )
}

/// Writes both takes, creating the output directory first.
fn write_takes(
    output_dir: &str,
    raw_path: &Path,
    enhanced_path: &Path,
    output: &SessionOutput,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir))?;
    fs::write(raw_path, &output.raw.wav_data)
        .with_context(|| format!("Failed to write {}", raw_path.display()))?;
    fs::write(enhanced_path, &output.enhanced.wav_data)
        .with_context(|| format!("Failed to write {}", enhanced_path.display()))?;
    Ok(())
}
