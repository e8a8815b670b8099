//! Info command implementation
//!
//! Probes a WAV file and reports its format, length, and PCM payload hash.
//! Parsing goes through `hound` so the report reflects what an independent
//! decoder sees, not what our own writer produced.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use cleartake_audio::wav::pcm16_to_bytes;

use super::json_output::{error_codes, InfoOutput, InfoResult, JsonError};

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the WAV file to probe
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run info with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let info = probe(input)?;

    println!("{}", "WAV file info:".cyan().bold());
    println!("  {} {}", "Path:".dimmed(), info.path);
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {}-bit PCM", "Format:".dimmed(), info.bits_per_sample);
    println!(
        "  {} {} per channel ({:.3} s)",
        "Samples:".dimmed(),
        info.num_samples,
        info.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), info.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Run info with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let info = match probe(input) {
        Ok(info) => info,
        Err(e) => {
            let error = JsonError::new(error_codes::WAV_PARSE, format!("{:#}", e)).with_file(input);
            let output = InfoOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = InfoOutput::success(info);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}

/// Reads the header and payload of a WAV file.
fn probe(input: &str) -> Result<InfoResult> {
    let reader = hound::WavReader::open(Path::new(input))
        .with_context(|| format!("Failed to open WAV file: {}", input))?;

    let spec = reader.spec();
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        anyhow::bail!(
            "Only 16-bit PCM files are supported, {} is {}-bit",
            input,
            spec.bits_per_sample
        );
    }

    let num_samples = reader.duration() as usize;
    let duration_seconds = if spec.sample_rate > 0 {
        num_samples as f64 / spec.sample_rate as f64
    } else {
        0.0
    };

    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to decode samples from {}", input))?;
    let pcm_hash = blake3::hash(&pcm16_to_bytes(&samples)).to_hex().to_string();

    Ok(InfoResult {
        path: input.to_string(),
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_samples,
        duration_seconds,
        pcm_hash,
    })
}
