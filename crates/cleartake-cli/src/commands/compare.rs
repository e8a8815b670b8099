//! Compare command implementation
//!
//! Compares two WAV recordings at the byte level and at the PCM payload
//! level. Two files with different headers but identical payloads compare
//! as equal takes; the exit code reflects the payload comparison.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use cleartake_audio::wav::{decode_pcm16, pcm16_to_bytes};

use super::json_output::{error_codes, CompareOutput, CompareResult, JsonError};

/// Payload-level comparison of two decoded recordings.
struct PayloadComparison {
    pcm_hash_a: String,
    pcm_hash_b: String,
    num_samples_a: usize,
    num_samples_b: usize,
    payload_identical: bool,
    max_abs_diff: u32,
}

/// Run the compare command
///
/// # Arguments
/// * `path_a` - Path to the first recording (reference)
/// * `path_b` - Path to the second recording (comparison target)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 when the payloads match, 1 when they differ or on error
pub fn run(path_a: &str, path_b: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(path_a, path_b)
    } else {
        run_human(path_a, path_b)
    }
}

/// Run compare with human-readable (colored) output
fn run_human(path_a: &str, path_b: &str) -> Result<ExitCode> {
    println!("{}", "Comparing recordings:".cyan().bold());
    println!("  {} {}", "A:".dimmed(), path_a);
    println!("  {} {}", "B:".dimmed(), path_b);

    // Read files
    let data_a = fs::read(path_a).with_context(|| format!("Failed to read file A: {}", path_a))?;
    let data_b = fs::read(path_b).with_context(|| format!("Failed to read file B: {}", path_b))?;

    // Compute file hashes
    let file_hash_a = blake3::hash(&data_a).to_hex().to_string();
    let file_hash_b = blake3::hash(&data_b).to_hex().to_string();

    println!("{} {}", "Hash A:".dimmed(), &file_hash_a[..16]);
    println!("{} {}", "Hash B:".dimmed(), &file_hash_b[..16]);

    if data_a == data_b {
        println!("\n{}", "Files are byte-identical!".green().bold());
    }

    let payload = compare_payloads(&data_a, &data_b)?;

    println!("\n{}", "Payload:".cyan().bold());
    println!("  {} {}", "PCM hash A:".dimmed(), &payload.pcm_hash_a[..16]);
    println!("  {} {}", "PCM hash B:".dimmed(), &payload.pcm_hash_b[..16]);
    println!(
        "  {} {} vs {}",
        "Samples:".dimmed(),
        payload.num_samples_a,
        payload.num_samples_b
    );
    println!("  {} {}", "Max abs diff:".dimmed(), payload.max_abs_diff);

    if payload.payload_identical {
        println!("\n{}", "Payloads are identical.".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{}", "Payloads differ.".red().bold());
        Ok(ExitCode::from(1))
    }
}

/// Run compare with machine-readable JSON output
fn run_json(path_a: &str, path_b: &str) -> Result<ExitCode> {
    // Read files
    let data_a = match fs::read(path_a) {
        Ok(d) => d,
        Err(e) => {
            let error = JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read file A: {}", e),
            )
            .with_file(path_a);
            let output = CompareOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let data_b = match fs::read(path_b) {
        Ok(d) => d,
        Err(e) => {
            let error = JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read file B: {}", e),
            )
            .with_file(path_b);
            let output = CompareOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    // Compute file hashes
    let file_hash_a = blake3::hash(&data_a).to_hex().to_string();
    let file_hash_b = blake3::hash(&data_b).to_hex().to_string();
    let identical = data_a == data_b;

    // Compare payloads
    let payload = match compare_payloads(&data_a, &data_b) {
        Ok(p) => p,
        Err(e) => {
            let error = JsonError::new(
                error_codes::WAV_PARSE,
                format!("Payload comparison failed: {}", e),
            );
            let output = CompareOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let payload_identical = payload.payload_identical;

    let result = CompareResult {
        path_a: path_a.to_string(),
        path_b: path_b.to_string(),
        file_hash_a,
        file_hash_b,
        identical,
        pcm_hash_a: payload.pcm_hash_a,
        pcm_hash_b: payload.pcm_hash_b,
        num_samples_a: payload.num_samples_a,
        num_samples_b: payload.num_samples_b,
        payload_identical,
        max_abs_diff: payload.max_abs_diff,
    };

    let output = CompareOutput::success(result);
    println!("{}", serde_json::to_string_pretty(&output)?);

    if payload_identical {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Decode both payloads and compare them sample by sample.
fn compare_payloads(data_a: &[u8], data_b: &[u8]) -> Result<PayloadComparison> {
    let samples_a = decode_pcm16(data_a)
        .ok_or_else(|| anyhow::anyhow!("File A is not a decodable 16-bit WAV container"))?;
    let samples_b = decode_pcm16(data_b)
        .ok_or_else(|| anyhow::anyhow!("File B is not a decodable 16-bit WAV container"))?;

    let pcm_hash_a = blake3::hash(&pcm16_to_bytes(&samples_a)).to_hex().to_string();
    let pcm_hash_b = blake3::hash(&pcm16_to_bytes(&samples_b)).to_hex().to_string();

    // Largest per-sample delta over the shared prefix
    let max_abs_diff = samples_a
        .iter()
        .zip(samples_b.iter())
        .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
        .max()
        .unwrap_or(0);

    Ok(PayloadComparison {
        pcm_hash_a,
        pcm_hash_b,
        num_samples_a: samples_a.len(),
        num_samples_b: samples_b.len(),
        payload_identical: samples_a == samples_b,
        max_abs_diff,
    })
}
