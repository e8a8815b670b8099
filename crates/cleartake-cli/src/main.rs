//! ClearTake CLI - Command-line interface for deterministic capture and enhancement
//!
//! This binary provides commands for synthesizing test signals, running
//! recordings through an enhancement engine, and inspecting or comparing
//! the resulting WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use cleartake_cli::commands;

/// ClearTake - Deterministic capture and enhancement pipeline
#[derive(Parser)]
#[command(name = "cleartake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a deterministic noisy test tone and write it as WAV
    Synth {
        /// Output WAV file path
        #[arg(short, long)]
        out: String,

        /// Seed for the noise component
        #[arg(short, long, default_value = "42")]
        seed: u32,

        /// Signal duration in milliseconds
        #[arg(long, default_value = "1000")]
        duration_ms: u32,

        /// Tone frequency in Hz
        #[arg(short, long, default_value = "440.0")]
        frequency: f64,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value = "16000")]
        sample_rate: u32,

        /// Tone amplitude (0.0 to 1.0)
        #[arg(long, default_value = "0.5")]
        tone_level: f64,

        /// Noise amplitude (0.0 to 1.0)
        #[arg(long, default_value = "0.1")]
        noise_level: f64,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run a WAV recording through an enhancement engine, writing both takes
    Enhance {
        /// Path to the input WAV file (mono, 16-bit PCM)
        #[arg(short, long)]
        input: String,

        /// Directory to write the raw and enhanced takes into
        #[arg(short, long, default_value = ".")]
        output_dir: String,

        /// Enhancement engine to apply
        #[arg(short, long, default_value = "rnnoise", value_parser = ["passthrough", "rnnoise"])]
        engine: String,

        /// Frame length in samples (passthrough engine only)
        #[arg(long)]
        frame_length: Option<usize>,

        /// Enhancement delay in samples to compensate (passthrough engine only)
        #[arg(long)]
        delay: Option<usize>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a WAV file and report its format and content hash
    Info {
        /// Path to the WAV file to inspect
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compare two WAV recordings by file bytes and PCM payload
    Compare {
        /// Path to the first recording (reference)
        #[arg(short, long)]
        a: String,

        /// Path to the second recording (comparison target)
        #[arg(short, long)]
        b: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Synth {
            out,
            seed,
            duration_ms,
            frequency,
            sample_rate,
            tone_level,
            noise_level,
            json,
        } => commands::synth::run(
            &out,
            seed,
            duration_ms,
            frequency,
            sample_rate,
            tone_level,
            noise_level,
            json,
        ),
        Commands::Enhance {
            input,
            output_dir,
            engine,
            frame_length,
            delay,
            json,
        } => commands::enhance::run(&input, &output_dir, &engine, frame_length, delay, json),
        Commands::Info { input, json } => commands::info::run(&input, json),
        Commands::Compare { a, b, json } => commands::compare::run(&a, &b, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
