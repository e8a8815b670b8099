//! Core WAV writing and PCM byte conversion functions.

use std::io::{self, Write};

use crate::error::AudioResult;

use super::format::WavFormat;

/// Encodes samples into a complete WAV container.
///
/// The container is assembled fully in memory: a 44-byte header followed by
/// the samples as little-endian 16-bit PCM. Samples are written as supplied,
/// with no resampling or clamping; for multi-channel formats they must
/// already be interleaved. An empty slice produces a valid 44-byte file.
///
/// # Arguments
/// * `samples` - PCM samples, interleaved if multi-channel
/// * `format` - WAV format parameters
///
/// # Returns
/// Complete WAV file bytes, or `InvalidSampleRate` / `InvalidChannelCount`
/// if the format would make the header meaningless
pub fn encode_wav(samples: &[i16], format: &WavFormat) -> AudioResult<Vec<u8>> {
    format.validate()?;
    Ok(write_wav_to_vec(format, &pcm16_to_bytes(samples)))
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts i16 samples to little-endian PCM bytes.
///
/// # Arguments
/// * `samples` - PCM samples
///
/// # Returns
/// Payload bytes, two per sample, in input order
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
