//! PCM payload extraction, decoding, and hashing.

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the RIFF chunk list from byte 12, honoring word alignment, so
/// containers with extra chunks before `data` are handled.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// PCM payload bytes if found, or None if the container is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// Decodes the PCM payload of a WAV file back into i16 samples.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// Samples in payload order, or None if the container is invalid or the
/// payload is not a whole number of 16-bit samples
pub fn decode_pcm16(wav_data: &[u8]) -> Option<Vec<i16>> {
    let pcm = extract_pcm_data(wav_data)?;
    if !pcm.len().is_multiple_of(2) {
        return None;
    }

    Some(
        pcm.chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect(),
    )
}

/// Computes the PCM hash of a WAV file.
///
/// Used for comparing recordings by their audio content only, ignoring
/// header differences.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// BLAKE3 hash of the PCM payload, or None if the container is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
