//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in signal generation flows through this module so that
//! the same seed always produces the same capture fixture. Component seeds
//! are derived with BLAKE3 so the tone and noise streams stay independent.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
///
/// # Arguments
/// * `seed` - A 32-bit seed value
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific component from the base seed using a string key.
///
/// Uses BLAKE3 to hash the base seed concatenated with the component key,
/// producing an independent seed for each component.
///
/// # Arguments
/// * `base_seed` - The signal's base seed (u32)
/// * `key` - A string identifier for the component (e.g., "noise")
///
/// # Returns
/// A derived u32 seed for the component
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    // Concatenate base_seed (as little-endian bytes) and key (as UTF-8)
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    // Hash with BLAKE3
    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a specific component.
///
/// Convenience function that derives the component seed and creates the RNG.
///
/// # Arguments
/// * `base_seed` - The signal's base seed (u32)
/// * `key` - A string identifier for the component
///
/// # Returns
/// A PCG32 generator initialized with the derived component seed
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    let component_seed = derive_component_seed(base_seed, key);
    create_rng(component_seed)
}
