//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every target sequence is drawn from a generator created here. Each puzzle
//! round gets its own seed derived from the controller's base seed, so a
//! given base seed replays the same targets in the same order.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the seed for a puzzle round from the base seed.
///
/// Hashes the little-endian base seed followed by the little-endian round
/// number with BLAKE3 and keeps the first four bytes.
///
/// # Arguments
/// * `base_seed` - The controller's base seed
/// * `round` - The 1-indexed round number
pub fn derive_round_seed(base_seed: u32, round: u64) -> u32 {
    let mut input = Vec::with_capacity(12);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&round.to_le_bytes());

    let hash = blake3::hash(&input);

    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates the RNG for a specific puzzle round.
pub fn create_round_rng(base_seed: u32, round: u64) -> Pcg32 {
    create_rng(derive_round_seed(base_seed, round))
}

/// Picks a fresh base seed from the thread-local entropy source.
pub fn random_base_seed() -> u32 {
    rand::random()
}
