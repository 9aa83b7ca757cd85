//! Target sequence generation and prefix matching.
//!
//! These are the pure pieces of the puzzle: drawing a target from the key set
//! and checking player input against it. [`crate::PuzzleController`] wires
//! them to state and collaborators.

use rand::Rng;

/// Returns the length a generated target will have.
///
/// The requested length is clamped to the number of available keys, since
/// keys are drawn without repetition.
pub fn effective_length(puzzle_length: usize, key_count: usize) -> usize {
    puzzle_length.min(key_count)
}

/// Draws a target sequence from `keys` without replacement.
///
/// Works over a copy of the key set: picks a uniform index, moves that key
/// into the result, and repeats until `min(puzzle_length, keys.len())` keys
/// have been taken. An empty key set yields an empty sequence.
///
/// # Arguments
/// * `keys` - The candidate key identifiers (assumed distinct)
/// * `puzzle_length` - The requested sequence length
/// * `rng` - Random source for the draw
pub fn generate_sequence<R: Rng>(
    keys: &[String],
    puzzle_length: usize,
    rng: &mut R,
) -> Vec<String> {
    let length = effective_length(puzzle_length, keys.len());
    let mut available: Vec<&String> = keys.iter().collect();
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        let index = rng.gen_range(0..available.len());
        sequence.push(available.remove(index).clone());
    }

    sequence
}

/// Checks that every pressed key matches the target at the same index.
///
/// Input longer than the target never matches.
pub fn is_prefix_match(input: &[String], target: &[String]) -> bool {
    input.len() <= target.len()
        && input
            .iter()
            .zip(target)
            .all(|(pressed, expected)| pressed == expected)
}
