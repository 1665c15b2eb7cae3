//! Random selection utilities backed by an injected `Rng` source, so that
//! unit tests can seed the draws while production uses the thread RNG.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform draw from a candidate set. Returns `None` on an empty set.
pub fn pick_one<R: Rng + ?Sized, T>(rng: &mut R, mut candidates: Vec<T>) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(idx))
}

/// Shuffles the candidates and keeps at most `count` of them.
pub fn pick_n<R: Rng + ?Sized, T>(rng: &mut R, mut candidates: Vec<T>, count: usize) -> Vec<T> {
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
