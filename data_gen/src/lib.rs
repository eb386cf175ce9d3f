use std::hash::Hash;

use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn rand_between(l: u64, h: u64) -> u64 {
    assert!(l <= h, "l should be <= h");
    rand::thread_rng().gen_range(l..=h)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Smallest stride `>= size / n` (and at least 1) that is coprime to `size`.
pub fn coprime_stride(size: u64, n: u64) -> u64 {
    assert!(size > 0, "domain should not be empty");
    let mut stride = (size / n.max(1)).max(1);
    while gcd(stride, size) != 1 {
        stride += 1;
    }
    stride
}

/// `n` distinct values spread over `[0, size - 1]`: `k * stride mod size` for a stride coprime to `size`.
///
/// If `n >= size`, the whole domain is visited.
pub fn stride_sample(size: u64, n: u64) -> impl Iterator<Item = u64> {
    let stride = coprime_stride(size, n);
    (0..n.min(size)).map(move |k| ((k as u128 * stride as u128) % size as u128) as u64)
}

/// `n` random values in `[0, max]`, reproducible for a given `seed`.
pub fn random_inputs(seed: u64, max: u64, n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..=max)).collect()
}

/// One random key per round, reproducible for a given `seed`.
pub fn round_keys(seed: u64, rounds: u32) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rounds).map(|_| rng.gen()).collect()
}

/// Round function mixing the value with the key of its round.
pub fn keyed_round(keys: Vec<u64>) -> impl Fn(u32, &u64) -> u64 + Clone + Send + Sync {
    move |round: u32, value: &u64| {
        let key = keys[round as usize % keys.len()];
        value.wrapping_add(key).rotate_left(13).wrapping_mul(0x5bd1_e995) ^ key
    }
}

pub fn all_distinct<T: Hash + Eq>(items: impl IntoIterator<Item = T>) -> bool {
    items.into_iter().all_unique()
}
