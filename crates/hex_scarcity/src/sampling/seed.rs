//! Seed derivation for independent per-caller random streams.
//!
//! Concurrent callers each derive their own seed from a shared base seed and a
//! session id, so no two sessions draw from the same stream.
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Derive a seed for `session_id` from `base_seed`.
pub fn seed_for_session(base_seed: u64, session_id: u64) -> u64 {
    let mixed = base_seed ^ session_id.wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

/// A [`StdRng`] seeded with [`seed_for_session`].
pub fn session_rng(base_seed: u64, session_id: u64) -> StdRng {
    StdRng::seed_from_u64(seed_for_session(base_seed, session_id))
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
