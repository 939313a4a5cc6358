//! Random draws, scarcity values and seed derivation used by the sampler.
//!
//! Everything here works on an injected [`RngCore`]; the crate never touches a
//! global random stream.
use rand::RngCore;

pub mod scarcity;
pub mod seed;

pub use scarcity::Scarcity;
pub use seed::{seed_for_session, session_rng};

/// Generate a random float in the range [0, 1).
///
/// Uses the top 53 bits of a `u64` draw, so every representable output is an
/// exact multiple of `2^-53` and `1.0` is never returned.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Draw an index uniformly from `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn pick_index(len: usize, rng: &mut dyn RngCore) -> usize {
    debug_assert!(len > 0, "pick_index needs a non-empty range");
    ((rand01(rng) * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    pub(crate) struct FixedRng {
        pub(crate) value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            (self.value >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert_eq!(result, 1.0 - f64::EPSILON / 2.0);
    }

    #[test]
    fn rand01_midpoint() {
        let mut rng = FixedRng { value: 1u64 << 63 };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn pick_index_covers_range_edges() {
        let mut low = FixedRng { value: 0 };
        assert_eq!(pick_index(5, &mut low), 0);
        let mut high = FixedRng { value: u64::MAX };
        assert_eq!(pick_index(5, &mut high), 4);
        let mut single = FixedRng { value: u64::MAX };
        assert_eq!(pick_index(1, &mut single), 0);
    }

    #[test]
    fn pick_index_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut hist = [0usize; 5];
        let draws = 50_000;
        for _ in 0..draws {
            hist[pick_index(5, &mut rng)] += 1;
        }
        for (i, h) in hist.iter().enumerate() {
            let share = *h as f64 / draws as f64;
            assert!((share - 0.2).abs() < 0.02, "bucket {i} has share {share}");
        }
    }
}
