//! Seed-locked pseudo-random source for texture generation.
//!
//! Every mockup owns one generator seeded from its catalogue entry, so a
//! render is a pure function of `(seed, dimensions, zones)`:
//! - no global RNG state
//! - no platform entropy
//! - identical sequences on every run

/// Deterministic PRNG (xorshift64*).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Build a generator from a 64-bit seed.
    ///
    /// `seed = 0` is remapped to a non-zero internal state so the generator
    /// cannot lock into an all-zero sequence.
    pub const fn from_seed(seed: u64) -> Self {
        let mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let state = if mixed == 0 {
            0xA076_1D64_78BD_642F
        } else {
            mixed
        };
        Self { state }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform value in `[0, max_inclusive]` using rejection sampling.
    pub fn next_bounded(&mut self, max_inclusive: u64) -> u64 {
        if max_inclusive == 0 {
            return 0;
        }
        if max_inclusive == u64::MAX {
            return self.next_u64();
        }

        let bound = max_inclusive + 1;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let sample = self.next_u64();
            if sample < zone {
                return sample % bound;
            }
        }
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    /// Uniform `f64` in `[low, high)`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Uniform integer in `[low, high]`. Collapses to `low` when the range is empty.
    pub fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (i64::from(high) - i64::from(low)) as u64;
        (i64::from(low) + self.next_bounded(span) as i64) as i32
    }

    /// `true` with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    pub fn pick<T: Copy, const N: usize>(&mut self, items: [T; N]) -> T {
        items[self.next_bounded(N.saturating_sub(1) as u64) as usize]
    }

    /// [`pick`](Self::pick) over a slice; `None` only when `items` is empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        let last = items.len().checked_sub(1)?;
        Some(items[self.next_bounded(last as u64) as usize])
    }
}
