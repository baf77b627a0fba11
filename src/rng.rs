//! # Random Number Generator
//!
//! A small xorshift32 PRNG. Integer-only, deterministic, no heap — the same
//! class of generator little embedded games reach for. The game reseeds it
//! from an entropy counter that advances on player moves, so the wall
//! sequence depends on how the player actually plays.

/// xorshift32 state. A zero state would be a fixed point, so seeding with 0
/// substitutes a nonzero constant.
#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Restart the sequence from a fresh seed.
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish draw in `0..bound`. `bound` must be nonzero.
    pub fn range(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    /// True with roughly `percent` in 100 odds.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.range(100) < percent
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn reseed_restarts_the_sequence() {
        let mut rng = Rng::new(7);
        let first = rng.next_u32();
        rng.next_u32();
        rng.reseed(7);
        assert_eq!(rng.next_u32(), first);
    }

    #[test]
    fn zero_seed_is_not_a_fixed_point() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            assert!(rng.range(10) < 10);
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = Rng::new(5);
        for _ in 0..100 {
            assert!(!rng.chance(0));
            assert!(rng.chance(100));
        }
    }
}
