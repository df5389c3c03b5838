//! Dice for generator spawns.
//!
//! A roll is a pure function of its seed, so a session replays identically
//! from its seed and control input.

/// Stateless dice: the same seed always rolls the same value.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// `true` with roughly `percent` in 100 odds.
    fn chance(&self, seed: u64, percent: u32) -> bool {
        self.next_u32(seed) % 100 < percent
    }

    /// Index in `0..count`, or 0 when `count` is 0.
    fn pick(&self, seed: u64, count: usize) -> usize {
        match count {
            0 => 0,
            count => self.next_u32(seed) as usize % count,
        }
    }
}

/// One step of a 32-bit PCG generator (XSH-RR output) seeded per roll.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let shifted = (((state >> 18) ^ state) >> 27) as u32;
        shifted.rotate_right((state >> 59) as u32)
    }
}
