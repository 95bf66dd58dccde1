//! The "minimal standard" Lehmer generator, `x = x * 48271 mod (2^31 - 1)`.
//!
//! Plugged into `rand` so inputs can be drawn with the usual distributions while staying
//! reproducible from a small integer seed.

use rand::{Error, RngCore, SeedableRng};

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 48_271;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinStdRand {
    state: u32,
}

impl MinStdRand {
    /// A seed congruent to 0 would lock the generator at 0 and is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let state = match seed % MODULUS {
            0 => 1,
            s => s as u32,
        };

        Self { state }
    }

    /// Advances the generator and returns the new state, in `1..2^31 - 1`.
    pub fn next_state(&mut self) -> u32 {
        self.state = ((self.state as u64 * MULTIPLIER) % MODULUS) as u32;
        self.state
    }
}

impl RngCore for MinStdRand {
    fn next_u32(&mut self) -> u32 {
        // A state only carries 31 bits, take the upper 16 of two consecutive states.
        let hi = self.next_state() >> 15;
        let lo = self.next_state() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinStdRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed) as u64)
    }

    fn seed_from_u64(state: u64) -> Self {
        // Use the seed as is, so seed 42 means the same thing as everywhere else.
        Self::new(state)
    }
}
