//! Random sources for the daily event pipeline.
//!
//! The engine never owns a global generator: a [`RandomSource`] is passed in
//! explicitly, seeded once at game start and never re-seeded.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed, they must
//! produce the same sequence of numbers. A game is a pure function of its
//! initial state, its decisions and this sequence.

/// Sequential source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate the next raw u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[0, n)`. Returns 0 when `n == 0`.
    fn next_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.next_u32() % n
    }

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_below(2) == 1
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant, which produces 32-bit output from 64-bit
/// state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a game seed.
    ///
    /// The seed is avalanched first so that adjacent seeds (0, 1, 2, ...)
    /// yield unrelated sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64-style finalizer used to spread a user-supplied seed.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Random source that replays a fixed list of values, cycling when exhausted.
///
/// Intended for tests and replays where the exact draw sequence matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRng {
    /// Replays `values` in order. An empty list behaves like [`Self::constant`]`(0)`.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Returns `value` for every draw.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
