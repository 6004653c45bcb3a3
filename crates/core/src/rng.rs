//! RNG module - seeded piece selection
//!
//! Two selection policies are available:
//!
//! - [`Randomizer::Uniform`] (default): every draw is an independent uniform
//!   pick over the 7 kinds. Long droughts of a kind are possible.
//! - [`Randomizer::Bag`]: the 7 kinds are shuffled into a bag and dealt out
//!   before a new bag is shuffled, so every kind appears once per 7 draws.
//!
//! Both run on a small LCG so that a seed fully determines the sequence.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the multiply.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in [0, max).
    ///
    /// Uses the high bits via multiply-shift; the low bits of an LCG cycle
    /// with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Scramble a value into an unrelated seed (murmur3 32-bit finalizer).
///
/// Raw LCG outputs must not seed another LCG directly: the new generator
/// would walk the same state sequence as the one that produced the seed.
pub fn mix_seed(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x85eb_ca6b);
    x ^= x >> 13;
    x = x.wrapping_mul(0xc2b2_ae35);
    x ^= x >> 16;
    x
}

/// Piece selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Randomizer {
    /// Independent uniform draws
    #[default]
    Uniform,
    /// Shuffled 7-bag
    Bag,
}

impl std::str::FromStr for Randomizer {
    type Err = String;

    /// Parse from config text (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Ok(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Ok(Randomizer::Bag),
            other => Err(format!("unknown randomizer `{other}`")),
        }
    }
}

impl Randomizer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

/// Deterministic stream of piece kinds
#[derive(Debug, Clone)]
pub struct PieceSource {
    policy: Randomizer,
    rng: SimpleRng,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceSource {
    /// Create a new source with the given seed and policy
    pub fn new(seed: u32, policy: Randomizer) -> Self {
        Self {
            policy,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            // Start "empty" so the first bag draw shuffles.
            bag_index: PieceKind::ALL.len(),
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self.policy {
            Randomizer::Uniform => {
                let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[i]
            }
            Randomizer::Bag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }

    pub fn policy(&self) -> Randomizer {
        self.policy
    }
}
