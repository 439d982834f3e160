//! Deterministic random number generation.
//!
//! Every random decision the engine makes (deck shuffles, AI coin flips,
//! AI card picks) draws from an explicit handle rather than an ambient
//! global generator, so whole matches replay identically from a seed.
//!
//! ## Key Types
//!
//! - `RandomSource`: the injectable seam. AI strategies take
//!   `&mut dyn RandomSource`, so tests can script outcomes.
//! - `GameRng`: ChaCha8-backed implementation with forks and named
//!   context streams.
//!
//! ```
//! use gwent_engine::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.index(100), b.index(100));
//! assert_eq!(a.chance(0.5), b.chance(0.5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use crate::cards::Card;

/// Source of randomness for shuffles and AI decisions.
///
/// Object safe: strategies receive `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Return true with the given probability (clamped to `0.0..=1.0`;
    /// NaN and infinities never fire).
    fn chance(&mut self, probability: f64) -> bool;

    /// Return a uniformly chosen index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, and
    /// advances this RNG's fork counter so the next fork differs too.
    /// `decide_detached` hands its worker thread a fork.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Keeps deck shuffling separate from AI decisions, so adding an AI
    /// coin flip never changes which cards get dealt.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }
}

impl RandomSource for GameRng {
    fn chance(&mut self, probability: f64) -> bool {
        if !probability.is_finite() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len.max(1))
    }
}

/// Shuffle a deck with any random source (Fisher-Yates).
///
/// This is the seeded shuffling utility new matches use; the same source
/// state always yields the same order.
pub fn shuffle(cards: impl IntoIterator<Item = Card>, rng: &mut dyn RandomSource) -> Vec<Card> {
    let mut cards: Vec<Card> = cards.into_iter().collect();
    for i in (1..cards.len()).rev() {
        let j = rng.index(i + 1);
        cards.swap(i, j);
    }
    cards
}
