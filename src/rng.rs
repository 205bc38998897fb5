//! Sources of randomness for carving

use crate::grid::Direction;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Decides the order in which carving tries the four directions out of a cell
pub trait ShuffleSource {
    /// Reorder `directions` in place
    fn shuffle(&mut self, directions: &mut [Direction; 4]);
}

/// Uniform shuffles backed by [`StdRng`]
pub struct RandomShuffle {
    rng: StdRng,
}

impl RandomShuffle {
    /// Seeded from the operating system; every maze is different
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// The same seed always produces the same sequence of shuffles
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffle {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ShuffleSource for RandomShuffle {
    fn shuffle(&mut self, directions: &mut [Direction; 4]) {
        SliceRandom::shuffle(&mut directions[..], &mut self.rng);
    }
}

/// Leaves the directions in the order they are given
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedOrder;

impl ShuffleSource for FixedOrder {
    fn shuffle(&mut self, _directions: &mut [Direction; 4]) {}
}

impl<S: ShuffleSource + ?Sized> ShuffleSource for &mut S {
    fn shuffle(&mut self, directions: &mut [Direction; 4]) {
        (**self).shuffle(directions)
    }
}
