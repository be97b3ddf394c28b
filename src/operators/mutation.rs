use rand::Rng;

use crate::models::point::Point;

pub trait Mutation {
    /// Mutates the locations in place and returns the number of swaps attempted.
    fn mutate<R: Rng + ?Sized>(&self, locations: &mut [Point], rng: &mut R) -> usize;
}

#[derive(Clone)]
pub struct SwapMutation {
    mr: f64, // Mutation rate
}

impl SwapMutation {
    pub fn new(mr: f64) -> SwapMutation {
        SwapMutation { mr }
    }
}

/**
    Each position independently, with probability `mr`, swaps with a uniformly
    random position. Drawing its own position leaves the sequence unchanged and
    is not retried. Later positions see the swaps made before them.
**/
impl Mutation for SwapMutation {
    fn mutate<R: Rng + ?Sized>(&self, locations: &mut [Point], rng: &mut R) -> usize {
        let mut attempts = 0;

        for i in 0..locations.len() {
            if rng.gen::<f64>() >= self.mr {
                continue;
            }

            let swap = rng.gen_range(0, locations.len());
            attempts += 1;

            if swap != i {
                locations.swap(i, swap);
            }
        }

        attempts
    }
}
