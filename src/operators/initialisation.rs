use rand::{seq::SliceRandom, Rng};

use crate::{
    models::point::Point,
    operators::{evaluation::Evaluation, tour::Tour},
};

pub trait InitPop {
    fn apply<R: Rng + ?Sized>(&self, pop_size: usize, rng: &mut R) -> Vec<Tour>;
}

/// Returns a uniformly shuffled copy of the given locations.
pub fn shuffle<R: Rng + ?Sized>(locations: &[Point], rng: &mut R) -> Vec<Point> {
    let mut shuffled = locations.to_vec();
    shuffled.shuffle(rng);

    shuffled
}

/// Every tour visits the same fixed locations in an independently shuffled order.
pub struct ShuffledInitialisation<'a, E: Evaluation> {
    locations: &'a [Point],
    evaluation: &'a E,
}

impl<'a, E: Evaluation> ShuffledInitialisation<'a, E> {
    pub fn new(locations: &'a [Point], evaluation: &'a E) -> ShuffledInitialisation<'a, E> {
        ShuffledInitialisation {
            locations,
            evaluation,
        }
    }
}

impl<E: Evaluation> InitPop for ShuffledInitialisation<'_, E> {
    fn apply<R: Rng + ?Sized>(&self, pop_size: usize, rng: &mut R) -> Vec<Tour> {
        (0..pop_size)
            .map(|_| Tour::new(shuffle(self.locations, rng), self.evaluation))
            .collect()
    }
}
