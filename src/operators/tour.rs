use std::fmt::Display;

use crate::{models::point::Point, operators::evaluation::Evaluation};

/// An ordered visit of every location in the instance together with its cost.
///
/// The sequence can only be replaced wholesale through [`Tour::new`], so the
/// cached cost always belongs to the current ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    locations: Vec<Point>,
    cost: f64,
}

impl Tour {
    pub fn new<E: Evaluation + ?Sized>(locations: Vec<Point>, evaluation: &E) -> Tour {
        let cost = evaluation.evaluate(&locations);
        Tour { locations, cost }
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn locations(&self) -> &[Point] {
        &self.locations
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cost)
    }
}
