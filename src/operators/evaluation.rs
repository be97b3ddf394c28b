use std::{fmt::Display, str::FromStr};

use crate::{
    errors::Error,
    models::point::{distance, Point},
};

pub trait Evaluation {
    fn evaluate(&self, locations: &[Point]) -> f64;
}

fn consecutive_edges(locations: &[Point]) -> f64 {
    locations
        .windows(2)
        .map(|edge| distance(&edge[0], &edge[1]))
        .sum()
}

/**
    Sums every consecutive edge, then counts the edge between the last two
    locations a second time in place of the edge back to the start.
    Matches the scoring of the program these runs are compared against.
**/
#[derive(Clone, Copy, Debug)]
pub struct RepeatedLastEdge;

impl Evaluation for RepeatedLastEdge {
    fn evaluate(&self, locations: &[Point]) -> f64 {
        let len = locations.len();
        if len < 2 {
            return 0.0;
        }

        let mut total = consecutive_edges(locations);
        total += distance(&locations[len - 2], &locations[len - 1]);

        total
    }
}

/// True round trip length, closing from the last location back to the first.
#[derive(Clone, Copy, Debug)]
pub struct ClosedTour;

impl Evaluation for ClosedTour {
    fn evaluate(&self, locations: &[Point]) -> f64 {
        let len = locations.len();
        if len < 2 {
            return 0.0;
        }

        consecutive_edges(locations) + distance(&locations[len - 1], &locations[0])
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostModel {
    RepeatedLastEdge,
    ClosedTour,
}

impl Evaluation for CostModel {
    fn evaluate(&self, locations: &[Point]) -> f64 {
        match self {
            CostModel::RepeatedLastEdge => RepeatedLastEdge.evaluate(locations),
            CostModel::ClosedTour => ClosedTour.evaluate(locations),
        }
    }
}

impl FromStr for CostModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repeated_last_edge" => Ok(CostModel::RepeatedLastEdge),
            "closed_tour" => Ok(CostModel::ClosedTour),
            _ => Err(Error::InvalidParameter(format!("unknown cost model '{}'", s))),
        }
    }
}

impl Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::RepeatedLastEdge => write!(f, "repeated_last_edge"),
            CostModel::ClosedTour => write!(f, "closed_tour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(3, 0), Point::new(3, 4)]
    }

    fn rectangle() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(0, 1),
        ]
    }

    #[test]
    fn test_repeated_last_edge() {
        // 3 + 4, then the 4 again
        assert_eq!(RepeatedLastEdge.evaluate(&triangle()), 11.0);

        // 2 + 1 + 2, then the 2 again
        assert_eq!(RepeatedLastEdge.evaluate(&rectangle()), 7.0);

        let two = vec![Point::new(0, 0), Point::new(0, 5)];
        assert_eq!(RepeatedLastEdge.evaluate(&two), 10.0);
    }

    #[test]
    fn test_closed_tour() {
        assert_eq!(ClosedTour.evaluate(&triangle()), 12.0);
        assert_eq!(ClosedTour.evaluate(&rectangle()), 6.0);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(RepeatedLastEdge.evaluate(&[]), 0.0);
        assert_eq!(ClosedTour.evaluate(&[Point::new(4, 4)]), 0.0);
    }

    #[test]
    fn test_cost_model() {
        let model: CostModel = "repeated_last_edge".parse().unwrap();
        assert_eq!(model, CostModel::RepeatedLastEdge);
        assert_eq!(model.evaluate(&triangle()), 11.0);

        let model: CostModel = "closed_tour".parse().unwrap();
        assert_eq!(model, CostModel::ClosedTour);
        assert_eq!(model.evaluate(&triangle()), 12.0);
        assert_eq!(model.to_string(), "closed_tour");

        assert!(matches!(
            "shortest".parse::<CostModel>(),
            Err(Error::InvalidParameter(_))
        ));
    }
}
