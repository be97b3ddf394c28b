use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{errors::Error, models::point::Point};

/// Samples `num_locations` points with x in [-x_max, x_max] and y in [-y_max, y_max].
pub fn random_points<R: Rng + ?Sized>(
    num_locations: usize,
    x_max: i32,
    y_max: i32,
    rng: &mut R,
) -> Vec<Point> {
    let x_distr = Uniform::new_inclusive(-x_max, x_max);
    let y_distr = Uniform::new_inclusive(-y_max, y_max);

    (0..num_locations)
        .map(|_| Point::new(x_distr.sample(rng), y_distr.sample(rng)))
        .collect()
}

pub fn validate(locations: &[Point]) -> Result<(), Error> {
    if locations.len() < 2 {
        return Err(Error::TooFewPoints {
            found: locations.len(),
        });
    }

    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<Point>, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let locations: Vec<Point> = bincode::deserialize_from(reader)?;

    Ok(locations)
}

pub fn save(path: &Path, locations: &[Point]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, &locations)?;

    Ok(())
}
