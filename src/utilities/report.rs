use chrono::{DateTime, Utc};
use std::{
    fs::{self, File, OpenOptions},
    io::{prelude::*, BufWriter},
    path::{Path, PathBuf},
};

use crate::{
    operators::tour::Tour,
    utilities::metrics::{costs, mean, min},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationSummary {
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
}

impl GenerationSummary {
    pub fn of(generation: usize, population: &[Tour]) -> GenerationSummary {
        let costs = costs(population);

        GenerationSummary {
            generation,
            best: min(&costs),
            mean: mean(&costs),
        }
    }
}

/// Each run writes into its own folder, named by start time and seed.
pub fn run_folder(results_folder: &str, started: &DateTime<Utc>, seed: u64) -> PathBuf {
    let name = format!("{}_{}", started.format("%Y-%m-%dT%H-%M-%S%.3f"), seed);
    PathBuf::new().join(results_folder).join(name)
}

pub fn write_summary<W: Write>(out: &mut W, heading: &str, tour: &Tour) -> std::io::Result<()> {
    writeln!(out, "-----{}-----", heading)?;
    writeln!(out, "{}", tour)
}

/// Shows the heading and cost on stdout.
pub fn show_tour(heading: &str, tour: &Tour) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, heading, tour)
}

pub fn print_tour(folder: &Path, file_name: &str, tour: &Tour) -> std::io::Result<()> {
    let mut file = get_file(folder, file_name)?;

    writeln!(file, "{}", tour.cost())?;
    for location in tour.locations() {
        writeln!(file, "{}", location)?;
    }

    Ok(())
}

pub fn print_history(folder: &Path, history: &[GenerationSummary]) -> std::io::Result<()> {
    let mut file = get_file(folder, "costs.csv")?;

    writeln!(file, "generation,best,mean")?;
    for summary in history {
        writeln!(
            file,
            "{},{},{}",
            summary.generation, summary.best, summary.mean
        )?;
    }

    Ok(())
}

pub fn print_running_time(folder: &Path, millis: i64) -> std::io::Result<()> {
    let mut file = get_file(folder, "running_time.out")?;
    write!(file, "{}", millis)
}

fn get_file(folder: &Path, file: &str) -> std::io::Result<BufWriter<File>> {
    log::debug!("Writing {} to {:?}", file, folder);

    fs::create_dir_all(folder)?;
    let path = folder.join(file);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    Ok(BufWriter::new(file))
}
