mod algorithms;
mod errors;
mod models;
mod operators;
mod settings;
mod utilities;

use algorithms::elitist;
use chrono::Utc;
use env_logger::Env;
use errors::Error;
use models::{instance, point::Point};
use operators::{
    initialisation::ShuffledInitialisation, mutation::SwapMutation, selection::best,
    tour::Tour,
};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use settings::Settings;
use std::{path::Path, process};
use utilities::report::{self, GenerationSummary};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let settings = Settings::load("Config")?;
    settings.validate()?;

    let cost_model = settings.cost_model()?;
    let params = settings.parameters();

    let seed = settings.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!("Seeding search with {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let locations = load_locations(&settings, &mut rng)?;
    instance::validate(&locations)?;

    log::info!(
        "Searching {} locations with {} cost, {} generations",
        locations.len(),
        cost_model,
        params.num_generations
    );

    let started = Utc::now();
    let folder = report::run_folder(&settings.results_folder, &started, seed);

    let init_pop = ShuffledInitialisation::new(&locations, &cost_model);
    let mutation = SwapMutation::new(settings.mutation_rate);

    let mut history = Vec::with_capacity(params.num_generations + 1);
    let mut baseline: Option<Tour> = None;

    let result = elitist::run(
        &init_pop,
        &cost_model,
        &mutation,
        &params,
        &mut rng,
        |generation, pop| {
            let summary = GenerationSummary::of(generation, pop);

            if generation == 0 {
                baseline = best(pop).cloned();

                if let Some(tour) = &baseline {
                    if let Err(e) = report::show_tour("Before Training", tour) {
                        log::warn!("Could not show baseline: {}", e);
                    }
                }
            } else if settings.progress_interval > 0 && generation % settings.progress_interval == 0
            {
                log::info!(
                    "{} / {} best {} mean {}",
                    generation,
                    params.num_generations,
                    summary.best,
                    summary.mean
                );
            }

            history.push(summary);
        },
    )?;

    let millis = (Utc::now() - started).num_milliseconds();

    if let Some(tour) = &baseline {
        report::print_tour(&folder, "before.out", tour)?;
    }
    report::show_tour("After Training", &result)?;
    report::print_tour(&folder, "after.out", &result)?;
    report::print_history(&folder, &history)?;
    report::print_running_time(&folder, millis)?;

    log::info!("Results written to {:?}", folder);

    Ok(())
}

/// Loads the instance file when it exists, otherwise samples a new instance and saves it there.
fn load_locations<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Vec<Point>, Error> {
    let sample = |rng: &mut R| {
        instance::random_points(settings.num_locations, settings.x_max, settings.y_max, rng)
    };

    match &settings.instance_file {
        Some(path) if Path::new(path).is_file() => {
            log::info!("Loading instance from {}", path);
            instance::load(Path::new(path))
        }
        Some(path) => {
            let locations = sample(rng);
            log::info!("Saving new instance to {}", path);
            instance::save(Path::new(path), &locations)?;

            Ok(locations)
        }
        None => Ok(sample(rng)),
    }
}
