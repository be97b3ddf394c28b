use serde::Deserialize;

use crate::{
    algorithms::elitist::Parameters,
    errors::Error,
    operators::evaluation::CostModel,
};

/// Run settings, read from an optional `Config` file and `APP_*` environment variables.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub pop_size: usize,
    pub num_locations: usize,
    pub x_max: i32,
    pub y_max: i32,
    pub num_elites: usize,
    pub children_per_elite: usize,
    pub mutation_rate: f64,
    pub num_generations: usize,
    pub progress_interval: usize,
    pub cost_model: String,
    pub results_folder: String,
    pub seed: Option<u64>,
    pub instance_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            pop_size: 200,
            num_locations: 10,
            x_max: 500,
            y_max: 500,
            num_elites: 20,
            children_per_elite: 10,
            mutation_rate: 0.1,
            num_generations: 1000,
            progress_interval: 100,
            cost_model: CostModel::RepeatedLastEdge.to_string(),
            results_folder: "results".to_string(),
            seed: None,
            instance_file: None,
        }
    }
}

impl Settings {
    pub fn load(file_name: &str) -> Result<Settings, Error> {
        let mut settings = config::Config::default();
        settings
            .merge(config::File::with_name(file_name).required(false))?
            .merge(config::Environment::with_prefix("APP"))?;

        let settings: Settings = settings.try_into()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.parameters().validate()?;
        self.cost_model()?;

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidParameter(format!(
                "mutation rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }

        if self.x_max < 0 || self.y_max < 0 {
            return Err(Error::InvalidParameter(format!(
                "coordinate bounds ({}, {}) must not be negative",
                self.x_max, self.y_max
            )));
        }

        Ok(())
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            pop_size: self.pop_size,
            num_elites: self.num_elites,
            children_per_elite: self.children_per_elite,
            num_generations: self.num_generations,
        }
    }

    pub fn cost_model(&self) -> Result<CostModel, Error> {
        self.cost_model.parse()
    }
}
