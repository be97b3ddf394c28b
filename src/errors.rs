/// Everything that can abort a search run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Instance encoding error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("A tour needs at least 2 locations, found {found}")]
    TooFewPoints { found: usize },
    #[error("Cannot select {requested} tours from a population of {available}")]
    SelectionExceedsPopulation { requested: usize, available: usize },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
