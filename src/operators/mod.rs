pub mod tour;

pub mod evaluation;
pub mod initialisation;
pub mod mutation;
pub mod reproduction;
pub mod selection;
