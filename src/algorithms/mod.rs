pub mod elitist;
