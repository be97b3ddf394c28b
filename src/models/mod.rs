pub mod instance;
pub mod point;
