pub mod generation;
pub mod geometry;
pub mod processing;
pub mod utils;
