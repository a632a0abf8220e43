pub mod attributes;
pub mod config;
pub mod flatten;
pub mod pipeline;
