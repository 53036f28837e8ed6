pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod units;

pub use generator::{GenerationReport, Generator, Mode};
