pub mod config;
pub mod error;
pub mod overlay;
pub mod report;
pub mod repository;
pub mod rng;
pub mod runner;
pub mod samples;

pub use config::SamplesConfig;
pub use report::SampleReport;
pub use runner::{Runner, RunnerBuilder, RunnerSettings, Sample};
