mod repository;
mod structures;

pub use repository::RepositorySample;
pub use structures::StructureSample;

/// Names accepted in `SamplesConfig::samples` and `--sample`
pub const SAMPLE_NAMES: [&str; 2] = [StructureSample::NAME, RepositorySample::NAME];
