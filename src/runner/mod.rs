use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    report::SampleReport,
    rng::{RngManager, SampleRng},
};

pub struct RunnerSettings {
    pub run_name: String,
    pub seed: u64,
    /// Names of the samples to run. Empty runs every registered sample.
    pub enabled: Vec<String>,
}

pub struct RunnerBuilder {
    settings: RunnerSettings,
    samples: Vec<Box<dyn Sample>>,
}

impl RunnerBuilder {
    pub fn new(settings: RunnerSettings) -> Self {
        Self {
            settings,
            samples: Vec::new(),
        }
    }

    pub fn with_sample(mut self, sample: impl Sample + 'static) -> Self {
        self.samples.push(Box::new(sample));
        self
    }

    pub fn push_sample(&mut self, sample: impl Sample + 'static) {
        self.samples.push(Box::new(sample));
    }

    pub fn build(self) -> Runner {
        Runner {
            rng: RngManager::new(self.settings.seed),
            samples: self.samples,
            settings: self.settings,
        }
    }
}

pub struct Runner {
    rng: RngManager,
    samples: Vec<Box<dyn Sample>>,
    settings: RunnerSettings,
}

impl Runner {
    pub fn run(&mut self) -> Result<Vec<SampleReport>> {
        self.run_with_hook(|_| {})
    }

    /// Run every enabled sample in registration order, calling `hook` after each
    pub fn run_with_hook<F>(&mut self, mut hook: F) -> Result<Vec<SampleReport>>
    where
        F: FnMut(&SampleReport),
    {
        info!(run = %self.settings.run_name, seed = self.settings.seed, "running samples");
        let mut reports = Vec::new();
        for (index, sample) in self.samples.iter_mut().enumerate() {
            let name = sample.name().to_string();
            if !self.settings.enabled.is_empty() && !self.settings.enabled.contains(&name) {
                debug!(sample = %name, "sample disabled, skipping");
                continue;
            }

            let mut rng_stream = self.rng.stream(&name);
            let ctx = SampleContext {
                index,
                run_name: &self.settings.run_name,
            };
            let report = sample
                .run(&ctx, &mut rng_stream)
                .with_context(|| format!("sample '{name}' failed"))?;
            debug!(sample = %name, sections = report.sections.len(), "sample finished");
            hook(&report);
            reports.push(report);
        }
        info!(completed = reports.len(), "all samples finished");
        Ok(reports)
    }

    pub fn sample_names(&self) -> Vec<&str> {
        self.samples.iter().map(|sample| sample.name()).collect()
    }
}

pub struct SampleContext<'a> {
    /// Position of the sample in registration order
    pub index: usize,
    pub run_name: &'a str,
}

pub trait Sample {
    fn name(&self) -> &str;
    fn run(&mut self, ctx: &SampleContext, rng: &mut SampleRng<'_>) -> Result<SampleReport>;
}
