use std::rc::Rc;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::{
    config::RepositoryConfig,
    report::SampleReport,
    repository::{Entity, EntityId, InMemoryRepository, Repository},
    rng::SampleRng,
    runner::{Sample, SampleContext},
};

/// Fills an in-memory repository with random entities and queries it
pub struct RepositorySample {
    config: RepositoryConfig,
}

impl RepositorySample {
    pub const NAME: &'static str = "repository";

    /// `config` is normally checked by `SamplesConfig::validate`; `run` still
    /// fails on a non-positive `id_ceiling`.
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    fn populate(&self, rng: &mut SampleRng<'_>) -> InMemoryRepository<Entity> {
        let mut repository: InMemoryRepository<Entity> = InMemoryRepository::new();
        for n in 0..self.config.entity_count {
            let id: EntityId = rng.gen_range(1..=self.config.id_ceiling);
            repository.add(Rc::new(Entity::new(id, format!("entity-{n}"))));
        }
        repository
    }
}

impl Default for RepositorySample {
    fn default() -> Self {
        Self::new(RepositoryConfig::default())
    }
}

fn describe(entities: &[Rc<Entity>]) -> String {
    if entities.is_empty() {
        return "(none)".to_string();
    }
    entities
        .iter()
        .map(|entity| format!("{}:{}", entity.id, entity.name))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Sample for RepositorySample {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&mut self, _ctx: &SampleContext, rng: &mut SampleRng<'_>) -> Result<SampleReport> {
        anyhow::ensure!(
            self.config.id_ceiling > 0,
            "id_ceiling must be greater than zero, got {}",
            self.config.id_ceiling
        );
        let mut report = SampleReport::new("RepositorySampleExecute");
        let mut repository = self.populate(rng);
        debug!(entities = repository.len(), "repository populated");

        let all = repository.get_all();
        report
            .section("Get all")
            .line(format!("Insertion order: {}", describe(&all)));

        report.section("Get by id");
        let first = all.first().cloned();
        if let Some(first) = &first {
            let found = repository.get_by_id(first.id);
            report.line(format!(
                "get_by_id({}) = {}",
                first.id,
                found.map_or_else(|| "not found".to_string(), |e| e.name.clone())
            ));
        }
        // generated ids start at 1
        let missing: EntityId = 0;
        let absent = repository.get_by_id(missing);
        report.line(format!(
            "get_by_id({missing}) = {}",
            absent.map_or_else(|| "not found".to_string(), |e| e.name.clone())
        ));

        let threshold = self.config.find_threshold;
        let found = repository.find(&|entity| entity.id > threshold);
        report
            .section("Find")
            .line(format!("id > {threshold}, ordered by id: {}", describe(&found)));

        report.section("Remove");
        if let Some(first) = first {
            let removed = repository.remove(&first);
            let removed_again = repository.remove(&first);
            report.line(format!(
                "remove({}:{}) removed = {removed}, second remove removed = {removed_again}",
                first.id, first.name
            ));
            report.line(format!("Remaining: {}", describe(&repository.get_all())));
        }

        Ok(report)
    }
}
