//! Loads the demo schemes into an empty store.

use schemes_core::scheme::demo_schemes;
use schemes_core::storage::{Result, SchemeRepository, StepRepository};

/// Inserts the demo schemes and their steps.
///
/// Skipped when the store already holds schemes, so restarting a seeded
/// service does not fail on the unique scheme names. Returns the number of
/// schemes inserted.
pub async fn seed_demo_data<R>(repo: &R) -> Result<usize>
where
    R: SchemeRepository + StepRepository + ?Sized,
{
    if !repo.find().await?.is_empty() {
        tracing::info!("Store already has schemes, skipping demo data");
        return Ok(0);
    }

    let seeds = demo_schemes();
    let count = seeds.len();

    for seed in seeds {
        let scheme = repo.add(&seed.scheme).await?;
        for step in &seed.steps {
            repo.add_step(scheme.id, step).await?;
        }
        tracing::debug!(
            scheme_id = scheme.id,
            steps = seed.steps.len(),
            "Seeded scheme"
        );
    }

    tracing::info!(schemes = count, "Seeded demo data");
    Ok(count)
}
