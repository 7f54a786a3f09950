//! Headless sheet harness.
//!
//! Runs one preparation and sheet pass over a world export, then prints the
//! prepared documents once every resulting write has landed.
mod config;
mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::CliConfig;
use report::Report;
use rules_content::ContentFactory;
use runtime::{ActorRepository, InMemoryActorRepo, OracleManager, Runtime, RuntimeConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();
    let config = CliConfig::from_env();

    let factory = ContentFactory::new(&config.data_dir);
    let rules = factory.load_config()?;
    let armour = factory.load_armour()?;
    let skills = factory.load_skills()?;
    let world = factory
        .load_world(&config.world)
        .with_context(|| format!("loading world {}", config.world))?;
    tracing::info!(
        data_dir = %factory.data_dir().display(),
        world = %config.world,
        actors = world.actors.len(),
        hulls = armour.len(),
        skills = skills.len(),
        "content loaded"
    );

    let repository = Arc::new(InMemoryActorRepo::with_actors(world.actors));
    let runtime = Runtime::builder()
        .config(RuntimeConfig { rules })
        .oracles(OracleManager::new(Arc::new(armour), Arc::new(skills)))
        .repository(Arc::clone(&repository) as Arc<dyn ActorRepository>)
        .build()
        .await?;

    let actors = report::sheet_pass(runtime.session(), repository.as_ref())?;
    let writes = runtime.shutdown().await?;

    let report = Report { actors, writes };
    println!("{}", report::render(&report, config.output)?);
    Ok(())
}

/// Logs go to stderr so the report on stdout stays machine-readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
