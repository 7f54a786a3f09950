//! One preparation and sheet pass over every stored actor.
use anyhow::Result;
use rules_core::Actor;
use runtime::{ActorRepository, ItemSheet, Session, WriteSummary};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub actors: Vec<ActorReport>,
    pub writes: WriteSummary,
}

/// A prepared actor and the sheets of everything it carries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorReport {
    pub actor: Actor,
    /// Hardware items whose sizing produced writes.
    pub resized: usize,
    pub items: Vec<ItemSheet>,
}

/// Prepares every actor in the repository and builds its item sheets.
///
/// Vessels are resized first, so their item sheets show the sized values and
/// submit nothing further.
pub fn sheet_pass(session: &Session, repository: &dyn ActorRepository) -> Result<Vec<ActorReport>> {
    let mut reports = Vec::new();
    for id in repository.list_ids()? {
        let Some(mut actor) = repository.load(&id)? else {
            continue;
        };
        session.prepare_actor(&mut actor)?;

        let resized = match actor.data.vessel() {
            Some(_) => session.size_hardware(&mut actor)?,
            None => 0,
        };
        let items = actor
            .items
            .iter()
            .map(|item| session.item_sheet(Some(&actor), item))
            .collect::<runtime::Result<Vec<_>>>()?;

        info!(
            target: "sheet_cli",
            actor = %actor.id,
            kind = actor.kind(),
            items = items.len(),
            resized,
            "sheet pass"
        );
        reports.push(ActorReport {
            actor,
            resized,
            items,
        });
    }
    Ok(reports)
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Ron => ron::ser::to_string_pretty(report, ron::ser::PrettyConfig::default())?,
    };
    Ok(rendered)
}
