use tracing::info;

use crate::config::RunSettings;
use crate::error::Result;
use crate::output::save_ranking;
use crate::scoring::{aggregate, dedupe, score_rows, DedupePolicy, RegionRanking, ScoringSettings};
use crate::standings::{load_standings, StandingRow};
use crate::template::{load_template, Template};

/// Result of one ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    pub ranking: Vec<RegionRanking>,
    /// Rows inside their event's year window
    pub scored_rows: usize,
    /// Rows outside the window, kept but not counted
    pub excluded_rows: usize,
    /// Rows dropped by region deduplication
    pub duplicates_removed: usize,
}

/// Score, optionally dedupe, and aggregate already-loaded standings.
///
/// Fails fast: the first failing stage aborts the run.
pub fn rank_regions(
    rows: Vec<StandingRow>,
    template: &Template,
    scoring: &ScoringSettings,
    dedupe_policy: Option<DedupePolicy>,
) -> Result<RankOutcome> {
    let scored = score_rows(rows, template, scoring)?;
    let excluded_rows = scored.iter().filter(|r| r.position_index.is_none()).count();

    let before = scored.len();
    let scored = match dedupe_policy {
        Some(policy) => dedupe(scored, policy),
        None => scored,
    };
    let duplicates_removed = before - scored.len();
    if dedupe_policy.is_some() {
        info!("Unique regions: {} duplicate rows removed", duplicates_removed);
    }

    let ranking = aggregate(&scored)?;
    info!("Ranked {} regions", ranking.len());

    Ok(RankOutcome {
        ranking,
        scored_rows: before - excluded_rows,
        excluded_rows,
        duplicates_removed,
    })
}

/// Full run: load standings and template from disk, rank, save the ranking.
///
/// The template is loaded before the standings so template problems surface
/// even when the standings file is also missing.
pub fn run(settings: &RunSettings) -> Result<RankOutcome> {
    let template = load_template(&settings.template)?;
    let rows = load_standings(&settings.standings)?;

    let outcome = rank_regions(rows, &template, &settings.scoring, settings.dedupe_policy())?;
    save_ranking(&settings.output, &outcome.ranking)?;

    Ok(outcome)
}
