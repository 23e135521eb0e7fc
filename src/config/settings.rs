use std::path::PathBuf;

use super::schema::RunConfig;
use super::validation::validate_run_config;
use crate::error::{RankError, Result};
use crate::scoring::{DedupePolicy, ScoringSettings, YearWindow};

pub const DEFAULT_FIRST_PLACE_POINTS: i64 = 10;
/// Cap on first-place points, far below where per-region sums could overflow
pub const MAX_FIRST_PLACE_POINTS: i64 = 1_000_000;
pub const DEFAULT_STANDINGS_PATH: &str = "data_ranking.json";
pub const DEFAULT_TEMPLATE_PATH: &str = "ranking_template.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "region_ranking.json";

/// Validated settings for one run, with defaults filled in
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub scoring: ScoringSettings,
    pub unique: bool,
    pub dedupe: DedupePolicy,
    pub standings: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl RunSettings {
    /// Validate `config` and resolve it against `current_year`.
    pub fn from_config(config: RunConfig, current_year: i32) -> Result<Self> {
        validate_run_config(&config, current_year).map_err(RankError::Configuration)?;

        // validation guarantees both start years are present
        let (Some(msi_start), Some(worlds_start)) = (config.msi_start, config.worlds_start) else {
            return Err(RankError::Configuration(vec![
                "start years are required".to_string(),
            ]));
        };

        Ok(RunSettings {
            scoring: ScoringSettings {
                first_place_points: config.score.unwrap_or(DEFAULT_FIRST_PLACE_POINTS),
                worlds: YearWindow::new(worlds_start, current_year),
                msi: YearWindow::new(msi_start, current_year),
            },
            unique: config.unique.unwrap_or(false),
            dedupe: config.dedupe.unwrap_or_default(),
            standings: config
                .standings
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STANDINGS_PATH)),
            template: config
                .template
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            output: config
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        })
    }

    /// Dedupe policy to apply, or `None` when every campaign counts
    pub fn dedupe_policy(&self) -> Option<DedupePolicy> {
        self.unique.then_some(self.dedupe)
    }
}
