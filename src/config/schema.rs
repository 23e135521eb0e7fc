use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::DedupePolicy;

/// Run configuration, as read from YAML or assembled from CLI flags.
///
/// Every field is optional so a file and the command line can be layered.
///
/// Example YAML:
/// ```yaml
/// score: 10
/// msi_start: 2016
/// worlds_start: 2014
/// unique: true
/// dedupe: first-seen
/// template: ranking_template.yaml
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Points for first place in every event (default: 10)
    #[serde(default)]
    pub score: Option<i64>,

    /// First MSI year to score
    #[serde(default)]
    pub msi_start: Option<i32>,

    /// First Worlds year to score
    #[serde(default)]
    pub worlds_start: Option<i32>,

    /// Count only one campaign per region per event
    #[serde(default)]
    pub unique: Option<bool>,

    /// Which row wins when `unique` collapses a region (default: first-seen)
    #[serde(default)]
    pub dedupe: Option<DedupePolicy>,

    #[serde(default)]
    pub standings: Option<PathBuf>,

    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: RunConfig) -> RunConfig {
        RunConfig {
            score: overrides.score.or(self.score),
            msi_start: overrides.msi_start.or(self.msi_start),
            worlds_start: overrides.worlds_start.or(self.worlds_start),
            unique: overrides.unique.or(self.unique),
            dedupe: overrides.dedupe.or(self.dedupe),
            standings: overrides.standings.or(self.standings),
            template: overrides.template.or(self.template),
            output: overrides.output.or(self.output),
        }
    }
}
