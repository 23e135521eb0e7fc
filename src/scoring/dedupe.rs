use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::engine::ScoredRow;
use crate::standings::Championship;

/// Which row survives when a region has several teams at one championship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DedupePolicy {
    /// Keep the region's first row in input order, whatever it scored
    #[default]
    FirstSeen,
    /// Keep the region's highest-scoring row; ties keep the earlier row
    BestScore,
}

/// Collapse to at most one row per region per championship.
///
/// Regions are only compared within the same championship, matched on the
/// parsed event and year. Surviving rows keep their original order.
pub fn dedupe(rows: Vec<ScoredRow>, policy: DedupePolicy) -> Vec<ScoredRow> {
    let duplicates = find_duplicates(&rows, policy);
    if !duplicates.is_empty() {
        debug!("Dropping {} duplicate region rows ({:?})", duplicates.len(), policy);
    }

    rows.into_iter()
        .enumerate()
        .filter(|(index, _)| !duplicates.contains(index))
        .map(|(_, row)| row)
        .collect()
}

/// Row indices to drop
fn find_duplicates(rows: &[ScoredRow], policy: DedupePolicy) -> HashSet<usize> {
    // (championship, region) -> index of the row currently kept
    let mut kept: HashMap<(Championship, &str), usize> = HashMap::new();
    let mut duplicates = HashSet::new();

    for (index, scored) in rows.iter().enumerate() {
        let key = (scored.championship, scored.row.region.as_str());
        match kept.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(mut slot) => {
                let current = *slot.get();
                let replaces = policy == DedupePolicy::BestScore
                    && scored.position_index > rows[current].position_index;
                if replaces {
                    duplicates.insert(current);
                    slot.insert(index);
                } else {
                    duplicates.insert(index);
                }
            }
        }
    }

    duplicates
}
