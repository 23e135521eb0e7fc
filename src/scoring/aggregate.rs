use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::engine::ScoredRow;
use crate::error::{RankError, Result};

/// Final per-region result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRanking {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Overall Score")]
    pub overall_score: i64,
}

/// Sum scores per region and sort descending.
///
/// Unscored rows are dropped before grouping, so a region with nothing inside
/// the year window does not appear. Equal totals keep first-appearance order.
/// A total that overflows `i64` fails with `ScoreOverflow`.
pub fn aggregate(rows: &[ScoredRow]) -> Result<Vec<RegionRanking>> {
    let mut ranking: Vec<RegionRanking> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for scored in rows {
        let Some(score) = scored.position_index else {
            continue;
        };
        let region = scored.row.region.as_str();
        match index.get(region) {
            Some(&i) => {
                let entry = &mut ranking[i];
                entry.overall_score = entry.overall_score.checked_add(score).ok_or_else(|| {
                    RankError::ScoreOverflow {
                        region: region.to_string(),
                    }
                })?;
            }
            None => {
                index.insert(region, ranking.len());
                ranking.push(RegionRanking {
                    region: region.to_string(),
                    overall_score: score,
                });
            }
        }
    }

    // sort_by is stable
    ranking.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    Ok(ranking)
}
