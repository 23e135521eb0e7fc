use tracing::{debug, error, info};

use super::window::ScoringSettings;
use crate::error::{RankError, Result, UnmatchedPosition};
use crate::standings::{Championship, StandingRow};
use crate::template::{SlotSequence, Template};

/// A standing row with its score attached.
///
/// `position_index` is `None` when the championship falls outside its event's
/// year window; such rows stay in the table but never count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    pub row: StandingRow,
    /// The row's Championship column, parsed
    pub championship: Championship,
    pub position_index: Option<i64>,
}

/// Score a finishing position against an event year's slots.
///
/// Returns `None` when no slot holds the position.
pub fn score_position(position: u32, slots: &SlotSequence, base_score: i64) -> Option<i64> {
    slots
        .index_of(position)
        .map(|index| base_score - index as i64)
}

/// Attach a position index to every row, keeping input order.
///
/// Every row whose position has no slot is reported, not just the first.
pub fn score_rows(
    rows: Vec<StandingRow>,
    template: &Template,
    settings: &ScoringSettings,
) -> Result<Vec<ScoredRow>> {
    let base_score = settings.base_score();
    let mut scored = Vec::with_capacity(rows.len());
    let mut unmatched = Vec::new();
    let mut excluded = 0usize;

    for row in rows {
        let championship = Championship::parse(&row.championship)?;

        if !settings.window(championship.event).contains(championship.year) {
            debug!("{}: outside scoring window, not scored", championship);
            excluded += 1;
            scored.push(ScoredRow {
                row,
                championship,
                position_index: None,
            });
            continue;
        }

        let slots = template
            .get(championship.event, championship.year)
            .ok_or(RankError::MissingTemplateYear {
                event: championship.event,
                year: championship.year,
            })?;

        match score_position(row.position, slots, base_score) {
            Some(score) => scored.push(ScoredRow {
                row,
                championship,
                position_index: Some(score),
            }),
            None => {
                error!(
                    "No template slot for {} (#{}) in {}",
                    row.team, row.position, championship
                );
                unmatched.push(UnmatchedPosition {
                    team: row.team,
                    position: row.position,
                    championship: row.championship,
                });
            }
        }
    }

    if !unmatched.is_empty() {
        return Err(RankError::UnmatchedPosition(unmatched));
    }

    info!(
        "Scored {} rows ({} outside the year window)",
        scored.len() - excluded,
        excluded
    );
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::window::YearWindow;
    use crate::standings::EventKind;
    use crate::template::parse_cell;
    use std::collections::BTreeMap;

    fn row(team: &str, position: u32, region: &str, championship: &str) -> StandingRow {
        StandingRow {
            team: team.to_string(),
            position,
            region: region.to_string(),
            championship: championship.to_string(),
        }
    }

    fn settings() -> ScoringSettings {
        ScoringSettings {
            first_place_points: 10,
            worlds: YearWindow::new(2019, 2022),
            msi: YearWindow::new(2019, 2022),
        }
    }

    fn template() -> Template {
        let mut template = Template::new();
        let mut worlds = BTreeMap::new();
        worlds.insert(2019, parse_cell("1 2 3-4 5-8").unwrap());
        worlds.insert(2020, parse_cell("1 2 3-4").unwrap());
        template.set_event(EventKind::Worlds, worlds);
        let mut msi = BTreeMap::new();
        msi.insert(2019, parse_cell("1/2/3-4/5/6").unwrap());
        template.set_event(EventKind::Msi, msi);
        template
    }

    #[test]
    fn test_score_position_first_place() {
        let slots = parse_cell("1 2 3-4").unwrap();
        assert_eq!(score_position(1, &slots, 11), Some(11));
        assert_eq!(score_position(2, &slots, 11), Some(10));
    }

    #[test]
    fn test_tied_positions_share_score() {
        let slots = parse_cell("1 2 3 4 5-8").unwrap();
        assert_eq!(score_position(5, &slots, 11), score_position(8, &slots, 11));
        assert_eq!(score_position(5, &slots, 11), Some(7));
    }

    #[test]
    fn test_base_ten_scenario() {
        let slots = parse_cell("1 2 3-4").unwrap();
        let base = settings().base_score();
        assert_eq!(score_position(3, &slots, base), Some(9));
        assert_eq!(score_position(4, &slots, base), Some(9));
    }

    #[test]
    fn test_exact_label_scores_before_overlapping_range() {
        let slots = parse_cell("1/2/3/3-4").unwrap();
        assert_eq!(score_position(3, &slots, 11), Some(9));
        assert_eq!(score_position(4, &slots, 11), Some(8));
    }

    #[test]
    fn test_bare_range_cell_scores_as_first_slot() {
        let slots = parse_cell("5-8").unwrap();
        assert_eq!(score_position(5, &slots, 11), Some(11));
        assert_eq!(score_position(8, &slots, 11), Some(11));
        assert_eq!(score_position(1, &slots, 11), None);
    }

    #[test]
    fn test_score_position_unmatched() {
        let slots = parse_cell("1 2 3-4").unwrap();
        assert_eq!(score_position(5, &slots, 11), None);
    }

    #[test]
    fn test_score_rows_routes_by_event_and_year() {
        let rows = vec![
            row("FunPlus Phoenix", 1, "LPL", "Worlds 2019"),
            row("Invictus Gaming", 7, "LPL", "Worlds 2019"),
            row("G2 Esports", 5, "LEC", "MSI 2019"),
            row("DWG KIA", 1, "LCK", "Worlds 2020"),
        ];
        let scored = score_rows(rows, &template(), &settings()).unwrap();
        let scores: Vec<_> = scored.iter().map(|r| r.position_index).collect();
        assert_eq!(scores, vec![Some(11), Some(8), Some(8), Some(11)]);
        assert_eq!(scored[1].row.team, "Invictus Gaming");
    }

    #[test]
    fn test_out_of_window_rows_not_scored() {
        let rows = vec![
            row("SK Telecom T1", 1, "LCK", "Worlds 2016"),
            row("EDward Gaming", 1, "LPL", "Worlds 2021"),
            row("DWG KIA", 1, "LCK", "Worlds 2022"),
        ];
        // 2021 is inside the window but the template has no column for it
        let scored = score_rows(rows, &template(), &settings());
        assert!(matches!(
            scored,
            Err(RankError::MissingTemplateYear { year: 2021, .. })
        ));

        let rows = vec![
            row("SK Telecom T1", 1, "LCK", "Worlds 2016"),
            row("DWG KIA", 1, "LCK", "Worlds 2022"),
        ];
        let scored = score_rows(rows, &template(), &settings()).unwrap();
        assert!(scored.iter().all(|r| r.position_index.is_none()));
        assert_eq!(scored.len(), 2);
    }

    #[test]
    fn test_unmatched_positions_all_reported() {
        let rows = vec![
            row("FunPlus Phoenix", 1, "LPL", "Worlds 2019"),
            row("Team Liquid", 9, "LCS", "Worlds 2019"),
            row("Clutch Gaming", 12, "LCS", "Worlds 2019"),
        ];
        let err = score_rows(rows, &template(), &settings()).unwrap_err();
        match err {
            RankError::UnmatchedPosition(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].team, "Team Liquid");
                assert_eq!(rows[0].position, 9);
                assert_eq!(rows[1].championship, "Worlds 2019");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_championship_parsed_once_per_row() {
        let rows = vec![row("DWG KIA", 1, "LCK", "Worlds 2020 ")];
        let scored = score_rows(rows, &template(), &settings()).unwrap();
        assert_eq!(scored[0].championship.event, EventKind::Worlds);
        assert_eq!(scored[0].championship.year, 2020);
        assert_eq!(scored[0].row.championship, "Worlds 2020 ");
    }

    #[test]
    fn test_malformed_championship_fails() {
        let rows = vec![row("T1", 1, "LCK", "Worlds")];
        assert!(matches!(
            score_rows(rows, &template(), &settings()),
            Err(RankError::MalformedChampionship { .. })
        ));
    }

    #[test]
    fn test_full_coverage_scores_every_position() {
        let mut template = Template::new();
        let mut worlds = BTreeMap::new();
        worlds.insert(2020, parse_cell("1 2 3-4 5-8 9-12 13-16").unwrap());
        template.set_event(EventKind::Worlds, worlds);

        let rows: Vec<_> = (1..=16)
            .map(|p| row("Team", p, "LEC", "Worlds 2020"))
            .collect();
        let scored = score_rows(rows, &template, &settings()).unwrap();
        assert!(scored.iter().all(|r| r.position_index.is_some()));
        assert_eq!(scored[15].position_index, Some(6));
    }
}
