use std::ops::Range;

use crate::standings::EventKind;

/// Years of an event that count toward the ranking.
///
/// Runs from the configured start year up to, but not including, the current
/// year, so an event still in progress is never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    pub fn new(start: i32, current_year: i32) -> Self {
        Self {
            start,
            end: current_year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }

    pub fn years(&self) -> Range<i32> {
        self.start..self.end
    }
}

/// Everything the scorer needs besides the rows and the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringSettings {
    /// Points awarded for first place
    pub first_place_points: i64,
    pub worlds: YearWindow,
    pub msi: YearWindow,
}

impl ScoringSettings {
    pub fn window(&self, event: EventKind) -> YearWindow {
        match event {
            EventKind::Worlds => self.worlds,
            EventKind::Msi => self.msi,
        }
    }

    /// Score for slot 0; slot `i` scores `base_score() - i`
    pub fn base_score(&self) -> i64 {
        self.first_place_points.saturating_add(1)
    }
}
