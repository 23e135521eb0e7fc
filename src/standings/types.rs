use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RankError, Result};

/// International events that feed the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Worlds,
    Msi,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Worlds, EventKind::Msi];

    /// Label used in the Championship column and the template's Event column
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Worlds => "Worlds",
            EventKind::Msi => "MSI",
        }
    }

    /// Earliest year with standings for this event
    pub fn first_year(&self) -> i32 {
        match self {
            EventKind::Worlds => 2014,
            EventKind::Msi => 2015,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        EventKind::ALL.into_iter().find(|kind| kind.label() == s)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One team's finish at one championship, as produced by the scraper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    #[serde(rename = "Team")]
    pub team: String,
    /// 1-based finishing rank
    #[serde(rename = "Position")]
    pub position: u32,
    #[serde(rename = "Region")]
    pub region: String,
    /// "<EventName> <Year>", e.g. "Worlds 2020"
    #[serde(rename = "Championship")]
    pub championship: String,
}

/// Parsed form of the Championship column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Championship {
    pub event: EventKind,
    pub year: i32,
}

impl Championship {
    pub fn parse(value: &str) -> Result<Self> {
        let malformed = |reason: &str| RankError::MalformedChampionship {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let (event, year) = value
            .trim()
            .rsplit_once(' ')
            .ok_or_else(|| malformed("expected '<Event> <Year>'"))?;
        let event = EventKind::parse(event.trim())
            .ok_or_else(|| malformed("unknown event, expected Worlds or MSI"))?;
        let year = year
            .parse()
            .map_err(|_| malformed("year is not a number"))?;

        Ok(Championship { event, year })
    }
}

impl fmt::Display for Championship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.event, self.year)
    }
}
