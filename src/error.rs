use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::standings::EventKind;

/// A standing row whose position has no slot in its event's template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedPosition {
    pub team: String,
    pub position: u32,
    pub championship: String,
}

impl fmt::Display for UnmatchedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} finished #{} in {} but the template has no slot for it",
            self.team, self.position, self.championship
        )
    }
}

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid configuration: {}", .0.join("; "))]
    Configuration(Vec<String>),

    #[error("Template cell malformed ({event} {column}: '{cell}'): {reason}")]
    TemplateFormat {
        event: String,
        column: String,
        cell: String,
        reason: String,
    },

    #[error("Template file not found at {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("Standings file not found at {}", .0.display())]
    MissingStandings(PathBuf),

    #[error("Template has no ranking for {event} {year}")]
    MissingTemplateYear { event: EventKind, year: i32 },

    #[error("Malformed championship '{value}': {reason}")]
    MalformedChampionship { value: String, reason: String },

    #[error("{} standing row(s) could not be scored: {}", .0.len(), join_unmatched(.0))]
    UnmatchedPosition(Vec<UnmatchedPosition>),

    #[error("Overall score for region '{region}' does not fit in 64 bits")]
    ScoreOverflow { region: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

fn join_unmatched(rows: &[UnmatchedPosition]) -> String {
    rows.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl RankError {
    /// Stage label used by the binary when reporting a failed run
    pub fn stage(&self) -> &'static str {
        match self {
            RankError::Configuration(_) => "configuration",
            RankError::TemplateFormat { .. }
            | RankError::MissingTemplate(_)
            | RankError::Yaml(_) => "template",
            RankError::MissingStandings(_) | RankError::Io(_) | RankError::Json(_) => "io",
            RankError::MissingTemplateYear { .. }
            | RankError::MalformedChampionship { .. }
            | RankError::UnmatchedPosition(_)
            | RankError::ScoreOverflow { .. } => "scoring",
        }
    }
}
