use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use super::types::StandingRow;
use crate::error::{RankError, Result};

/// Load the scraped standings table (a JSON array of rows)
///
/// A missing file is reported as `MissingStandings` so callers can tell it
/// apart from unreadable or malformed data.
pub fn load_standings(path: &Path) -> Result<Vec<StandingRow>> {
    if !path.exists() {
        return Err(RankError::MissingStandings(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let rows: Vec<StandingRow> = serde_json::from_reader(BufReader::new(file))?;

    info!("Loaded {} standing rows from {}", rows.len(), path.display());
    Ok(rows)
}
