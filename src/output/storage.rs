use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::scoring::RegionRanking;

/// Save the ranking as a JSON array atomically
///
/// Uses atomic-write-file so a failed run never leaves a half-written
/// ranking behind. Creates the parent directory if it doesn't exist.
pub fn save_ranking(path: &Path, ranking: &[RegionRanking]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = AtomicWriteFile::open(path)?;
    serde_json::to_writer_pretty(&mut file, ranking)?;
    file.commit()?;

    info!("Saved {} regions to {}", ranking.len(), path.display());
    Ok(())
}
