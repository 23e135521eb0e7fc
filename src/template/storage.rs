use std::fs;
use std::path::Path;

use tracing::info;

use super::parser::parse_template;
use super::types::{RawTemplateRow, Template};
use crate::error::{RankError, Result};

/// Load and parse the ranking template
///
/// The file is a YAML list of rows, one per event:
/// ```yaml
/// - Event: Worlds
///   2019: "1/2/3-4/5-8/9-12/13-16"
///   2020: "1/2/3-4/5-8/9-12/13-16"
/// - Event: MSI
///   2019: "1/2/3-4/5/6"
/// ```
///
/// # Errors
///
/// - `MissingTemplate` if the file does not exist
/// - `Yaml` if the file is not a list of rows
/// - `TemplateFormat` if any cell cannot be parsed into slots
pub fn load_template(path: &Path) -> Result<Template> {
    if !path.exists() {
        return Err(RankError::MissingTemplate(path.to_path_buf()));
    }

    info!("Reading template from {}", path.display());
    let content = fs::read_to_string(path)?;
    let rows: Vec<RawTemplateRow> = serde_saphyr::from_str(&content)
        .map_err(|e| RankError::Yaml(format!("{}: {}", path.display(), e)))?;

    parse_template(&rows)
}
