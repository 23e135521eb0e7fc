use std::collections::BTreeMap;

use tracing::{debug, info};

use super::types::{PositionSlot, RawTemplateRow, SlotSequence, Template};
use crate::error::{RankError, Result};
use crate::standings::EventKind;

/// Column holding the event kind; every other column is a year.
pub const EVENT_COLUMN: &str = "Event";

/// Highest finishing position a template may name
pub const MAX_POSITION: u32 = 1024;

/// Parse one template cell such as `"1 2 3 4 5-8 9-12"`, `"1/2/3-4/5-8"` or `"5-8"`.
///
/// Fields are separated by `/` or whitespace. `lo-hi` (spaces around the dash
/// allowed) becomes a tied slot holding every position from `lo` to `hi`.
/// Slots may overlap; lookup prefers an exact single label over a tied slot.
pub fn parse_cell(cell: &str) -> std::result::Result<SlotSequence, String> {
    let normalized = collapse_range_spaces(cell.trim());
    if normalized.is_empty() {
        return Err("cell is empty".to_string());
    }

    let slots = normalized
        .split(|c: char| c == '/' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(parse_field)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if slots.is_empty() {
        return Err("cell has no positions".to_string());
    }

    Ok(SlotSequence::new(slots))
}

/// `"5 - 8"` -> `"5-8"`, so ranges survive whitespace splitting
fn collapse_range_spaces(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    let mut chars = cell.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            while out.ends_with(char::is_whitespace) {
                out.pop();
            }
            out.push('-');
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_field(field: &str) -> std::result::Result<PositionSlot, String> {
    if let Some((lo, hi)) = field.split_once('-') {
        let lo = parse_position(lo)?;
        let hi = parse_position(hi)?;
        if lo >= hi {
            return Err(format!("range '{}' must run from a lower to a higher position", field));
        }
        Ok(PositionSlot::Tied((lo..=hi).collect()))
    } else {
        Ok(PositionSlot::Single(parse_position(field)?.to_string()))
    }
}

fn parse_position(s: &str) -> std::result::Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) if n > MAX_POSITION => Err(format!(
            "position {} is past the last supported position ({})",
            n, MAX_POSITION
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a position", s)),
    }
}

/// Parse one template row into its event kind and per-year slots.
///
/// The Event column is metadata and is dropped from the result. Null or blank
/// cells are skipped: that year simply has no ranking yet.
pub fn parse_row(raw: &RawTemplateRow) -> Result<(EventKind, BTreeMap<i32, SlotSequence>)> {
    let event_label = raw
        .iter()
        .find(|(column, _)| column.as_str() == EVENT_COLUMN)
        .and_then(|(_, cell)| cell.as_ref())
        .map(|cell| cell.as_str().trim().to_string())
        .ok_or_else(|| RankError::TemplateFormat {
            event: "?".to_string(),
            column: EVENT_COLUMN.to_string(),
            cell: String::new(),
            reason: "row has no Event".to_string(),
        })?;

    let event = EventKind::parse(&event_label).ok_or_else(|| RankError::TemplateFormat {
        event: event_label.clone(),
        column: EVENT_COLUMN.to_string(),
        cell: event_label.clone(),
        reason: "unknown event, expected Worlds or MSI".to_string(),
    })?;

    let mut years = BTreeMap::new();
    for (column, cell) in raw {
        if column.as_str() == EVENT_COLUMN {
            continue;
        }

        let malformed = |cell: &str, reason: String| RankError::TemplateFormat {
            event: event_label.clone(),
            column: column.as_str().to_string(),
            cell: cell.to_string(),
            reason,
        };

        let year: i32 = column
            .as_str()
            .trim()
            .parse()
            .map_err(|_| malformed("", "column is not a year".to_string()))?;

        let cell = match cell {
            Some(cell) if !cell.as_str().trim().is_empty() => cell.as_str(),
            _ => {
                debug!("{} {}: no ranking in template, skipping", event, year);
                continue;
            }
        };

        let slots = parse_cell(cell).map_err(|reason| malformed(cell, reason))?;
        debug!("{} {}: {} slots", event, year, slots.len());
        years.insert(year, slots);
    }

    Ok((event, years))
}

/// Build the full template from its rows. A later row for the same event
/// replaces an earlier one.
pub fn parse_template(rows: &[RawTemplateRow]) -> Result<Template> {
    let mut template = Template::new();
    for row in rows {
        let (event, years) = parse_row(row)?;
        info!("Parsed {} template ({} years)", event, years.len());
        template.set_event(event, years);
    }
    Ok(template)
}
