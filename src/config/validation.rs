use super::schema::RunConfig;
use super::settings::MAX_FIRST_PLACE_POINTS;
use crate::standings::EventKind;

/// Validate a run configuration before any files are touched.
/// Returns all validation errors at once (not just the first).
pub fn validate_run_config(config: &RunConfig, current_year: i32) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(score) = config.score {
        if !(1..=MAX_FIRST_PLACE_POINTS).contains(&score) {
            errors.push(format!(
                "score: must be between 1 and {}, got {}",
                MAX_FIRST_PLACE_POINTS, score
            ));
        }
    }

    check_start_year(&mut errors, "msi_start", EventKind::Msi, config.msi_start, current_year);
    check_start_year(
        &mut errors,
        "worlds_start",
        EventKind::Worlds,
        config.worlds_start,
        current_year,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_start_year(
    errors: &mut Vec<String>,
    field: &str,
    event: EventKind,
    year: Option<i32>,
    current_year: i32,
) {
    let first = event.first_year();
    match year {
        None => errors.push(format!("{}: {} start year is required", field, event)),
        Some(year) if year < first || year >= current_year => errors.push(format!(
            "{}: {} must be between {} and {}",
            field,
            year,
            first,
            current_year - 1
        )),
        Some(_) => {}
    }
}
