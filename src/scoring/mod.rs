pub mod aggregate;
pub mod dedupe;
pub mod engine;
pub mod window;

pub use aggregate::{aggregate, RegionRanking};
pub use dedupe::{dedupe, DedupePolicy};
pub use engine::{score_position, score_rows, ScoredRow};
pub use window::{ScoringSettings, YearWindow};
