pub mod storage;
pub mod types;

pub use storage::load_standings;
pub use types::{Championship, EventKind, StandingRow};
