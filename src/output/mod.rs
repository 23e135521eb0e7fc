pub mod formatter;
pub mod storage;

pub use formatter::{format_ranking_table, format_template, format_tsv, should_use_colors};
pub use storage::save_ranking;
