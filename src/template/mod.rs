pub mod parser;
pub mod storage;
pub mod types;

pub use parser::{parse_cell, parse_row, parse_template, EVENT_COLUMN};
pub use storage::load_template;
pub use types::{PositionSlot, RawCell, RawTemplateRow, SlotSequence, Template};
