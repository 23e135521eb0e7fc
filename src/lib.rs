//! Rank regions by how their teams placed at international championships.
//!
//! Standings rows are scored against a per-event ranking template, optionally
//! collapsed to one campaign per region per event, and summed per region.

pub mod config;
pub mod error;
pub mod output;
pub mod rank;
pub mod scoring;
pub mod standings;
pub mod template;

pub use error::{RankError, Result};
