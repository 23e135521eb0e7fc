use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::standings::EventKind;

/// One finishing slot in an event's ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSlot {
    /// A single position, stored as its canonical label ("1", "2", ...)
    Single(String),
    /// Positions that share a slot, sorted ascending ("5-8" -> [5, 6, 7, 8])
    Tied(Vec<u32>),
}

impl PositionSlot {
    pub fn is_label(&self, label: &str) -> bool {
        matches!(self, PositionSlot::Single(l) if l == label)
    }

    pub fn contains(&self, position: u32) -> bool {
        match self {
            PositionSlot::Single(label) => *label == position.to_string(),
            PositionSlot::Tied(positions) => positions.binary_search(&position).is_ok(),
        }
    }
}

impl fmt::Display for PositionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSlot::Single(label) => f.write_str(label),
            PositionSlot::Tied(positions) => match (positions.first(), positions.last()) {
                (Some(lo), Some(hi)) => write!(f, "{}-{}", lo, hi),
                _ => Ok(()),
            },
        }
    }
}

/// Slots for one event year; index 0 is first place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotSequence(Vec<PositionSlot>);

impl SlotSequence {
    pub fn new(slots: Vec<PositionSlot>) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[PositionSlot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find the slot index for a position.
    ///
    /// Exact single-label matches take precedence over tied-slot membership.
    pub fn index_of(&self, position: u32) -> Option<usize> {
        let label = position.to_string();
        self.0
            .iter()
            .position(|slot| slot.is_label(&label))
            .or_else(|| {
                self.0.iter().position(|slot| match slot {
                    PositionSlot::Tied(_) => slot.contains(position),
                    PositionSlot::Single(_) => false,
                })
            })
    }
}

impl fmt::Display for SlotSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        f.write_str(&parts.join(" / "))
    }
}

/// Parsed ranking template: per event, year -> slots.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    events: BTreeMap<EventKind, BTreeMap<i32, SlotSequence>>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rankings for an event
    pub fn set_event(&mut self, event: EventKind, years: BTreeMap<i32, SlotSequence>) {
        self.events.insert(event, years);
    }

    pub fn get(&self, event: EventKind, year: i32) -> Option<&SlotSequence> {
        self.events.get(&event).and_then(|years| years.get(&year))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventKind, &BTreeMap<i32, SlotSequence>)> {
        self.events.iter().map(|(event, years)| (*event, years))
    }
}

/// A template spreadsheet cell or column header.
///
/// Accepts strings and bare integers so `2019: 1/2/3-4` and
/// `"2019": "1/2/3-4"` read the same.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawCell(pub String);

impl RawCell {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl Visitor<'_> for CellVisitor {
            type Value = RawCell;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

/// One template row as stored on disk: the Event column plus one column per year.
/// Empty (null) cells mean the year has no ranking.
pub type RawTemplateRow = BTreeMap<RawCell, Option<RawCell>>;
