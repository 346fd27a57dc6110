//! Frequency tables keyed by a per-record label.
//!
//! Keys are ranked by descending count. Equal counts keep the order in which
//! their keys were first seen in the input.

use std::collections::HashMap;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::central::ALL_INDIA;
use crate::record::{as_text, SchemeRecord};

/// Label for schemes with no specific state.
pub const CENTRAL: &str = "Central";
const NOT_SPECIFIED: &str = "Not specified";

/// Which label a record is grouped under in the state report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StateKey {
    /// The dataset's `classified_state` field.
    #[default]
    Classified,
    /// A state derived from the `states` list.
    Derived,
}

impl StateKey {
    pub fn key_for(self, record: &SchemeRecord) -> String {
        match self {
            StateKey::Classified => record.classified_state(),
            StateKey::Derived => derived_state(record),
        }
    }
}

/// Primary state from the `states` list.
///
/// Empty lists and lists containing `"All India"` map to [`CENTRAL`];
/// otherwise the first entry other than `"Not specified"`.
pub fn derived_state(record: &SchemeRecord) -> String {
    if record.lists_state(ALL_INDIA) {
        return CENTRAL.to_string();
    }
    record
        .states
        .iter()
        .map(as_text)
        .find(|s| s != NOT_SPECIFIED && s != ALL_INDIA)
        .unwrap_or_else(|| CENTRAL.to_string())
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount {
    pub key: String,
    pub count: usize,
}

/// Counts per distinct key, remembering first-seen order.
#[derive(Debug, Default, Clone)]
pub struct KeyCounts {
    total: usize,
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl KeyCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: String) {
        self.total += 1;
        match self.counts.get_mut(&key) {
            Some(n) => *n += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, 1);
            }
        }
    }

    /// Number of keys added, counting repeats.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// All keys, highest count first.
    pub fn ranked(&self) -> Vec<KeyCount> {
        let mut rows: Vec<KeyCount> = self
            .order
            .iter()
            .map(|k| KeyCount {
                key: k.clone(),
                count: self.counts[k],
            })
            .collect();
        // sort_by is stable; ties stay in first-seen order
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    pub fn top(&self, n: usize) -> Vec<KeyCount> {
        let mut rows = self.ranked();
        rows.truncate(n);
        rows
    }
}

impl FromIterator<String> for KeyCounts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counts = KeyCounts::new();
        for key in iter {
            counts.add(key);
        }
        counts
    }
}

pub fn count_states(records: &[SchemeRecord], key: StateKey) -> KeyCounts {
    records.iter().map(|r| key.key_for(r)).collect()
}

/// A ranked table ready for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub total: usize,
    pub entries: Vec<KeyCount>,
    #[serde(skip)]
    pub label: &'static str,
    #[serde(skip)]
    pub top: usize,
}

impl TableReport {
    pub fn new(counts: &KeyCounts, label: &'static str, top: usize) -> Self {
        Self {
            total: counts.total(),
            entries: counts.top(top),
            label,
            top,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total schemes: {}", self.total)?;
        writeln!(out, "\n{} counts (top {}):", self.label, self.top)?;
        for row in &self.entries {
            writeln!(out, "  {}: {}", row.key, row.count)?;
        }
        Ok(())
    }
}
