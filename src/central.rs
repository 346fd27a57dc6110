//! Candidate tests for "central" schemes.
//!
//! Three proxies are counted independently:
//!
//! * **all-india**: `states` contains exactly `"All India"`.
//! * **has-ministry**: `ministry` is non-empty.
//! * **ministry-prefixed**: has-ministry holds and some non-blank ministry
//!   entry starts with `"Ministry"`.
//!
//! ministry-prefixed implies has-ministry, so its count never exceeds the
//! has-ministry count.

use std::io::{self, Write};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::record::{as_text, is_truthy, truncate_chars, SchemeRecord};

pub const ALL_INDIA: &str = "All India";
pub const MINISTRY_PREFIX: &str = "Ministry";

pub fn is_all_india(record: &SchemeRecord) -> bool {
    record.lists_state(ALL_INDIA)
}

pub fn has_ministry(record: &SchemeRecord) -> bool {
    !record.ministry.is_empty()
}

pub fn is_ministry_prefixed(record: &SchemeRecord) -> bool {
    has_ministry(record)
        && record
            .ministry
            .iter()
            .filter(|m| is_truthy(m))
            .any(|m| as_text(m).starts_with(MINISTRY_PREFIX))
}

/// Running counts for the three predicates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CentralTally {
    pub all_india: usize,
    pub has_ministry: usize,
    pub ministry_prefixed: usize,
}

impl CentralTally {
    pub fn observe(&mut self, record: &SchemeRecord) {
        if is_all_india(record) {
            self.all_india += 1;
        }
        if has_ministry(record) {
            self.has_ministry += 1;
            if is_ministry_prefixed(record) {
                self.ministry_prefixed += 1;
            }
        }
    }

    pub fn from_records(records: &[SchemeRecord]) -> Self {
        let mut tally = Self::default();
        for r in records {
            tally.observe(r);
        }
        tally
    }
}

/// A record shown in the sample section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEntry {
    /// Name cut to the configured width.
    pub scheme_name: String,
    pub ministry: Vec<Value>,
    pub states: Vec<Value>,
}

/// The first `limit` records with at least one ministry, in input order.
pub fn ministry_sample(records: &[SchemeRecord], limit: usize, width: usize) -> Vec<SampleEntry> {
    records
        .iter()
        .filter(|r| has_ministry(r))
        .take(limit)
        .map(|r| SampleEntry {
            scheme_name: truncate_chars(&r.name(), width).to_string(),
            ministry: r.ministry.clone(),
            states: r.states.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralReport {
    #[serde(flatten)]
    pub tally: CentralTally,
    pub sample: Vec<SampleEntry>,
}

impl CentralReport {
    pub fn build(records: &[SchemeRecord], sample: usize, width: usize) -> Self {
        let tally = CentralTally::from_records(records);
        debug!(
            "central tally over {} schemes: {:?}",
            records.len(),
            tally
        );
        Self {
            tally,
            sample: ministry_sample(records, sample, width),
        }
    }

    /// Write the plain-text report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Schemes with '{}' in states: {}",
            ALL_INDIA, self.tally.all_india
        )?;
        writeln!(out, "Schemes with any ministry: {}", self.tally.has_ministry)?;
        writeln!(
            out,
            "Schemes with ministry starting with '{}': {}",
            MINISTRY_PREFIX, self.tally.ministry_prefixed
        )?;

        writeln!(out, "\nSample schemes with ministries:")?;
        for entry in &self.sample {
            writeln!(out, "  - {}", entry.scheme_name)?;
            writeln!(out, "    Ministry: {}", list_text(&entry.ministry))?;
            writeln!(out, "    States: {}", list_text(&entry.states))?;
        }
        Ok(())
    }
}

fn list_text(values: &[Value]) -> String {
    Value::Array(values.to_vec()).to_string()
}
