use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// One ingested row from a source file, as entered. Ephemeral: raw records
/// exist only between ingestion and aggregation and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Machinery/location label, if the cell held a non-blank value.
    pub machinery: Option<String>,
    /// Free-text job title, if the cell held a non-blank value.
    pub job_title: Option<String>,
}

/// Display metadata describing one source file: the vessel name taken from
/// the file contents and the date label derived from the filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLabel {
    pub vessel: String,
    pub date: String,
    /// File position in the comparison (1 or 2), used to keep column labels
    /// unique when both files name the same vessel.
    pub ordinal: u8,
}

impl SourceLabel {
    pub fn new(vessel: impl Into<String>, date: impl Into<String>, ordinal: u8) -> Self {
        Self {
            vessel: vessel.into(),
            date: date.into(),
            ordinal,
        }
    }

    /// Column header for the count report: `Vessel (DD-MM-YYYY)`, with a file
    /// ordinal appended when both sides would otherwise render identically.
    pub fn count_column(&self, other: &SourceLabel) -> String {
        let own = format!("{} ({})", self.vessel, self.date);
        let theirs = format!("{} ({})", other.vessel, other.date);
        if own == theirs {
            format!("{own} [File {}]", self.ordinal)
        } else {
            own
        }
    }

    /// Column header for the title report. Vessel names alone are usually
    /// distinct; same-vessel comparisons fall back to file ordinals.
    pub fn titles_column(&self, other: &SourceLabel) -> String {
        if self.vessel == other.vessel {
            format!("Titles only in {} (File {})", self.vessel, self.ordinal)
        } else {
            format!("Titles only in {}", self.vessel)
        }
    }
}

/// Per-key accumulation inside one file: the deduplicated title set and the
/// raw row count. The two are deliberately separate semantics — `count`
/// backs the count-reconciliation report and includes duplicate-title rows,
/// while `titles` backs the title-diff report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStats {
    pub titles: BTreeSet<String>,
    pub count: u64,
}

/// Grouping of one source file's rows by canonical machinery key. Built once
/// per file per run, read-only afterward.
#[derive(Debug, Clone)]
pub struct FileAggregate {
    pub source: SourceLabel,
    pub entries: BTreeMap<String, KeyStats>,
}

/// One output record per canonical key present in either file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub machinery: String,
    pub common: BTreeSet<String>,
    pub only_in_a: BTreeSet<String>,
    pub only_in_b: BTreeSet<String>,
    pub has_differences: bool,
    pub count_a: u64,
    pub count_b: u64,
    pub count_diff: i64,
}

impl ComparisonRow {
    /// Whether at least one title was recorded under this key in either file.
    /// Keys failing this are dropped from the title report but retained in
    /// the count report.
    pub fn has_titles(&self) -> bool {
        !self.common.is_empty() || !self.only_in_a.is_empty() || !self.only_in_b.is_empty()
    }
}

/// Count sums across all comparison rows, rendered as the TOTAL row of the
/// count report. Kept outside the row list so it never participates in
/// title or key matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub count_a: u64,
    pub count_b: u64,
    pub count_diff: i64,
}

/// Full result of comparing two files, sorted by machinery key.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub label_a: SourceLabel,
    pub label_b: SourceLabel,
    pub rows: Vec<ComparisonRow>,
    pub total: Totals,
}

impl Comparison {
    /// Empty-result sentinel: lets a presentation layer render a "no data"
    /// state instead of propagating a failure.
    pub fn empty(label_a: SourceLabel, label_b: SourceLabel) -> Self {
        Self {
            label_a,
            label_b,
            rows: Vec::new(),
            total: Totals::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Machinery keys flagged as differing, restricted to keys that carry
    /// titles at all (the title-report inclusion rule).
    pub fn machinery_with_differences(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.has_titles() && row.has_differences)
            .map(|row| row.machinery.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_column_appends_ordinal_only_on_collision() {
        let a = SourceLabel::new("Federal Thunderbay", "25-03-2025", 1);
        let b = SourceLabel::new("Federal Thunderbay", "24-03-2025", 2);
        assert_eq!(a.count_column(&b), "Federal Thunderbay (25-03-2025)");

        let c = SourceLabel::new("Federal Thunderbay", "25-03-2025", 2);
        assert_eq!(
            a.count_column(&c),
            "Federal Thunderbay (25-03-2025) [File 1]"
        );
        assert_eq!(
            c.count_column(&a),
            "Federal Thunderbay (25-03-2025) [File 2]"
        );
    }

    #[test]
    fn titles_column_disambiguates_same_vessel() {
        let a = SourceLabel::new("Aurora", "01-01-2025", 1);
        let b = SourceLabel::new("Borealis", "02-01-2025", 2);
        assert_eq!(a.titles_column(&b), "Titles only in Aurora");

        let same = SourceLabel::new("Aurora", "02-01-2025", 2);
        assert_eq!(a.titles_column(&same), "Titles only in Aurora (File 1)");
        assert_eq!(same.titles_column(&a), "Titles only in Aurora (File 2)");
    }
}
