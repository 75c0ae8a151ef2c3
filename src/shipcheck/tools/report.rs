//! Report assembly: turns a [`Comparison`] into styled sheet tables.
//!
//! The tables are writer-independent; [`crate::shipcheck::tools::io::excel_write`]
//! materialises them as workbooks. Row inclusion rules live here — the title
//! report and the count report apply independent criteria to the same
//! comparison value.

use std::collections::BTreeSet;

use crate::shipcheck::tools::model::Comparison;

/// Rendered in place of an empty title set, distinguishing "no differences"
/// from "not computed".
pub const EMPTY_MARKER: &str = "-";

pub const TITLE_SHEET: &str = "Job Title Comparison";
pub const DIFF_INDEX_SHEET: &str = "Machinery Differences";
pub const COUNT_SHEET: &str = "Machinery Count Comparison";

/// Visual treatment of one cell, mapped to a workbook format by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    /// Bold header cell.
    Header,
    /// Bold body text: machinery names with differences, the TOTAL row.
    Emphasis,
    /// Light-yellow fill: values that differ between the two files.
    Divergent,
    /// Light-red fill with dark-red text: difference flags, deficits.
    Alert,
    /// Light-red fill with bold text: machinery absent on one side.
    Absent,
    /// Light-green fill with dark-green text: surplus on the first side.
    Surplus,
    /// Light-blue fill for alternating index rows.
    Banded,
    /// Italic empty-state note.
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub text: String,
    pub style: CellStyle,
    pub wrap: bool,
}

impl StyledCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Plain)
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: false,
        }
    }

    fn wrapped(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: true,
        }
    }
}

/// One sheet to materialise: a grid of styled cells plus sparse column
/// widths (column index, width in character units).
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSheet {
    pub name: String,
    pub column_widths: Vec<(u16, f64)>,
    pub rows: Vec<Vec<StyledCell>>,
}

/// Serializes a title set: sorted, comma-joined, `-` when empty.
pub fn join_titles(titles: &BTreeSet<String>) -> String {
    if titles.is_empty() {
        EMPTY_MARKER.to_string()
    } else {
        titles.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Builds the title-diff workbook: the per-machinery comparison sheet and an
/// index sheet of machinery flagged as differing.
pub fn title_report(comparison: &Comparison) -> Vec<ReportSheet> {
    vec![title_sheet(comparison), diff_index_sheet(comparison)]
}

fn title_sheet(comparison: &Comparison) -> ReportSheet {
    let columns = [
        "Machinery".to_string(),
        "Has Differences".to_string(),
        "Common Titles".to_string(),
        comparison.label_a.titles_column(&comparison.label_b),
        comparison.label_b.titles_column(&comparison.label_a),
    ];

    let mut rows = Vec::with_capacity(comparison.rows.len() + 1);
    rows.push(
        columns
            .iter()
            .map(|name| StyledCell::styled(name, CellStyle::Header))
            .collect(),
    );

    for row in comparison.rows.iter().filter(|row| row.has_titles()) {
        let name_style = if row.has_differences {
            CellStyle::Emphasis
        } else {
            CellStyle::Plain
        };
        let flag = if row.has_differences { "Yes" } else { "No" };
        let flag_style = if row.has_differences {
            CellStyle::Alert
        } else {
            CellStyle::Plain
        };

        let only_a = join_titles(&row.only_in_a);
        let only_b = join_titles(&row.only_in_b);
        let only_style = |text: &str| {
            if row.has_differences && text != EMPTY_MARKER {
                CellStyle::Divergent
            } else {
                CellStyle::Plain
            }
        };

        rows.push(vec![
            StyledCell::wrapped(&row.machinery, name_style),
            StyledCell::wrapped(flag, flag_style),
            StyledCell::wrapped(join_titles(&row.common), CellStyle::Plain),
            StyledCell::wrapped(&only_a, only_style(&only_a)),
            StyledCell::wrapped(&only_b, only_style(&only_b)),
        ]);
    }

    ReportSheet {
        name: TITLE_SHEET.to_string(),
        column_widths: (0..columns.len() as u16).map(|col| (col, 30.0)).collect(),
        rows,
    }
}

fn diff_index_sheet(comparison: &Comparison) -> ReportSheet {
    let differing = comparison.machinery_with_differences();

    let mut rows: Vec<Vec<StyledCell>> = Vec::with_capacity(differing.len() + 3);
    rows.push(vec![
        StyledCell::styled("Machinery with Different Job Titles", CellStyle::Header),
        StyledCell::styled(
            format!(
                "Comparison: {} vs {}",
                comparison.label_a.vessel, comparison.label_b.vessel
            ),
            CellStyle::Header,
        ),
    ]);
    rows.push(Vec::new());
    rows.push(vec![
        StyledCell::styled("No.", CellStyle::Header),
        StyledCell::styled("Machinery", CellStyle::Header),
    ]);

    if differing.is_empty() {
        rows.push(vec![StyledCell::styled(
            "No machinery with different job titles found",
            CellStyle::Note,
        )]);
    } else {
        for (idx, machinery) in differing.iter().enumerate() {
            let style = if idx % 2 == 1 {
                CellStyle::Banded
            } else {
                CellStyle::Plain
            };
            rows.push(vec![
                StyledCell::styled((idx + 1).to_string(), style),
                StyledCell::styled(*machinery, style),
            ]);
        }
    }

    ReportSheet {
        name: DIFF_INDEX_SHEET.to_string(),
        column_widths: vec![(1, 50.0)],
        rows,
    }
}

/// Builds the count-reconciliation sheet. Every comparison row is included,
/// with the TOTAL row appended last.
pub fn count_report(comparison: &Comparison) -> ReportSheet {
    let columns = [
        "Machinery".to_string(),
        comparison.label_a.count_column(&comparison.label_b),
        comparison.label_b.count_column(&comparison.label_a),
        "Difference".to_string(),
    ];

    let mut rows = Vec::with_capacity(comparison.rows.len() + 2);
    rows.push(
        columns
            .iter()
            .map(|name| StyledCell::styled(name, CellStyle::Header))
            .collect(),
    );

    for row in &comparison.rows {
        let missing_side = row.count_a == 0 || row.count_b == 0;
        let unequal = row.count_a != row.count_b;

        let name_style = if missing_side {
            CellStyle::Absent
        } else {
            CellStyle::Plain
        };
        let count_style = if unequal {
            CellStyle::Divergent
        } else {
            CellStyle::Plain
        };
        let diff_style = if row.count_a > row.count_b {
            CellStyle::Surplus
        } else if row.count_a < row.count_b {
            CellStyle::Alert
        } else {
            CellStyle::Plain
        };

        rows.push(vec![
            StyledCell::styled(&row.machinery, name_style),
            StyledCell::styled(row.count_a.to_string(), count_style),
            StyledCell::styled(row.count_b.to_string(), count_style),
            StyledCell::styled(row.count_diff.to_string(), diff_style),
        ]);
    }

    rows.push(vec![
        StyledCell::styled("TOTAL", CellStyle::Emphasis),
        StyledCell::styled(comparison.total.count_a.to_string(), CellStyle::Emphasis),
        StyledCell::styled(comparison.total.count_b.to_string(), CellStyle::Emphasis),
        StyledCell::styled(comparison.total.count_diff.to_string(), CellStyle::Emphasis),
    ]);

    ReportSheet {
        name: COUNT_SHEET.to_string(),
        column_widths: Vec::new(),
        rows,
    }
}
