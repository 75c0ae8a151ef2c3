use std::fs;

use calamine::{Reader, Xlsx, open_workbook};
use shipcheck_tools::io::excel_write;
use shipcheck_tools::{ToolError, compare, report};
use tempfile::tempdir;

#[test]
fn csv_pair_compares_end_to_end() {
    let dir = tempdir().expect("temporary directory");
    let first = dir.path().join("Federal Thunderbay 25032025.csv");
    let second = dir.path().join("Federal Thunderbay Job List 24032025.csv");

    fs::write(
        &first,
        "Vessel,Machinery Location,Title\n\
         Federal Thunderbay,Mooring WinchP1,Brake test\n\
         Federal Thunderbay,Mooring WinchP1,Wire renewal\n\
         Federal Thunderbay,AnchorS1,Inspect chain\n\
         Federal Thunderbay,,Orphan job\n",
    )
    .expect("first file written");
    fs::write(
        &second,
        "Vessel,Machinery,Job Title\n\
         Federal Thunderbay,Mooring WinchPort1,Brake test\n\
         Federal Thunderbay,AnchorStarboard1,Inspect chain\n\
         Federal Thunderbay,AnchorStarboard1,Paint shank\n",
    )
    .expect("second file written");

    let comparison = compare::compare_files(&first, &second).expect("comparison succeeds");

    assert_eq!(comparison.label_a.vessel, "Federal Thunderbay");
    assert_eq!(comparison.label_a.date, "25-03-2025");
    assert_eq!(comparison.label_b.date, "24-03-2025");

    // Variant spellings collide; the blank-machinery row vanished entirely.
    let keys: Vec<&str> = comparison
        .rows
        .iter()
        .map(|row| row.machinery.as_str())
        .collect();
    assert_eq!(keys, ["Anchor S1", "Mooring Winch P1"]);

    let anchor = &comparison.rows[0];
    assert!(anchor.has_differences);
    assert!(anchor.only_in_a.is_empty());
    assert!(anchor.only_in_b.contains("Paint shank"));
    assert!(anchor.common.contains("Inspect chain"));
    assert_eq!((anchor.count_a, anchor.count_b, anchor.count_diff), (1, 2, -1));

    let winch = &comparison.rows[1];
    assert!(winch.has_differences);
    assert!(winch.only_in_a.contains("Wire renewal"));
    assert!(winch.common.contains("Brake test"));
    assert_eq!((winch.count_a, winch.count_b, winch.count_diff), (2, 1, 1));

    assert_eq!(comparison.total.count_a, 3);
    assert_eq!(comparison.total.count_b, 3);
    assert_eq!(comparison.total.count_diff, 0);

    let titles_path = dir.path().join("titles.xlsx");
    excel_write::write_report(&titles_path, &report::title_report(&comparison))
        .expect("title report written");
    let counts_path = dir.path().join("counts.xlsx");
    excel_write::write_report(&counts_path, &[report::count_report(&comparison)])
        .expect("count report written");

    let mut workbook: Xlsx<_> = open_workbook(&titles_path).expect("title report reopened");
    let range = workbook
        .worksheet_range(report::TITLE_SHEET)
        .expect("comparison sheet present")
        .expect("comparison sheet readable");

    let header: Vec<String> = range
        .rows()
        .next()
        .expect("header row")
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    // Same vessel on both sides, so the columns fall back to file ordinals.
    assert_eq!(
        header,
        [
            "Machinery",
            "Has Differences",
            "Common Titles",
            "Titles only in Federal Thunderbay (File 1)",
            "Titles only in Federal Thunderbay (File 2)",
        ]
    );

    let anchor_row: Vec<String> = range
        .rows()
        .nth(1)
        .expect("first data row")
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(
        anchor_row,
        ["Anchor S1", "Yes", "Inspect chain", "-", "Paint shank"]
    );

    let index_range = workbook
        .worksheet_range(report::DIFF_INDEX_SHEET)
        .expect("index sheet present")
        .expect("index sheet readable");
    let listed: Vec<String> = index_range
        .rows()
        .skip(3)
        .filter_map(|row| row.get(1))
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(listed, ["Anchor S1", "Mooring Winch P1"]);

    let mut counts_workbook: Xlsx<_> = open_workbook(&counts_path).expect("count report reopened");
    let counts_range = counts_workbook
        .worksheet_range(report::COUNT_SHEET)
        .expect("count sheet present")
        .expect("count sheet readable");
    let last_row: Vec<String> = counts_range
        .rows()
        .last()
        .expect("total row")
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(last_row, ["TOTAL", "3", "3", "0"]);
}

#[test]
fn missing_title_column_is_fatal_with_diagnostics() {
    let dir = tempdir().expect("temporary directory");
    let first = dir.path().join("a 01012025.csv");
    let second = dir.path().join("b 02012025.csv");

    fs::write(&first, "Machinery,Notes\nAnchor,ok\n").expect("first file written");
    fs::write(&second, "Machinery,Job Title\nAnchor,Inspect chain\n").expect("second file written");

    let error = compare::compare_files(&first, &second).expect_err("comparison fails");
    match error {
        ToolError::MissingColumn { available, .. } => {
            assert_eq!(available, ["Machinery", "Notes"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_comparison_degrades_to_empty_sentinel() {
    let dir = tempdir().expect("temporary directory");
    let missing = dir.path().join("not there 01012025.csv");
    let second = dir.path().join("b 02012025.csv");
    fs::write(&second, "Machinery,Job Title\nAnchor,Inspect chain\n").expect("second file written");

    let comparison = compare::compare_files_or_empty(&missing, &second);
    assert!(comparison.is_empty());
    assert_eq!(comparison.label_a.vessel, "Unknown Vessel");
    assert_eq!(comparison.label_a.date, "01-01-2025");
    assert_eq!(comparison.total.count_a, 0);
}

#[test]
fn semicolon_delimited_exports_are_sniffed() {
    let dir = tempdir().expect("temporary directory");
    let first = dir.path().join("a 01012025.csv");
    let second = dir.path().join("b 02012025.csv");

    fs::write(
        &first,
        "Vessel;Machinery;Job Title\nAurora;AnchorP1;Inspect chain\n",
    )
    .expect("first file written");
    fs::write(
        &second,
        "Vessel;Machinery;Job Title\nAurora;AnchorPort1;Inspect chain\n",
    )
    .expect("second file written");

    let comparison = compare::compare_files(&first, &second).expect("comparison succeeds");
    assert_eq!(comparison.rows.len(), 1);
    let row = &comparison.rows[0];
    assert_eq!(row.machinery, "Anchor P1");
    assert!(!row.has_differences);
    assert_eq!(row.count_diff, 0);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempdir().expect("temporary directory");
    let first = dir.path().join("a 01012025.parquet");
    let second = dir.path().join("b 02012025.csv");
    fs::write(&first, "ignored").expect("first file written");
    fs::write(&second, "Machinery,Job Title\nAnchor,Inspect chain\n").expect("second file written");

    let error = compare::compare_files(&first, &second).expect_err("comparison fails");
    assert!(matches!(error, ToolError::UnsupportedFormat(_)));
}
