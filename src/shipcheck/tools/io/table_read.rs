//! Tabular ingestion: delimited text files and Excel workbooks are loaded
//! into a uniform header-plus-rows [`Table`], from which the machinery and
//! job-title columns are located by header alias.

use std::io::Read;
use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::debug;

use crate::shipcheck::tools::error::{ColumnKind, Result, ToolError};
use crate::shipcheck::tools::model::RawRecord;

/// Accepted header aliases for the machinery/location column, in preference
/// order.
pub const MACHINERY_ALIASES: &[&str] = &[
    "Machinery",
    "Machinery Location",
    "Component Name",
    "System Name",
];

const VESSEL_COLUMN: &str = "Vessel";
const UNKNOWN_VESSEL: &str = "Unknown Vessel";

/// One fully-materialised input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Loads a tabular file, dispatching on its extension.
pub fn read_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" | "tsv" | "txt" => read_delimited(path),
        "xlsx" | "xlsm" => read_workbook(path),
        _ => Err(ToolError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn read_delimited(path: &Path) -> Result<Table> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    debug!(delimiter = %(delimiter as char), "delimiter sniffed");
    parse_delimited(&content, delimiter, path)
}

/// Reads the file and converts to UTF-8 if needed. Excel-exported CSVs are
/// commonly WINDOWS-1252 encoded.
fn read_file_as_utf8(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(error) => {
            let bytes = error.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Detects the most likely field delimiter by checking consistency across the
/// first few lines. The delimiter producing the most consistent field count
/// (>1 field) wins; higher field counts break ties.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delimiter in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delimiter)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|record| record.ok())
                    .map(|record| record.len())
                    .unwrap_or(1)
            })
            .collect();

        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&count| count == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }

    best
}

fn parse_delimited(content: &str, delimiter: u8, path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record?
            .iter()
            .map(|field| field.trim().to_string())
            .collect(),
        None => return Err(ToolError::EmptyTable(path.to_path_buf())),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}

fn read_workbook(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::EmptyTable(path.to_path_buf()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::EmptyTable(path.to_path_buf()))?
        .map_err(ToolError::from)?;

    let mut row_iter = range.rows();
    let headers = match row_iter.next() {
        Some(first_row) => first_row
            .iter()
            .map(|cell| cell_to_string(Some(cell)).trim().to_string())
            .collect(),
        None => return Err(ToolError::EmptyTable(path.to_path_buf())),
    };

    let rows = row_iter
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .collect();

    Ok(Table { headers, rows })
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Locates the machinery column by alias.
pub fn find_machinery_column(headers: &[String]) -> Result<usize> {
    for alias in MACHINERY_ALIASES {
        if let Some(index) = headers.iter().position(|header| header == alias) {
            return Ok(index);
        }
    }
    Err(ToolError::MissingColumn {
        kind: ColumnKind::Machinery,
        available: headers.to_vec(),
    })
}

/// Locates the job-title column. "Job Title" is preferred over "Title"; when
/// the header repeats, the last occurrence carries the data. Exports that
/// went through a dataframe round trip rename the repeat to "Job Title.1".
pub fn find_title_column(headers: &[String]) -> Result<usize> {
    if let Some(index) = headers.iter().rposition(|header| header == "Job Title") {
        return Ok(index);
    }
    if let Some(index) = headers.iter().position(|header| header == "Title") {
        return Ok(index);
    }
    if let Some(index) = headers.iter().position(|header| header == "Job Title.1") {
        return Ok(index);
    }
    Err(ToolError::MissingColumn {
        kind: ColumnKind::JobTitle,
        available: headers.to_vec(),
    })
}

/// First non-blank value of the optional Vessel column.
pub fn vessel_name(table: &Table) -> String {
    let Some(index) = table.headers.iter().position(|header| header == VESSEL_COLUMN) else {
        return UNKNOWN_VESSEL.to_string();
    };
    table
        .rows
        .iter()
        .filter_map(|row| row.get(index))
        .map(|value| value.trim())
        .find(|value| !value.is_empty() && !value.eq_ignore_ascii_case("nan"))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_VESSEL.to_string())
}

/// Derives the date label from the filename: the trailing whitespace-delimited
/// token of the stem, reformatted `DDMMYYYY` → `DD-MM-YYYY` when it starts
/// with eight digits. Malformed tokens pass through verbatim.
pub fn date_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let token = stem.split_whitespace().last().unwrap_or_default();

    let bytes = token.as_bytes();
    if bytes.len() >= 8 && bytes[..8].iter().all(u8::is_ascii_digit) {
        format!("{}-{}-{}", &token[0..2], &token[2..4], &token[4..8])
    } else {
        debug!(token, "filename carries no date code, using token verbatim");
        token.to_string()
    }
}

/// Projects the located columns out of the table. Blank cells become `None`.
pub fn records_from(table: &Table, machinery: usize, title: usize) -> Vec<RawRecord> {
    table
        .rows
        .iter()
        .map(|row| RawRecord {
            machinery: non_blank(row.get(machinery)),
            job_title: non_blank(row.get(title)),
        })
        .collect()
}

fn non_blank(cell: Option<&String>) -> Option<String> {
    cell.map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn sniffs_common_delimiters() {
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter("a;b;c\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc\n1\t2\t3\n"), b'\t');
        assert_eq!(sniff_delimiter("a|b|c\n1|2|3\n"), b'|');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn parses_header_and_rows() {
        let table = parse_delimited(
            "Machinery,Title\nAnchorP1,Inspect chain\n",
            b',',
            &PathBuf::from("in.csv"),
        )
        .unwrap();
        assert_eq!(table.headers, headers(&["Machinery", "Title"]));
        assert_eq!(table.rows, vec![vec!["AnchorP1".to_string(), "Inspect chain".to_string()]]);
    }

    #[test]
    fn machinery_aliases_resolve_in_order() {
        assert_eq!(
            find_machinery_column(&headers(&["Vessel", "Machinery Location", "Title"])).unwrap(),
            1
        );
        assert_eq!(
            find_machinery_column(&headers(&["Component Name", "Machinery"])).unwrap(),
            1
        );

        let error = find_machinery_column(&headers(&["Vessel", "Title"])).unwrap_err();
        assert!(matches!(
            error,
            ToolError::MissingColumn {
                kind: ColumnKind::Machinery,
                ..
            }
        ));
    }

    #[test]
    fn job_title_outranks_title() {
        assert_eq!(
            find_title_column(&headers(&["Title", "Job Title"])).unwrap(),
            1
        );
        assert_eq!(find_title_column(&headers(&["Title"])).unwrap(), 0);
        assert_eq!(
            find_title_column(&headers(&["Machinery", "Job Title.1"])).unwrap(),
            1
        );
    }

    #[test]
    fn repeated_job_title_header_uses_last_occurrence() {
        assert_eq!(
            find_title_column(&headers(&["Job Title", "Machinery", "Job Title"])).unwrap(),
            2
        );
    }

    #[test]
    fn vessel_falls_back_to_placeholder() {
        let table = Table {
            headers: headers(&["Machinery", "Title"]),
            rows: vec![],
        };
        assert_eq!(vessel_name(&table), "Unknown Vessel");

        let table = Table {
            headers: headers(&["Vessel", "Machinery"]),
            rows: vec![
                vec!["".to_string(), "Anchor".to_string()],
                vec!["  Aurora ".to_string(), "Anchor".to_string()],
            ],
        };
        assert_eq!(vessel_name(&table), "Aurora");
    }

    #[test]
    fn date_token_is_reformatted() {
        assert_eq!(
            date_label(Path::new("VesselName 25032025.csv")),
            "25-03-2025"
        );
        assert_eq!(
            date_label(Path::new("/data/Federal Thunderbay Job List 24032025.xlsx")),
            "24-03-2025"
        );
    }

    #[test]
    fn malformed_date_tokens_pass_through() {
        assert_eq!(date_label(Path::new("VesselName export.csv")), "export");
        assert_eq!(date_label(Path::new("VesselName 2503.csv")), "2503");
    }

    #[test]
    fn records_blank_cells_become_none() {
        let table = Table {
            headers: headers(&["Machinery", "Title"]),
            rows: vec![
                vec!["Anchor".to_string(), " ".to_string()],
                vec!["".to_string(), "Orphan".to_string()],
                vec!["Winch".to_string()],
            ],
        };
        let records = records_from(&table, 0, 1);
        assert_eq!(records[0].machinery.as_deref(), Some("Anchor"));
        assert_eq!(records[0].job_title, None);
        assert_eq!(records[1].machinery, None);
        assert_eq!(records[2].machinery.as_deref(), Some("Winch"));
        assert_eq!(records[2].job_title, None);
    }
}
