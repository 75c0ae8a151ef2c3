//! Materialises report sheets as an Excel workbook.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use crate::shipcheck::tools::error::Result;
use crate::shipcheck::tools::report::{CellStyle, ReportSheet, StyledCell};

const FILL_YELLOW: Color = Color::RGB(0xFFEB9C);
const FILL_RED: Color = Color::RGB(0xFFC7CE);
const FILL_GREEN: Color = Color::RGB(0xC6EFCE);
const FILL_BLUE: Color = Color::RGB(0xDDEBF7);
const FONT_RED: Color = Color::RGB(0x9C0006);
const FONT_GREEN: Color = Color::RGB(0x006100);

/// Writes the provided sheets to the given path.
pub fn write_report(path: &Path, sheets: &[ReportSheet]) -> Result<()> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (column, width) in &sheet.column_widths {
            worksheet.set_column_width(*column, *width)?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                match cell_format(cell) {
                    Some(format) => {
                        worksheet.write_string_with_format(
                            row_idx as u32,
                            col_idx as u16,
                            &cell.text,
                            &format,
                        )?;
                    }
                    None => {
                        worksheet.write_string(row_idx as u32, col_idx as u16, &cell.text)?;
                    }
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn cell_format(cell: &StyledCell) -> Option<Format> {
    if cell.style == CellStyle::Plain && !cell.wrap {
        return None;
    }

    let mut format = match cell.style {
        CellStyle::Plain => Format::new(),
        CellStyle::Header | CellStyle::Emphasis => Format::new().set_bold(),
        CellStyle::Divergent => Format::new().set_background_color(FILL_YELLOW),
        CellStyle::Alert => Format::new()
            .set_background_color(FILL_RED)
            .set_font_color(FONT_RED),
        CellStyle::Absent => Format::new().set_background_color(FILL_RED).set_bold(),
        CellStyle::Surplus => Format::new()
            .set_background_color(FILL_GREEN)
            .set_font_color(FONT_GREEN),
        CellStyle::Banded => Format::new().set_background_color(FILL_BLUE),
        CellStyle::Note => Format::new().set_italic(),
    };

    if cell.wrap {
        format = format.set_text_wrap().set_align(FormatAlign::Top);
    }

    Some(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_unwrapped_cells_carry_no_format() {
        let cell = StyledCell::plain("x");
        assert!(cell_format(&cell).is_none());
    }

    #[test]
    fn styled_and_wrapped_cells_carry_formats() {
        let mut cell = StyledCell::styled("x", CellStyle::Alert);
        assert!(cell_format(&cell).is_some());

        cell.style = CellStyle::Plain;
        cell.wrap = true;
        assert!(cell_format(&cell).is_some());
    }
}
