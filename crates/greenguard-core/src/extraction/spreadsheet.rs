use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::GreenGuardError;
use crate::extraction::TextExtractor;

/// Flattens the first worksheet of an xlsx workbook into text.
///
/// Each non-empty row becomes one line with its cells separated by two
/// spaces, so a label cell and its reading land on the same line.
pub struct SpreadsheetExtractor;

impl TextExtractor for SpreadsheetExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, GreenGuardError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| GreenGuardError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

        let first = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| GreenGuardError::Spreadsheet("workbook has no sheets".into()))?;

        let sheet = workbook
            .worksheet_range(&first)
            .map_err(|e| GreenGuardError::Spreadsheet(format!("sheet '{first}' unreadable: {e}")))?;

        let lines: Vec<String> = sheet
            .rows()
            .map(row_to_line)
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }

    fn backend_name(&self) -> &str {
        "calamine"
    }
}

fn row_to_line(row: &[calamine::Data]) -> String {
    row.iter()
        .filter_map(cell_as_string)
        .collect::<Vec<_>>()
        .join("  ")
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    #[test]
    fn test_row_to_line_skips_empty_cells() {
        let row = vec![
            Data::String("Diesel".into()),
            Data::Empty,
            Data::Float(40.0),
            Data::String("  ".into()),
            Data::Int(3800),
        ];
        assert_eq!(row_to_line(&row), "Diesel  40  3800");
    }

    #[test]
    fn test_float_cells_keep_fraction() {
        assert_eq!(cell_as_string(&Data::Float(35.5)).as_deref(), Some("35.5"));
    }

    #[test]
    fn test_invalid_workbook_is_error() {
        assert!(matches!(
            SpreadsheetExtractor.extract(b"not a zip"),
            Err(GreenGuardError::Spreadsheet(_))
        ));
    }
}
