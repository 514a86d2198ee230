use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use std::path::Path;
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::types::CellValue;

/// Load the first sheet of a workbook as a dense grid of cells.
///
/// The grid starts at cell A1 even when the sheet's used range does not,
/// so leading empty rows and columns keep their positions.
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::EmptyWorkbook(path.to_path_buf()))??;
    Ok(grid_from_range(&range))
}

fn grid_from_range(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((last_row, last_col)) = range.end() else {
        debug!("sheet is empty");
        return Vec::new();
    };

    (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(cell_from_data)
                        .unwrap_or(CellValue::Empty)
                })
                .collect()
        })
        .collect()
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(x) => CellValue::Float(*x),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => match data.as_datetime() {
            Some(dt) => CellValue::Text(dt.to_string()),
            None => CellValue::Text(data.to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
