// Row reading: workbook cells -> raw rows keyed by header label

pub mod workbook;

use crate::error::Result;
use crate::types::{CellValue, RawRow};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Read the first sheet of `path` into raw rows, in sheet order
#[instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let grid = workbook::read_first_sheet(path)?;
    let rows = rows_from_grid(grid);
    info!("📄 Read {} data rows", rows.len());
    Ok(rows)
}

/// Turn a cell grid into raw rows.
///
/// The first grid row holds the header labels (trimmed). Rows whose cells
/// are all blank are skipped. Columns with an empty label are left out;
/// cells past the end of the header row are keyed `col_{index}`.
pub fn rows_from_grid<I>(grid: I) -> Vec<RawRow>
where
    I: IntoIterator<Item = Vec<CellValue>>,
{
    let mut grid = grid.into_iter();
    let headers: Vec<String> = match grid.next() {
        Some(cells) => cells.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for (offset, cells) in grid.enumerate() {
        if cells.iter().all(CellValue::is_blank) {
            // sheet rows are 1-based and the header is row 1
            debug!(row = offset + 2, "skipping blank row");
            continue;
        }

        let mut row = RawRow::with_capacity(cells.len());
        for (index, cell) in cells.into_iter().enumerate() {
            let label = headers
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("col_{index}"));
            if !label.is_empty() {
                row.insert(label, cell);
            }
        }
        rows.push(row);
    }
    rows
}
