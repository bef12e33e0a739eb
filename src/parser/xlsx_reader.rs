use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};

use crate::{
    error::{AppError, Result},
    models::{Cell, TabularBuffer},
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read the first worksheet of an Excel workbook.
pub fn read_xlsx(bytes: &[u8]) -> Result<TabularBuffer> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Parse("workbook contains no sheets".into()))??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AppError::Parse("worksheet is empty".into()))?;

    let columns: Vec<String> = header.iter().map(|cell| to_cell(cell).to_string()).collect();
    let mut buffer = TabularBuffer::new(columns);

    for row in rows {
        let cells: Vec<Cell> = row.iter().map(to_cell).collect();
        // Formatted but blank rows at the end of a sheet are not data
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        buffer.rows.push(cells);
    }

    Ok(buffer)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.trim().to_string()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(n) => Cell::Float(*n),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Cell::Text(datetime.format(DATE_FORMAT).to_string()),
            None => Cell::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}
