use csv::{ReaderBuilder, Trim};

use crate::{
    error::{AppError, Result},
    models::{Cell, TabularBuffer},
};

/// Read a comma separated file with a header row. Every value stays text;
/// coercion happens during validation.
pub fn read_csv(bytes: &[u8]) -> Result<TabularBuffer> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(AppError::Parse("file has no header row".into()));
    }

    let mut buffer = TabularBuffer::new(columns);
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|value| {
                if value.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(value.to_string())
                }
            })
            .collect();
        buffer.rows.push(row);
    }

    Ok(buffer)
}
