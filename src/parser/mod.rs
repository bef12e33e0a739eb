//! Turns uploaded bytes into a [`TabularBuffer`].
//!
//! The first row of a file is its header. Only the first worksheet of a
//! workbook is read.

pub mod csv_reader;
pub mod xlsx_reader;

use crate::{
    error::Result,
    models::{FileKind, TabularBuffer},
};

pub use csv_reader::read_csv;
pub use xlsx_reader::read_xlsx;

/// Parse `bytes` according to the file kind picked from the upload's name.
pub fn parse(kind: FileKind, bytes: &[u8]) -> Result<TabularBuffer> {
    let buffer = match kind {
        FileKind::Csv => read_csv(bytes)?,
        FileKind::Xlsx => read_xlsx(bytes)?,
    };

    tracing::debug!(
        %kind,
        columns = buffer.columns.len(),
        rows = buffer.row_count(),
        "parsed upload"
    );
    Ok(buffer)
}
