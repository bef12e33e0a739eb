use std::collections::HashMap;

use crate::{
    error::{AppError, Result},
    models::{
        Cell, ColumnSpec, FileKind, TRANSACTION_SCHEMA, TabularBuffer,
        TransactionRecord, buffer::normalize_column_name,
    },
};

/// Checks uploads against the fixed transaction schema.
///
/// Validation is all or nothing: a single bad column name or cell rejects
/// the whole upload. Nothing here touches the warehouse.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    schema: &'static [ColumnSpec],
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self {
            schema: &TRANSACTION_SCHEMA,
        }
    }
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unsupported uploads by name, before any bytes are parsed.
    pub fn check_file_type(&self, file_name: &str) -> Result<FileKind> {
        FileKind::from_file_name(file_name)
            .ok_or_else(|| AppError::UnsupportedFileType(file_name.to_string()))
    }

    /// Map every schema column to its position in `columns`.
    ///
    /// The names must form exactly the schema's set: order is free, case is
    /// ignored, and missing, extra or repeated names are a mismatch.
    pub fn check_columns(&self, columns: &[String]) -> Result<Vec<usize>> {
        if columns.len() != self.schema.len() {
            return Err(AppError::SchemaMismatch);
        }

        let mut positions = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if positions.insert(normalize_column_name(column), index).is_some() {
                return Err(AppError::SchemaMismatch);
            }
        }

        self.schema
            .iter()
            .map(|spec| positions.get(spec.name).copied().ok_or(AppError::SchemaMismatch))
            .collect()
    }

    /// Validate a parsed buffer and coerce every row to a record.
    pub fn validate(&self, buffer: &TabularBuffer) -> Result<Vec<TransactionRecord>> {
        let mapping = self.check_columns(&buffer.columns)?;

        buffer
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let row = RowReader {
                    cells: row,
                    number: i + 1,
                    mapping: &mapping,
                    schema: self.schema,
                };
                row.to_record()
            })
            .collect()
    }
}

/// One data row, read through the column mapping.
struct RowReader<'a> {
    cells: &'a [Cell],
    /// 1-based, header excluded
    number: usize,
    mapping: &'a [usize],
    schema: &'static [ColumnSpec],
}

impl RowReader<'_> {
    fn to_record(&self) -> Result<TransactionRecord> {
        Ok(TransactionRecord {
            invoice: self.required(0, coerce_text)?,
            stockcode: self.required(1, coerce_text)?,
            description: self.field(2, coerce_text)?,
            quantity: self.required(3, coerce_integer)?,
            invoicedate: self.required(4, coerce_text)?,
            price: self.required(5, coerce_decimal)?,
            customerid: self.field(6, coerce_integer)?,
            country: self.required(7, coerce_text)?,
        })
    }

    /// Empty cells in nullable columns read as `None`.
    fn field<T>(&self, column: usize, coerce: fn(&Cell) -> Option<T>) -> Result<Option<T>> {
        let spec = &self.schema[column];
        let cell = self.cells.get(self.mapping[column]).unwrap_or(&Cell::Empty);

        if spec.nullable && cell.is_empty() {
            return Ok(None);
        }

        coerce(cell).map(Some).ok_or_else(|| AppError::TypeCoercion {
            column: spec.name.to_string(),
            row: self.number,
            value: cell.to_string(),
            expected: spec.column_type.as_str(),
        })
    }

    fn required<T>(&self, column: usize, coerce: fn(&Cell) -> Option<T>) -> Result<T> {
        debug_assert!(!self.schema[column].nullable);
        self.field(column, coerce)?.ok_or_else(|| {
            AppError::Internal(format!("column {} is nullable", self.schema[column].name))
        })
    }
}

fn coerce_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Error(_) => None,
        other => Some(other.to_string()),
    }
}

fn coerce_integer(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(n) => Some(*n),
        Cell::Float(f) => integral(*f),
        Cell::Text(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn coerce_decimal(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Int(n) => Some(*n as f64),
        Cell::Float(f) if f.is_finite() => Some(*f),
        Cell::Text(text) => text.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(value as i64)
    } else {
        None
    }
}
