use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Upload formats the parser understands, identified by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Xlsx,
}

impl FileKind {
    /// Extension check only; the file contents are not looked at.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(FileKind::Csv)
        } else if extension.eq_ignore_ascii_case("xlsx") {
            Some(FileKind::Xlsx)
        } else {
            None
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Csv => write!(f, "csv"),
            FileKind::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// A loosely typed cell as read from the file, before schema coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Spreadsheet error value such as `#N/A`
    Error(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Int(n) => write!(f, "{}", n),
            // Integral floats print without a trailing ".0"
            Cell::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Float(n) => write!(f, "{}", n),
            Cell::Bool(true) => write!(f, "TRUE"),
            Cell::Bool(false) => write!(f, "FALSE"),
            Cell::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Header names plus ordered rows, as produced by the parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularBuffer {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TabularBuffer {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Column names compare trimmed and case-insensitively (`QUANTITY` == `quantity`).
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}
