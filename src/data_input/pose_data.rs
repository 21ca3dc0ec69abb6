// src/data_input/pose_data.rs

use std::error::Error;
use std::fmt;

/// One 3-component vector as read from the file.
pub type Vec3 = [f64; 3];

/// Minimum fields per data row: nine numeric columns plus the trailing label.
pub const MIN_FIELDS: usize = 10;

/// A single pose sample parsed from one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRecord {
    pub label: String,      // Identifying filename, last field of the row.
    pub translation: Vec3,  // Fields 0-2 (X, Y, Z).
    pub rotation: Vec3,     // Fields 3-5 (X, Y, Z).
    pub euler_angles: Vec3, // Fields 6-8 (X, Y, Z).
}

/// Why a data row was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    TooFewFields { found: usize },
    InvalidNumber { column: usize, value: String },
    Csv(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::TooFewFields { found } => {
                write!(f, "expected at least {} fields, found {}", MIN_FIELDS, found)
            }
            RowError::InvalidNumber { column, value } => {
                write!(f, "field {} is not a number: '{}'", column, value)
            }
            RowError::Csv(message) => write!(f, "CSV read error: {}", message),
        }
    }
}

impl Error for RowError {}

/// A dropped row together with its reason. Collected so callers can inspect
/// exactly what was skipped instead of scraping console output.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row_number: usize, // 1-based data row index; the header is not counted.
    pub raw: String,       // The offending row, comma-joined.
    pub reason: RowError,
}

/// All records and skipped rows from one parse, in file order.
#[derive(Debug, Default, Clone)]
pub struct PoseDataSet {
    pub records: Vec<PoseRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl PoseDataSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record labels, in file order. Index i here refers to the same source
    /// row as index i of the three vector sequences below.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn translations(&self) -> Vec<Vec3> {
        self.records.iter().map(|r| r.translation).collect()
    }

    pub fn rotations(&self) -> Vec<Vec3> {
        self.records.iter().map(|r| r.rotation).collect()
    }

    pub fn euler_angles(&self) -> Vec<Vec3> {
        self.records.iter().map(|r| r.euler_angles).collect()
    }
}


// src/data_input/pose_data.rs
