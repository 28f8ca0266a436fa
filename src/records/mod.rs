//! Typed row, insert and update shapes for every table.
//!
//! Each table gets three structs:
//! - **Row**: a record as stored and read back, every column present
//! - **Insert**: the create payload, system-generated and nullable columns optional
//! - **Update**: the patch payload, every column optional
//!
//! [`Table`] ties a table name to its three shapes so generic code can work
//! over any table.

pub mod nullable;
pub mod students;
pub mod test_results;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::schema::TableSchema;

pub use students::{StudentInsert, StudentRow, StudentUpdate, Students};
pub use test_results::{TestResultInsert, TestResultRow, TestResultUpdate, TestResults};

/// A test result as stored in `test_results`
pub type TestResult = <TestResults as Table>::Row;

/// A student as stored in `students`
pub type Student = <Students as Table>::Row;

/// Which of a table's three shapes a payload takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shape {
    Row,
    Insert,
    Update,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Row => write!(f, "row"),
            Shape::Insert => write!(f, "insert"),
            Shape::Update => write!(f, "update"),
        }
    }
}

/// Decode a shape from a SQLite result row by column name
pub trait FromSqlRow: Sized {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self>;
}

/// A table and its three payload shapes
pub trait Table {
    const NAME: &'static str;

    type Row: Serialize + DeserializeOwned + FromSqlRow + Clone + PartialEq + fmt::Debug;
    type Insert: Serialize + DeserializeOwned + From<Self::Row> + Clone + PartialEq + fmt::Debug;
    type Update: Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug;

    /// Column metadata for this table
    fn schema() -> &'static TableSchema;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_shape_display_matches_value_names() {
        for shape in Shape::value_variants() {
            let parsed = Shape::from_str(&shape.to_string(), false).unwrap();
            assert_eq!(parsed, *shape);
        }
    }

    #[test]
    fn test_table_names_match_schema() {
        assert_eq!(TestResults::schema().name, TestResults::NAME);
        assert_eq!(Students::schema().name, Students::NAME);
    }
}
