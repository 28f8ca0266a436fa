//! Table schema definitions for the school database

use super::types::*;

// =============================================================================
// Independent Tables (no FK dependencies)
// =============================================================================

pub static STUDENTS: TableSchema = TableSchema {
    name: "students",
    primary_key: "admission_no",
    columns: &[
        Column::required("admission_no", ColumnType::Text),
        Column::required("student_name", ColumnType::Text),
        Column::required("student_dob", ColumnType::Date),
        Column::required("student_gender", ColumnType::Text),
        Column::required("class", ColumnType::Text),
        Column::required("section_name", ColumnType::Text),
        Column::required("roll_no", ColumnType::Integer),
        Column::required("father_name", ColumnType::Text),
        Column::required("mother_name", ColumnType::Text),
    ],
    foreign_keys: &[],
};

// =============================================================================
// Level 1 Dependencies
// =============================================================================

pub static TEST_RESULTS: TableSchema = TableSchema {
    name: "test_results",
    primary_key: "id",
    columns: &[
        Column::generated("id", ColumnType::Integer),
        Column::required("admission_no", ColumnType::Text),
        Column::required("subject_name", ColumnType::Text),
        Column::required("marks_obtained", ColumnType::Real),
        Column::required("max_marks", ColumnType::Real),
        Column::required("test_date", ColumnType::Date),
        Column::new("attendance", ColumnType::Boolean),
        Column::new("test_category", ColumnType::Text),
    ],
    foreign_keys: &[ForeignKey::new("admission_no", "students", "admission_no")],
};

/// All tables in dependency order (parents before children)
pub static ALL_TABLES: &[&TableSchema] = &[&STUDENTS, &TEST_RESULTS];

/// Look up a table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
