use serde::{Deserialize, Serialize};

use super::{nullable, FromSqlRow, Table};
use crate::schema::{TableSchema, TEST_RESULTS};

/// Marker for the `test_results` table
#[derive(Debug, Clone, Copy)]
pub struct TestResults;

impl Table for TestResults {
    const NAME: &'static str = "test_results";

    type Row = TestResultRow;
    type Insert = TestResultInsert;
    type Update = TestResultUpdate;

    fn schema() -> &'static TableSchema {
        &TEST_RESULTS
    }
}

/// One scored test entry for a student.
///
/// `marks_obtained` is expected not to exceed `max_marks`; the type does not
/// check it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestResultRow {
    pub id: i64,
    /// References `students.admission_no`
    pub admission_no: String,
    pub subject_name: String,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub test_date: String,
    /// No attendance usually means no score was recorded
    #[serde(deserialize_with = "nullable::required")]
    pub attendance: Option<bool>,
    /// e.g. "midterm", "final"
    #[serde(deserialize_with = "nullable::required")]
    pub test_category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestResultInsert {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub id: Option<i64>,
    pub admission_no: String,
    pub subject_name: String,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub test_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestResultUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub admission_no: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub subject_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub marks_obtained: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub max_marks: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub test_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::deserialize"
    )]
    pub attendance: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::deserialize"
    )]
    pub test_category: Option<Option<String>>,
}

impl TestResultInsert {
    /// Insert payload with only the required columns set
    pub fn new(
        admission_no: impl Into<String>,
        subject_name: impl Into<String>,
        marks_obtained: f64,
        max_marks: f64,
        test_date: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            admission_no: admission_no.into(),
            subject_name: subject_name.into(),
            marks_obtained,
            max_marks,
            test_date: test_date.into(),
            attendance: None,
            test_category: None,
        }
    }
}

impl From<TestResultRow> for TestResultInsert {
    fn from(row: TestResultRow) -> Self {
        Self {
            id: Some(row.id),
            admission_no: row.admission_no,
            subject_name: row.subject_name,
            marks_obtained: row.marks_obtained,
            max_marks: row.max_marks,
            test_date: row.test_date,
            attendance: row.attendance,
            test_category: row.test_category,
        }
    }
}

impl TestResultUpdate {
    /// True when the update would leave a row unchanged
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Patch a row: absent fields keep their value, explicit nulls clear
    pub fn apply(&self, row: &TestResultRow) -> TestResultRow {
        TestResultRow {
            id: self.id.unwrap_or(row.id),
            admission_no: self
                .admission_no
                .clone()
                .unwrap_or_else(|| row.admission_no.clone()),
            subject_name: self
                .subject_name
                .clone()
                .unwrap_or_else(|| row.subject_name.clone()),
            marks_obtained: self.marks_obtained.unwrap_or(row.marks_obtained),
            max_marks: self.max_marks.unwrap_or(row.max_marks),
            test_date: self
                .test_date
                .clone()
                .unwrap_or_else(|| row.test_date.clone()),
            attendance: self.attendance.unwrap_or(row.attendance),
            test_category: self
                .test_category
                .clone()
                .unwrap_or_else(|| row.test_category.clone()),
        }
    }
}

impl FromSqlRow for TestResultRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            admission_no: row.get("admission_no")?,
            subject_name: row.get("subject_name")?,
            marks_obtained: row.get("marks_obtained")?,
            max_marks: row.get("max_marks")?,
            test_date: row.get("test_date")?,
            attendance: row.get("attendance")?,
            test_category: row.get("test_category")?,
        })
    }
}
