use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use crate::error::SchemaError;
use crate::records::{Shape, Students, Table, TestResults};

/// A JSON line that did not match the expected shape
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line: usize,
    pub message: String,
}

/// Outcome of checking a JSONL stream against one shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub total: usize,
    pub valid: usize,
    pub failures: Vec<LineFailure>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for the console
    pub fn summary(&self, input: &Path, table: &str, shape: Shape, elapsed: Duration) -> String {
        format!(
            "Checked {} records in {} against the {} {} shape: {} valid, {} invalid in {:?}",
            self.total,
            input.display(),
            table,
            shape,
            self.valid,
            self.failures.len(),
            elapsed
        )
    }
}

/// Parse a JSON line into the given shape
pub fn parse_record<S: DeserializeOwned>(line: &str) -> Result<S> {
    serde_json::from_str(line).context("Failed to parse JSON")
}

/// Check every non-blank line of a JSONL stream against shape `S`
pub fn check_lines<S: DeserializeOwned, R: BufRead>(reader: R) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }

        report.total += 1;
        match serde_json::from_str::<S>(&line) {
            Ok(_) => report.valid += 1,
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "record does not match shape");
                report.failures.push(LineFailure {
                    line: idx + 1,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

fn check_table<T: Table, R: BufRead>(reader: R, shape: Shape) -> Result<CheckReport> {
    tracing::debug!(table = T::NAME, %shape, "checking records");
    match shape {
        Shape::Row => check_lines::<T::Row, _>(reader),
        Shape::Insert => check_lines::<T::Insert, _>(reader),
        Shape::Update => check_lines::<T::Update, _>(reader),
    }
}

/// Check a JSONL file against one shape of the named table
pub fn check_file(path: &Path, table: &str, shape: Shape) -> Result<CheckReport> {
    let file = File::open(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let reader = BufReader::new(file);

    if table == TestResults::NAME {
        check_table::<TestResults, _>(reader, shape)
    } else if table == Students::NAME {
        check_table::<Students, _>(reader, shape)
    } else {
        Err(SchemaError::UnknownTable(table.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{TestResultInsert, TestResultUpdate};
    use std::io::Cursor;

    const INSERTS: &str = r#"{"admission_no":"A1","subject_name":"Art","marks_obtained":9,"max_marks":10,"test_date":"2024-01-10"}

{"admission_no":"A1","subject_name":"Art","max_marks":10,"test_date":"2024-01-10"}
{"admission_no":"A2","subject_name":"Art","marks_obtained":7,"max_marks":10,"test_date":"2024-01-10","attendance":true}
"#;

    #[test]
    fn test_parse_record() {
        let insert: TestResultInsert = parse_record(
            r#"{"admission_no":"A1","subject_name":"Art","marks_obtained":9,"max_marks":10,"test_date":"2024-01-10"}"#,
        )
        .unwrap();
        assert_eq!(insert.subject_name, "Art");
        assert!(parse_record::<TestResultInsert>("not json").is_err());
    }

    #[test]
    fn test_check_lines_reports_failing_line_numbers() {
        let report = check_lines::<TestResultInsert, _>(Cursor::new(INSERTS)).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line, 3);
        assert!(report.failures[0].message.contains("marks_obtained"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_every_insert_is_a_valid_update() {
        let report = check_lines::<TestResultUpdate, _>(Cursor::new(INSERTS)).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.valid, 3);
    }

    #[test]
    fn test_summary_names_file_and_shape() {
        let report = check_lines::<TestResultInsert, _>(Cursor::new(INSERTS)).unwrap();
        let line = report.summary(
            Path::new("data/results.jsonl"),
            "test_results",
            Shape::Insert,
            Duration::from_millis(3),
        );

        assert_eq!(
            line,
            "Checked 3 records in data/results.jsonl against the test_results insert shape: \
             2 valid, 1 invalid in 3ms"
        );
    }

    #[test]
    fn test_check_table_dispatches_on_shape() {
        let report = check_table::<TestResults, _>(Cursor::new(INSERTS), Shape::Row).unwrap();
        // Rows need id, attendance and test_category keys
        assert_eq!(report.valid, 0);
    }
}
