use serde::{Deserialize, Serialize};

use super::{nullable, FromSqlRow, Table};
use crate::schema::{TableSchema, STUDENTS};

/// Marker for the `students` table
#[derive(Debug, Clone, Copy)]
pub struct Students;

impl Table for Students {
    const NAME: &'static str = "students";

    type Row = StudentRow;
    type Insert = StudentInsert;
    type Update = StudentUpdate;

    fn schema() -> &'static TableSchema {
        &STUDENTS
    }
}

/// An enrolled student's identity and placement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StudentRow {
    /// Unique admission number, the key `test_results` refer to
    pub admission_no: String,
    pub student_name: String,
    pub student_dob: String,
    pub student_gender: String,
    pub class: String,
    pub section_name: String,
    /// Position within the section
    pub roll_no: i64,
    pub father_name: String,
    pub mother_name: String,
}

/// Nothing in `students` is generated, so the insert payload matches the row
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StudentInsert {
    pub admission_no: String,
    pub student_name: String,
    pub student_dob: String,
    pub student_gender: String,
    pub class: String,
    pub section_name: String,
    pub roll_no: i64,
    pub father_name: String,
    pub mother_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StudentUpdate {
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
    pub student_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub student_dob: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub student_gender: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub class: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub section_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub roll_no: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub father_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::present"
    )]
    pub mother_name: Option<String>,
}

impl From<StudentRow> for StudentInsert {
    fn from(row: StudentRow) -> Self {
        Self {
            admission_no: row.admission_no,
            student_name: row.student_name,
            student_dob: row.student_dob,
            student_gender: row.student_gender,
            class: row.class,
            section_name: row.section_name,
            roll_no: row.roll_no,
            father_name: row.father_name,
            mother_name: row.mother_name,
        }
    }
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Patch a row, keeping every field the update leaves out
    pub fn apply(&self, row: &StudentRow) -> StudentRow {
        fn pick(new: &Option<String>, old: &str) -> String {
            new.clone().unwrap_or_else(|| old.to_string())
        }

        StudentRow {
            admission_no: pick(&self.admission_no, &row.admission_no),
            student_name: pick(&self.student_name, &row.student_name),
            student_dob: pick(&self.student_dob, &row.student_dob),
            student_gender: pick(&self.student_gender, &row.student_gender),
            class: pick(&self.class, &row.class),
            section_name: pick(&self.section_name, &row.section_name),
            roll_no: self.roll_no.unwrap_or(row.roll_no),
            father_name: pick(&self.father_name, &row.father_name),
            mother_name: pick(&self.mother_name, &row.mother_name),
        }
    }
}

impl FromSqlRow for StudentRow {
    fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            admission_no: row.get("admission_no")?,
            student_name: row.get("student_name")?,
            student_dob: row.get("student_dob")?,
            student_gender: row.get("student_gender")?,
            class: row.get("class")?,
            section_name: row.get("section_name")?,
            roll_no: row.get("roll_no")?,
            father_name: row.get("father_name")?,
            mother_name: row.get("mother_name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "admission_no": "ADM-042",
            "student_name": "Asha Verma",
            "student_dob": "2011-06-02",
            "student_gender": "F",
            "class": "7",
            "section_name": "B",
            "roll_no": 12,
            "father_name": "Ravi Verma",
            "mother_name": "Meena Verma"
        })
    }

    #[test]
    fn test_row_requires_every_field() {
        let row: StudentRow = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(row.roll_no, 12);

        for field in crate::schema::STUDENTS.column_names() {
            let mut value = sample_json();
            value.as_object_mut().unwrap().remove(field);
            assert!(
                serde_json::from_value::<StudentRow>(value.clone()).is_err(),
                "row accepted without {}",
                field
            );
            assert!(
                serde_json::from_value::<StudentInsert>(value).is_err(),
                "insert accepted without {}",
                field
            );
        }
    }

    #[test]
    fn test_row_rejects_null() {
        let mut value = sample_json();
        value["mother_name"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<StudentRow>(value).is_err());
    }

    #[test]
    fn test_update_all_optional() {
        let update: StudentUpdate =
            serde_json::from_value(json!({ "section_name": "C" })).unwrap();
        let row: StudentRow = serde_json::from_value(sample_json()).unwrap();

        let moved = update.apply(&row);
        assert_eq!(moved.section_name, "C");
        assert_eq!(moved.class, row.class);
        assert_eq!(moved.roll_no, row.roll_no);
        assert!(StudentUpdate::default().is_empty());
    }

    #[test]
    fn test_update_rejects_null() {
        for field in crate::schema::STUDENTS.column_names() {
            let mut body = serde_json::Map::new();
            body.insert(field.to_string(), serde_json::Value::Null);
            assert!(
                serde_json::from_value::<StudentUpdate>(body.into()).is_err(),
                "update accepted null {}",
                field
            );
        }
        let err = serde_json::from_value::<StudentUpdate>(json!({ "student_name": null }));
        assert!(err.is_err());
    }

    #[test]
    fn test_row_into_insert() {
        let row: StudentRow = serde_json::from_value(sample_json()).unwrap();
        let insert = StudentInsert::from(row.clone());
        assert_eq!(serde_json::to_value(&insert).unwrap(), serde_json::to_value(&row).unwrap());
    }
}
