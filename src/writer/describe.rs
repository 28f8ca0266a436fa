use crate::schema::{Column, TableSchema};

/// How a column appears in the row shape
fn row_form(col: &Column) -> String {
    let ty = col.col_type.shape_type();
    if col.nullable {
        format!("{} | null", ty)
    } else {
        ty.to_string()
    }
}

/// How a column appears in the insert shape
fn insert_form(col: &Column) -> String {
    let row = row_form(col);
    if col.insert_optional() {
        format!("{}?", row)
    } else {
        row
    }
}

/// Every column is optional in the update shape
fn update_form(col: &Column) -> String {
    format!("{}?", row_form(col))
}

/// Render a table's columns alongside their row, insert and update forms
pub fn describe_table(schema: &TableSchema) -> String {
    let headers = ["column", "sql", "row", "insert", "update"];
    let rows: Vec<[String; 5]> = schema
        .columns
        .iter()
        .map(|col| {
            let mut name = col.name.to_string();
            if col.name == schema.primary_key {
                name.push_str(" (pk)");
            }
            [
                name,
                col.col_type.sql_type().to_string(),
                row_form(col),
                insert_form(col),
                update_form(col),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = format!("Table: {}\n\n", schema.name);
    out.push_str(&render(&headers));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render(&cells));
        out.push('\n');
    }

    for fk in schema.foreign_keys {
        out.push_str(&format!(
            "\n{} -> {}.{}",
            fk.column, fk.references_table, fk.references_column
        ));
    }
    if !schema.foreign_keys.is_empty() {
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{STUDENTS, TEST_RESULTS};

    fn line_for<'a>(out: &'a str, column: &str) -> &'a str {
        out.lines()
            .find(|l| l.split_whitespace().next() == Some(column))
            .unwrap()
    }

    #[test]
    fn test_describe_test_results_forms() {
        let out = describe_table(&TEST_RESULTS);

        let id: Vec<_> = line_for(&out, "id").split_whitespace().collect();
        assert_eq!(id, vec!["id", "(pk)", "INTEGER", "integer", "integer?", "integer?"]);

        let attendance: Vec<_> = line_for(&out, "attendance")
            .split("  ")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            attendance,
            vec!["attendance", "INTEGER", "boolean | null", "boolean | null?", "boolean | null?"]
        );

        assert!(out.contains("admission_no -> students.admission_no"));
    }

    #[test]
    fn test_describe_students_all_required_on_insert() {
        let out = describe_table(&STUDENTS);
        let roll: Vec<_> = line_for(&out, "roll_no").split_whitespace().collect();
        assert_eq!(roll, vec!["roll_no", "INTEGER", "integer", "integer", "integer?"]);
        assert!(!out.contains("->"));
    }
}
