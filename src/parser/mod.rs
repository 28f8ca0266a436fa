mod record;

pub use record::{check_file, check_lines, parse_record, CheckReport, LineFailure};
