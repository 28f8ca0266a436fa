pub mod cli;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod records;
pub mod schema;
pub mod writer;

pub use cli::{Cli, Commands};
pub use error::SchemaError;
pub use records::{Shape, Student, Table, TestResult};
