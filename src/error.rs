/// Errors raised while looking up or ordering table schemas
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),
    #[error("Cannot use both --include and --exclude at the same time")]
    ConflictingFilters,
    #[error("Circular dependency detected at: {0}")]
    CircularDependency(String),
}
