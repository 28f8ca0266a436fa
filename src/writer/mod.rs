mod describe;
mod schema_gen;

pub use describe::describe_table;
pub use schema_gen::{generate_create_table, generate_indexes, generate_schema};
