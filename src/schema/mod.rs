//! Static column metadata for the school database, kept in step with the
//! typed shapes in `crate::records`.

pub mod dependencies;
pub mod tables;
pub mod types;

pub use dependencies::*;
pub use tables::*;
pub use types::*;
