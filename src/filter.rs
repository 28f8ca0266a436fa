use crate::error::SchemaError;
use crate::schema::{DependencyResolver, TableSchema};

/// Resolves which tables to process based on include/exclude filters
pub fn resolve_tables(
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> Result<Vec<&'static TableSchema>, SchemaError> {
    let resolver = DependencyResolver::new();

    match (include, exclude) {
        (Some(_), Some(_)) => Err(SchemaError::ConflictingFilters),
        (Some(include_list), None) => {
            let refs: Vec<&str> = include_list.iter().map(|s| s.as_str()).collect();
            tracing::debug!(tables = ?refs, "resolving dependencies");
            let tables = resolver.resolve_includes(&refs)?;

            tracing::info!("including {} tables", tables.len());
            for t in &tables {
                tracing::debug!("  - {}", t.name);
            }

            Ok(tables)
        }
        (None, Some(exclude_list)) => {
            let refs: Vec<&str> = exclude_list.iter().map(|s| s.as_str()).collect();
            tracing::debug!(tables = ?refs, "excluding tables");
            let tables = resolver.resolve_excludes(&refs)?;

            tracing::info!("including {} tables (after exclusions)", tables.len());

            Ok(tables)
        }
        (None, None) => {
            let tables = resolver.all_tables_ordered()?;
            tracing::info!("including all {} tables", tables.len());
            Ok(tables)
        }
    }
}
