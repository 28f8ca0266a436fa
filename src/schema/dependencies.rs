use super::tables::ALL_TABLES;
use super::types::TableSchema;
use crate::error::SchemaError;
use std::collections::{HashMap, HashSet, VecDeque};

/// Resolves table dependencies for filtering
pub struct DependencyResolver {
    /// Known tables in declaration order
    tables: Vec<&'static TableSchema>,
    /// Map of table name -> tables it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        Self::from_tables(ALL_TABLES)
    }

    /// Resolver over an arbitrary set of tables
    pub fn from_tables(tables: &[&'static TableSchema]) -> Self {
        let deps = tables
            .iter()
            .map(|table| (table.name, table.dependencies()))
            .collect();

        Self {
            tables: tables.to_vec(),
            deps,
        }
    }

    fn get_table(&self, name: &str) -> Option<&'static TableSchema> {
        self.tables.iter().find(|t| t.name == name).copied()
    }

    /// Given a set of requested tables, resolve all required dependencies
    /// Returns tables in dependency order (parents before children)
    pub fn resolve_includes(
        &self,
        requested: &[&str],
    ) -> Result<Vec<&'static TableSchema>, SchemaError> {
        let mut included: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = requested.iter().copied().collect();

        while let Some(table_name) = queue.pop_front() {
            if included.contains(table_name) {
                continue;
            }

            if self.get_table(table_name).is_none() {
                return Err(SchemaError::UnknownTable(table_name.to_string()));
            }

            included.insert(table_name);

            if let Some(table_deps) = self.deps.get(table_name) {
                for dep in table_deps {
                    if !included.contains(dep) {
                        queue.push_back(dep);
                    }
                }
            }
        }

        self.topological_sort(&included)
    }

    /// Given a set of tables to exclude, return remaining tables in order
    pub fn resolve_excludes(
        &self,
        excluded: &[&str],
    ) -> Result<Vec<&'static TableSchema>, SchemaError> {
        for name in excluded {
            if self.get_table(name).is_none() {
                return Err(SchemaError::UnknownTable(name.to_string()));
            }
        }

        let excluded_set: HashSet<&str> = excluded.iter().copied().collect();
        let mut included: HashSet<&str> = HashSet::new();

        for table in &self.tables {
            if excluded_set.contains(table.name) {
                continue;
            }
            // A table referencing an excluded parent would dangle
            let parent_excluded = table
                .foreign_keys
                .iter()
                .any(|fk| excluded_set.contains(fk.references_table));

            if !parent_excluded {
                included.insert(table.name);
            }
        }

        self.topological_sort(&included)
    }

    /// Return all tables in dependency order
    pub fn all_tables_ordered(&self) -> Result<Vec<&'static TableSchema>, SchemaError> {
        let all: HashSet<&str> = self.tables.iter().map(|t| t.name).collect();
        self.topological_sort(&all)
    }

    /// Topological sort of tables by dependencies
    fn topological_sort(
        &self,
        included: &HashSet<&str>,
    ) -> Result<Vec<&'static TableSchema>, SchemaError> {
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut temp_visited: HashSet<&str> = HashSet::new();

        // Walk in declaration order so the output is stable
        for table in &self.tables {
            if included.contains(table.name) && !visited.contains(table.name) {
                self.visit(
                    table.name,
                    included,
                    &mut visited,
                    &mut temp_visited,
                    &mut result,
                )?;
            }
        }

        Ok(result)
    }

    fn visit<'a>(
        &self,
        name: &'a str,
        included: &HashSet<&'a str>,
        visited: &mut HashSet<&'a str>,
        temp_visited: &mut HashSet<&'a str>,
        result: &mut Vec<&'static TableSchema>,
    ) -> Result<(), SchemaError> {
        if temp_visited.contains(name) {
            return Err(SchemaError::CircularDependency(name.to_string()));
        }
        if visited.contains(name) {
            return Ok(());
        }

        temp_visited.insert(name);

        if let Some(deps) = self.deps.get(name) {
            for dep in deps {
                if included.contains(dep) {
                    self.visit(dep, included, visited, temp_visited, result)?;
                }
            }
        }

        temp_visited.remove(name);
        visited.insert(name);

        if let Some(table) = self.get_table(name) {
            result.push(table);
        }

        Ok(())
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}
