use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::records::Shape;

#[derive(Parser, Debug)]
#[command(name = "school-records")]
#[command(version, about = "Inspect and check the school test_results/students schema")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "school_records=debug")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all table names
    ListTables,

    /// Show a table's columns with their row, insert and update forms
    Describe {
        /// Table name
        table: String,
    },

    /// Print the schema as SQLite DDL
    Ddl {
        /// Only include these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Exclude these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every line of a JSONL file matches a table shape
    Check {
        /// Table name
        table: String,

        /// JSONL file to check
        input: PathBuf,

        /// Shape the records should take
        #[arg(short, long, value_enum, default_value_t = Shape::Row)]
        shape: Shape,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from([
            "school-records",
            "check",
            "test_results",
            "results.jsonl",
            "--shape",
            "insert",
        ])
        .unwrap();

        match cli.command {
            Commands::Check { table, input, shape } => {
                assert_eq!(table, "test_results");
                assert_eq!(input, PathBuf::from("results.jsonl"));
                assert_eq!(shape, Shape::Insert);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_parse_ddl_filters() {
        let cli = Cli::try_parse_from([
            "school-records",
            "--log-level",
            "debug",
            "ddl",
            "--include",
            "students,test_results",
        ])
        .unwrap();

        match cli.command {
            Commands::Ddl { include, exclude, output } => {
                assert_eq!(
                    include,
                    Some(vec!["students".to_string(), "test_results".to_string()])
                );
                assert!(exclude.is_none());
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
