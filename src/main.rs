use anyhow::{anyhow, Context, Result};
use school_records::{
    cli::{Cli, Commands},
    filter::resolve_tables,
    logging::init_logging,
    parser::check_file,
    schema::{get_table, table_names},
    writer::{describe_table, generate_schema},
    SchemaError,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::ListTables => {
            println!("Available tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }

        Commands::Describe { table } => {
            let schema = get_table(&table).ok_or(SchemaError::UnknownTable(table))?;
            print!("{}", describe_table(schema));
        }

        Commands::Ddl {
            include,
            exclude,
            output,
        } => {
            let tables = resolve_tables(include, exclude)?;
            let script = generate_schema(&tables);

            match output {
                Some(path) => {
                    std::fs::write(&path, &script)
                        .with_context(|| format!("Failed to write: {:?}", path))?;
                    tracing::info!("wrote DDL for {} tables to {:?}", tables.len(), path);
                }
                None => print!("{}", script),
            }
        }

        Commands::Check {
            table,
            input,
            shape,
        } => {
            let start = Instant::now();
            let report = check_file(&input, &table, shape)?;

            for failure in &report.failures {
                eprintln!("line {}: {}", failure.line, failure.message);
            }

            println!(
                "{}",
                report.summary(&input, &table, shape, start.elapsed())
            );

            if !report.is_clean() {
                return Err(anyhow!(
                    "{} of {} records in {} do not match the {} shape",
                    report.failures.len(),
                    report.total,
                    table,
                    shape
                ));
            }
        }
    }

    Ok(())
}
