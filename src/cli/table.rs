//! Table command implementation.

use super::{CliError, TableFormat};
use diamond::Outcome;
use diamond::report::{rules_table, rules_table_csv, rules_table_json, rules_table_text};

/// Execute the table command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(outcome: Option<Outcome>, format: TableFormat) -> Result<(), CliError> {
    let mut rows = rules_table();
    if let Some(outcome) = outcome {
        rows.retain(|row| row.outcome == outcome);
    }

    match format {
        TableFormat::Text => print!("{}", rules_table_text(&rows)),
        TableFormat::Csv => print!("{}", rules_table_csv(&rows)),
        TableFormat::Json => println!("{}", rules_table_json(&rows)?),
    }
    Ok(())
}
