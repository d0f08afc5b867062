//! Check command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tenant_id::EntityId;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{display_option, print_failure, print_output, print_success, OutputFormat};

use super::CommandContext;

/// Validate identifiers.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identifiers to validate.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Error", display = "display_option")]
    error: Option<String>,
}

fn check(input: String) -> CheckRow {
    match EntityId::parse(&input) {
        Ok(id) => {
            debug!(kind = %id.id_type(), input = %input, "valid identifier");
            CheckRow {
                id: input,
                valid: true,
                error: None,
            }
        }
        Err(err) => {
            warn!(input = %input, error = %err, "rejected identifier");
            CheckRow {
                id: input,
                valid: false,
                error: Some(err.to_string()),
            }
        }
    }
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let total = self.ids.len();
        let rows: Vec<_> = self.ids.into_iter().map(check).collect();

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            OutputFormat::Table => {
                for row in &rows {
                    match &row.error {
                        None => print_success(&row.id),
                        Some(error) => print_failure(&format!("{}: {}", row.id, error)),
                    }
                }
            }
        }

        let failed = rows.iter().filter(|row| !row.valid).count();
        if failed > 0 {
            return Err(CliError::Rejected { failed, total }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid() {
        let row = check("T0101".to_string());
        assert!(row.valid);
        assert_eq!(row.error, None);
    }

    #[test]
    fn test_check_invalid_keeps_reason() {
        let row = check("V0ABC".to_string());
        assert!(!row.valid);
        let error = row.error.unwrap();
        assert!(error.contains("'V0ABC'"), "{error}");
        assert!(error.contains("CustomerId"), "{error}");
    }

    #[test]
    fn test_table_shows_dash_for_valid_rows() {
        let rows = [check("V01".to_string()), check("W01".to_string())];
        let table = tabled::Table::new(&rows).to_string();
        assert!(table.contains("Error"), "{table}");
        assert!(table.contains(" - "), "{table}");
        assert!(table.contains("unknown ID tag 'W'"), "{table}");
    }

    #[test]
    fn test_check_reserved_tag() {
        let row = check("P01010101".to_string());
        assert!(!row.valid);
    }
}
