//! Decode command.

use anyhow::Result;
use chrono::SecondsFormat;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;
use tenant_id::{EntityId, IdType};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{display_option, print_output};

use super::CommandContext;

/// Decode identifiers of any kind.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Identifiers to decode.
    #[arg(required = true)]
    ids: Vec<String>,
}

/// One decoded identifier.
#[derive(Debug, Clone, Serialize, Tabled)]
pub(super) struct IdRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "Kind")]
    pub kind: IdType,

    #[tabled(rename = "Tag")]
    pub tag: char,

    #[tabled(rename = "Components", display = "display_components")]
    pub components: Vec<u64>,

    #[tabled(rename = "Root")]
    pub root: String,

    #[tabled(rename = "Parent", display = "display_option")]
    pub parent: Option<String>,

    #[tabled(rename = "Object ID", display = "display_option")]
    pub object_id: Option<String>,

    #[tabled(rename = "Created", display = "display_option")]
    pub created_at: Option<String>,
}

impl From<&EntityId> for IdRow {
    fn from(id: &EntityId) -> Self {
        let object_id = id.object_id();
        Self {
            id: id.to_string(),
            kind: id.id_type(),
            tag: id.id_type().tag(),
            components: id.components().iter().map(|c| c.value()).collect(),
            root: id.root().to_string(),
            parent: id.parent().map(|parent| parent.to_string()),
            object_id: object_id.map(|oid| oid.to_string()),
            created_at: object_id
                .and_then(|oid| oid.created_at())
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

fn display_components(components: &[u64]) -> String {
    components
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let total = self.ids.len();
        let mut rows = Vec::with_capacity(total);
        let mut errors = Vec::new();

        for input in self.ids {
            match EntityId::parse(&input) {
                Ok(id) => {
                    debug!(kind = %id.id_type(), input = %input, "decoded identifier");
                    rows.push(IdRow::from(&id));
                }
                Err(err) => {
                    warn!(input = %input, error = %err, "rejected identifier");
                    errors.push(CliError::invalid_id(input, err));
                }
            }
        }

        if total == 1 {
            if let Some(err) = errors.pop() {
                return Err(err.into());
            }
        }

        print_output(&rows, ctx.format);

        if errors.is_empty() {
            return Ok(());
        }
        for err in &errors {
            eprintln!("{} {}", "Error:".red().bold(), err);
        }
        Err(CliError::Rejected {
            failed: errors.len(),
            total,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_for_plain_id() {
        let id = EntityId::parse("R010203").unwrap();
        let row = IdRow::from(&id);
        assert_eq!(row.kind, IdType::Institution);
        assert_eq!(row.tag, 'R');
        assert_eq!(row.components, [1, 2, 3]);
        assert_eq!(row.root, "V01");
        assert_eq!(row.parent.as_deref(), Some("T0102"));
        assert_eq!(row.object_id, None);
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn test_row_for_resource_id() {
        let id = EntityId::parse("U016603f7b32b1753f84a719e01").unwrap();
        let row = IdRow::from(&id);
        assert_eq!(row.kind, IdType::CustomerResource);
        assert_eq!(row.parent.as_deref(), Some("V01"));
        assert_eq!(row.object_id.as_deref(), Some("6603f7b32b1753f84a719e01"));
        assert_eq!(row.created_at.as_deref(), Some("2024-03-27T10:40:51Z"));
    }

    #[test]
    fn test_row_json_shape() {
        let row = IdRow::from(&EntityId::parse("T0102").unwrap());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["kind"], "organization");
        assert_eq!(json["components"], serde_json::json!([1, 2]));
        assert_eq!(json["object_id"], serde_json::Value::Null);
    }

    #[test]
    fn test_table_uses_display_helpers() {
        let rows = [IdRow::from(&EntityId::parse("R010203").unwrap())];
        let table = tabled::Table::new(&rows).to_string();
        assert!(table.contains("Components"), "{table}");
        assert!(table.contains("1/2/3"), "{table}");
        assert!(table.contains(" - "), "{table}");
    }

    #[test]
    fn test_display_components() {
        assert_eq!(display_components(&[1, 32, 1280]), "1/32/1280");
        assert_eq!(display_components(&[]), "");
    }
}
