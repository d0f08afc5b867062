//! Kinds command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tenant_id::IdType;

use crate::output::print_output;

use super::CommandContext;

/// List every identifier kind and its tag.
#[derive(Debug, Args)]
pub struct KindsCommand {
    /// Only list kinds that can be decoded.
    #[arg(long)]
    implemented: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Tag")]
    tag: char,

    #[tabled(rename = "Kind")]
    kind: IdType,

    #[tabled(rename = "Name")]
    name: &'static str,

    #[tabled(rename = "Level")]
    level: usize,

    #[tabled(rename = "Resource")]
    resource: bool,

    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<IdType> for KindRow {
    fn from(kind: IdType) -> Self {
        Self {
            tag: kind.tag(),
            kind,
            name: kind.slug(),
            level: kind.level(),
            resource: kind.is_resource(),
            status: if kind.is_implemented() {
                "available"
            } else {
                "reserved"
            },
        }
    }
}

impl KindsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<KindRow> = IdType::ALL
            .into_iter()
            .filter(|kind| !self.implemented || kind.is_implemented())
            .map(KindRow::from)
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_mark_reserved_kinds() {
        let rows: Vec<_> = IdType::ALL.into_iter().map(KindRow::from).collect();
        assert_eq!(rows.len(), 10);

        let reserved: Vec<_> = rows
            .iter()
            .filter(|row| row.status == "reserved")
            .map(|row| row.tag)
            .collect();
        assert_eq!(reserved, ['P', 'O', 'N', 'M']);
    }

    #[test]
    fn test_row_fields() {
        let row = KindRow::from(IdType::OrganizationResource);
        assert_eq!(row.tag, 'S');
        assert_eq!(row.name, "organization_resource");
        assert_eq!(row.level, 2);
        assert!(row.resource);
        assert_eq!(row.status, "available");
    }
}
