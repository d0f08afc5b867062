//! Ancestors command.

use anyhow::Result;
use clap::Args;
use tenant_id::EntityId;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::decode::IdRow;
use super::CommandContext;

/// Show an identifier followed by each of its ancestors.
#[derive(Debug, Args)]
pub struct AncestorsCommand {
    /// Identifier to walk up from.
    id: String,
}

impl AncestorsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = EntityId::parse(&self.id).map_err(|err| CliError::invalid_id(&self.id, err))?;
        let rows = chain(&id);
        debug!(input = %self.id, depth = rows.len(), "walked ancestry");

        print_output(&rows, ctx.format);
        Ok(())
    }
}

/// The identifier itself, then its parents up to the customer.
fn chain(id: &EntityId) -> Vec<IdRow> {
    std::iter::once(id.clone())
        .chain(id.ancestors())
        .map(|id| IdRow::from(&id))
        .collect()
}
