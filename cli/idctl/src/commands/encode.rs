//! Encode command.

use anyhow::{Context, Result};
use clap::Args;
use tenant_id::{
    Component, CustomerId, CustomerResourceId, EntityId, IdError, IdType, InstitutionId,
    InstitutionResourceId, ObjectId, OrganizationId, OrganizationResourceId,
};
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::decode::IdRow;
use super::CommandContext;

/// Build an identifier from its kind and components.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Identifier kind: a name like `organization-resource` or a tag like `S`.
    kind: String,

    /// Ancestry components, outermost first (decimal or 0x-prefixed hex).
    #[arg(required = true)]
    components: Vec<String>,

    /// Object id for resource kinds (24 hex characters).
    #[arg(long)]
    object_id: Option<String>,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind: IdType = self.kind.parse()?;

        let components = self
            .components
            .iter()
            .map(|input| parse_component(input))
            .collect::<Result<Vec<_>, _>>()?;

        let object_id = self
            .object_id
            .as_deref()
            .map(|input| {
                ObjectId::parse(input)
                    .map_err(IdError::from)
                    .with_context(|| format!("Invalid object id '{input}'"))
            })
            .transpose()?;

        let id = build(kind, &components, object_id)?;
        debug!(kind = %kind, id = %id, "encoded identifier");

        match ctx.format {
            OutputFormat::Table => println!("{id}"),
            OutputFormat::Json => print_single(&IdRow::from(&id)),
        }
        Ok(())
    }
}

/// Parse a component written in decimal or with a `0x` prefix.
fn parse_component(input: &str) -> Result<Component, CliError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };

    let invalid = |reason: String| CliError::InvalidComponent {
        input: input.to_string(),
        reason,
    };
    let value = parsed.map_err(|e| invalid(e.to_string()))?;
    Component::new(value).map_err(|e| invalid(e.to_string()))
}

/// Build an identifier, checking arity and object-id presence against `kind`.
fn build(
    kind: IdType,
    components: &[Component],
    object_id: Option<ObjectId>,
) -> Result<EntityId, CliError> {
    if !kind.is_implemented() {
        return Err(CliError::Reserved(kind));
    }
    if components.len() != kind.level() {
        return Err(CliError::Arity {
            kind,
            expected: kind.level(),
            actual: components.len(),
        });
    }

    let id: EntityId = match (kind, components, object_id) {
        (_, _, None) if kind.is_resource() => return Err(CliError::MissingObjectId(kind)),
        (_, _, Some(_)) if !kind.is_resource() => {
            return Err(CliError::UnexpectedObjectId(kind))
        }
        (IdType::Customer, &[cid], None) => CustomerId::new(cid).into(),
        (IdType::CustomerResource, &[cid], Some(oid)) => CustomerResourceId::new(cid, oid).into(),
        (IdType::Organization, &[cid, id], None) => OrganizationId::new(cid, id).into(),
        (IdType::OrganizationResource, &[cid, oid], Some(obj)) => {
            OrganizationResourceId::new(cid, oid, obj).into()
        }
        (IdType::Institution, &[cid, oid, id], None) => InstitutionId::new(cid, oid, id).into(),
        (IdType::InstitutionResource, &[cid, oid, iid], Some(obj)) => {
            InstitutionResourceId::new(cid, oid, iid, obj).into()
        }
        _ => return Err(CliError::Reserved(kind)),
    };
    Ok(id)
}
