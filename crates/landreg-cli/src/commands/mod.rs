//! Subcommand implementations

pub mod query;
pub mod write;

use std::path::Path;

use anyhow::Context;
use landreg_core::errors::{ExError, ExErrorKind};
use landreg_core::EntityId;
use landreg_core_types::RequestContext;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Attach the invocation's request id to a service error
fn tagged<T>(ctx: &RequestContext, result: landreg_core::Result<T>) -> anyhow::Result<T> {
    result.map_err(|err| err.with_request_id(ctx.request_id.clone()).into())
}

fn not_found(ctx: &RequestContext, op: &str, id: EntityId) -> anyhow::Error {
    ExError::new(ExErrorKind::NotFound)
        .with_op(op)
        .with_entity_id(id)
        .with_request_id(ctx.request_id.clone())
        .with_message("land details not found")
        .into()
}
