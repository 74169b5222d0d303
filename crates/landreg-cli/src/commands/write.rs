//! Mutating commands: save, update and delete

use std::path::PathBuf;

use clap::Args;
use landreg_core::{CompleteLandDetailsDto, EntityId, LandDetails, LandDetailsService, Registry};
use landreg_core_types::RequestContext;

use super::{not_found, print_json, read_json, tagged};

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// JSON file holding a complete land details document
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Land details id
    pub id: EntityId,

    /// JSON file holding the replacement scalar fields
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Land details id
    pub id: EntityId,
}

pub fn execute_save<R: Registry>(
    ctx: &RequestContext,
    service: &mut LandDetailsService<R>,
    args: SaveArgs,
) -> anyhow::Result<()> {
    let dto: CompleteLandDetailsDto = read_json(&args.file)?;
    let saved = tagged(ctx, service.save(dto))?;
    print_json(&saved)
}

pub fn execute_update<R: Registry>(
    ctx: &RequestContext,
    service: &mut LandDetailsService<R>,
    args: UpdateArgs,
) -> anyhow::Result<()> {
    let details: LandDetails = read_json(&args.file)?;
    match tagged(ctx, service.update(args.id, &details))? {
        Some(updated) => print_json(&updated),
        None => Err(not_found(ctx, "update", args.id)),
    }
}

pub fn execute_delete<R: Registry>(
    ctx: &RequestContext,
    service: &mut LandDetailsService<R>,
    args: DeleteArgs,
) -> anyhow::Result<()> {
    if !tagged(ctx, service.delete(args.id))? {
        return Err(not_found(ctx, "delete", args.id));
    }
    println!("deleted {}", args.id);
    Ok(())
}
