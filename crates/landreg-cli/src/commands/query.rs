//! Read-only commands: list and show

use clap::Args;
use landreg_core::{EntityId, LandDetailsService, Registry};
use landreg_core_types::RequestContext;

use super::{not_found, print_json, tagged};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Land details id
    pub id: EntityId,
}

/// Print every record with owners, parcels and witnesses
pub fn execute_list<R: Registry>(
    ctx: &RequestContext,
    service: &LandDetailsService<R>,
) -> anyhow::Result<()> {
    let all = tagged(ctx, service.find_all())?;
    print_json(&all)
}

/// Print one record; an unknown id is an error
pub fn execute_show<R: Registry>(
    ctx: &RequestContext,
    service: &LandDetailsService<R>,
    args: ShowArgs,
) -> anyhow::Result<()> {
    match tagged(ctx, service.find_by_id(args.id))? {
        Some(dto) => print_json(&dto),
        None => Err(not_found(ctx, "show", args.id)),
    }
}
