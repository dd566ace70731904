//! List command - Sync every page of a resource type

use clap::Args;
use connector_core::{collect_pages, ResourceId, ResourceKind};
use tracing::info;

use super::{print_json, Context};
use crate::error::CliResult;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource type to list (user or group)
    pub resource_type: ResourceKind,

    /// List users that are members of this group
    #[arg(long, value_name = "GROUP_ID")]
    pub parent: Option<String>,
}

pub async fn execute(ctx: &Context, args: ListArgs) -> CliResult<()> {
    let syncer = ctx.syncer(args.resource_type)?;
    let parent = args.parent.map(ResourceId::group);

    let syncer = &syncer;
    let parent = parent.as_ref();
    let cancel = &ctx.cancel;
    let resources = collect_pages(|token| async move {
        syncer.list(cancel, parent, &token).await
    })
    .await?;

    info!(
        resource_type = %args.resource_type,
        count = resources.len(),
        "Listed resources"
    );
    print_json(&resources)
}
