//! Grants command - Show a group's members

use clap::Args;
use connector_core::{collect_pages, ResourceKind};

use super::{print_json, Context};
use crate::error::CliResult;

/// Arguments for the grants command
#[derive(Args, Debug)]
pub struct GrantsArgs {
    /// Group whose membership grants are listed
    #[arg(long, value_name = "GROUP_ID")]
    pub group: String,
}

pub async fn execute(ctx: &Context, args: GrantsArgs) -> CliResult<()> {
    let group = ctx.resolve_group(&args.group).await?;
    let syncer = ctx.syncer(ResourceKind::Group)?;

    let (syncer, group, cancel) = (&syncer, &group, &ctx.cancel);
    let grants = collect_pages(|token| async move {
        syncer.grants(cancel, group, &token).await
    })
    .await?;

    print_json(&grants)
}
