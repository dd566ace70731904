//! Entitlements command - Show what a group offers

use clap::Args;
use connector_core::{collect_pages, ResourceKind};

use super::{print_json, Context};
use crate::error::CliResult;

/// Arguments for the entitlements command
#[derive(Args, Debug)]
pub struct EntitlementsArgs {
    /// Group whose entitlements are listed
    #[arg(long, value_name = "GROUP_ID")]
    pub group: String,
}

pub async fn execute(ctx: &Context, args: EntitlementsArgs) -> CliResult<()> {
    let group = ctx.resolve_group(&args.group).await?;
    let syncer = ctx.syncer(ResourceKind::Group)?;

    let (syncer, group, cancel) = (&syncer, &group, &ctx.cancel);
    let entitlements = collect_pages(|token| async move {
        syncer.entitlements(cancel, group, &token).await
    })
    .await?;

    print_json(&entitlements)
}
