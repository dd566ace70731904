//! Grant and revoke commands - Change group membership

use clap::Args;
use connector_core::{Grant, ResourceId, ResourceKind};
use connector_galileo::{membership_entitlement, user_resource};
use tracing::info;

use super::Context;
use crate::error::CliResult;

/// Arguments for the grant and revoke commands
#[derive(Args, Debug)]
pub struct MembershipArgs {
    /// Target group
    #[arg(long, value_name = "GROUP_ID")]
    pub group: String,

    /// Account (payment reference number) to add or remove
    #[arg(long, value_name = "ACCOUNT_ID")]
    pub account: String,
}

/// Add an account to a group.
pub async fn grant(ctx: &Context, args: MembershipArgs) -> CliResult<()> {
    let group = ctx.resolve_group(&args.group).await?;
    let entitlement = membership_entitlement(&group);

    let customer = ctx
        .connector
        .client()
        .get_customer(&ctx.cancel, &args.account)
        .await?;
    let principal = user_resource(&args.account, &customer);

    ctx.syncer(ResourceKind::Group)?
        .grant(&ctx.cancel, &principal, &entitlement)
        .await?;

    info!(group = %args.group, account = %args.account, "Membership granted");
    println!("Granted {} to {}", entitlement.display_name, principal.display_name);
    Ok(())
}

/// Remove an account from a group.
pub async fn revoke(ctx: &Context, args: MembershipArgs) -> CliResult<()> {
    let group = ctx.resolve_group(&args.group).await?;
    let grant = Grant::new(
        membership_entitlement(&group),
        ResourceId::user(args.account.as_str()),
    );

    ctx.syncer(ResourceKind::Group)?
        .revoke(&ctx.cancel, &grant)
        .await?;

    info!(group = %args.group, account = %args.account, "Membership revoked");
    println!("Revoked {}", grant.id);
    Ok(())
}
