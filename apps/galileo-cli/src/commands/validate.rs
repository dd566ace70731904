//! Validate command - Check credentials against the API

use clap::Args;
use connector_core::Connector;

use super::Context;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

pub async fn execute(ctx: &Context, _args: ValidateArgs) -> CliResult<()> {
    ctx.connector.validate(&ctx.cancel).await?;

    let metadata = ctx.connector.metadata();
    println!("{}: credentials are valid", metadata.display_name);
    Ok(())
}
