//! `relaymap aggregate` - Run the pipeline on a local inventory document.

use anyhow::{Context as _, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

use super::Context;
use crate::cli::args::AggregateArgs;
use crate::output;

pub async fn execute(ctx: Context, args: AggregateArgs) -> Result<()> {
    let bytes = read_input(&args.input).await?;

    let servers = relaymap::aggregate(&bytes)
        .with_context(|| format!("cannot aggregate {}", args.input.display()))?;

    output::print_servers(&servers, ctx.output_format)
}

async fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        return Ok(buf);
    }

    std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}
