//! `relaymap show` - Show the stored servers.

use anyhow::Result;
use colored::Colorize;
use relaymap::ServerRecord;

use super::Context;
use crate::cli::args::ShowArgs;
use crate::output::{self, OutputFormat};
use crate::store;

pub async fn execute(ctx: Context, args: ShowArgs) -> Result<()> {
    let snapshot = store::load(&ctx.store_path)?;

    let servers: Vec<ServerRecord> = match &args.country {
        Some(country) => snapshot.in_country(country).cloned().collect(),
        None => snapshot.servers.clone(),
    };

    output::print_servers(&servers, ctx.output_format)?;

    if ctx.output_format == OutputFormat::Pretty {
        let captured = snapshot
            .captured_at()
            .map_or_else(|| snapshot.timestamp.to_string(), |t| t.to_rfc3339());
        println!();
        println!(
            "{}",
            format!("{} of {} servers, captured {captured}", servers.len(), snapshot.servers.len()).dimmed()
        );
    }

    Ok(())
}
