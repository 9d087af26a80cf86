//! `relaymap update` - Fetch the relay inventory and store the servers.

use anyhow::{Context as _, Result};
use colored::Colorize;
use relaymap::{Cancellation, Updater};
use tracing::info;

use super::Context;
use crate::cli::args::UpdateArgs;
use crate::output::{self, OutputFormat};
use crate::store;

pub async fn execute(ctx: Context, args: UpdateArgs) -> Result<()> {
    let client = ctx.client(args.url.as_deref(), args.timeout)?;
    let url = client.relays_url().to_string();
    let updater = Updater::new(client).url(url.as_str());

    let snapshot = updater
        .update(ctrl_c())
        .await
        .context("cannot update servers")?;

    if !args.no_store {
        store::save(&ctx.store_path, &snapshot)?;
        info!(path = %ctx.store_path.display(), "stored servers");
    }

    if args.stdout {
        println!("{}", relaymap::render_listing(&snapshot.servers));
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!(
                "{} {} servers, {} addresses",
                "Updated:".bold(),
                snapshot.servers.len().to_string().cyan().bold(),
                snapshot.address_count()
            );
            println!("{} {}", "Source:".bold(), url.dimmed());
            if !args.no_store {
                println!("{} {}", "Stored:".bold(), ctx.store_path.display());
            }
        }
        format => output::print_servers(&snapshot.servers, format)?,
    }

    Ok(())
}

/// Cancel the fetch when the user hits Ctrl-C.
fn ctrl_c() -> Cancellation {
    Box::pin(async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; never cancel.
            std::future::pending::<()>().await;
        }
    })
}
