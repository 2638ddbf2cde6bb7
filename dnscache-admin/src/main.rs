use std::sync::Arc;

use clap::{Parser, Subcommand};
use dnscache_admin::dialog::TerminalDialog;
use dnscache_admin::page::{AddForm, DeleteControl, ReloadFlag};
use dnscache_admin::{AdminPanel, ApiClient, CacheApi, DeleteOutcome, InsertOutcome, web};
use shared::config::Config;
use shared_http::api::EntryRow;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dnscache-admin", version, about = "Admin front-end for the DNS cache REST API")]
struct Cli {
    /// host:port of the cache API (overrides DNSCACHE_API_ADDRESS)
    #[arg(long, global = true)]
    api_address: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the admin page
    Serve,
    /// Print every cache entry
    List,
    /// Delete one entry by key, e.g. `google.com.A.`
    Delete {
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Insert a record
    Insert {
        #[arg(long)]
        key: String,
        #[arg(long = "type", value_name = "TYPE", default_value = "A")]
        record_type: String,
        #[arg(long)]
        value: String,
        /// Seconds; 0 keeps the entry forever
        #[arg(long, default_value = "0")]
        ttl: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so listings on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_address) = cli.api_address {
        config = config.with_api_address(api_address);
    }
    let client = ApiClient::from_config(&config)?;

    if let Err(e) = run(cli.command, &config, client).await {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(command: Command, config: &Config, client: ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Serve => web::serve(config, Arc::new(client)).await?,
        Command::List => print_entries(&client).await?,
        Command::Delete { key, yes } => {
            let dialog = TerminalDialog::new(yes);
            let panel = AdminPanel::new(Arc::new(client.clone()), dialog, dialog);
            let mut page = ReloadFlag::default();

            let outcome = panel
                .on_delete_click(&DeleteControl::new(key), &mut page)
                .await;
            if page.requested() {
                print_entries(&client).await?;
            }
            if outcome == DeleteOutcome::Failed {
                anyhow::bail!("delete failed");
            }
        }
        Command::Insert {
            key,
            record_type,
            value,
            ttl,
        } => {
            let dialog = TerminalDialog::default();
            let panel = AdminPanel::new(Arc::new(client.clone()), dialog, dialog);
            let mut page = ReloadFlag::default();
            let form = AddForm {
                url: key,
                record_type,
                ip: value,
                ttl,
            };

            let outcome = panel.on_add_submit(&form, &mut page).await;
            if page.requested() {
                print_entries(&client).await?;
            }
            if outcome == InsertOutcome::Failed {
                anyhow::bail!("insert failed");
            }
        }
    }

    Ok(())
}

async fn print_entries(client: &ApiClient) -> anyhow::Result<()> {
    let rows = EntryRow::from_listing(client.entries().await?);
    if rows.is_empty() {
        println!("(no entries)");
    }
    for row in rows {
        println!("{:<40} {:<20} {}", row.key, row.expires, row.value);
    }
    Ok(())
}
