//! `creator-watch` command line.
//!
//! `collect` writes the creator's assets to the address file, `register`
//! pushes that file to the webhook, `sync` does both in one process.
//! Exit status is 0 on success, otherwise [`Error::exit_code`].

use clap::{Args, Parser, Subcommand};
use creator_watch::prelude::*;
use creator_watch::shared::join_ids;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// Log level or filter directive (e.g. `debug`, `creator_watch=trace`)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate the creator's assets and write them to the address file
    Collect {
        #[command(flatten)]
        collect: CollectArgs,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Replace the webhook's monitored addresses with the address file
    Register {
        #[command(flatten)]
        register: RegisterArgs,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Collect, write the address file, then register in one run
    Sync {
        #[command(flatten)]
        collect: CollectArgs,
        #[command(flatten)]
        register: RegisterArgs,
        #[command(flatten)]
        state: StateArgs,
    },
}

#[derive(Args, Debug)]
struct CollectArgs {
    /// Creator address (overrides CREATOR_ADDRESS)
    #[arg(long)]
    creator: Option<String>,
    /// Items per page, 1-1000 (overrides PAGE_SIZE)
    #[arg(long)]
    page_size: Option<u32>,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Callback URL (overrides WEBHOOK_URL)
    #[arg(long)]
    webhook_url: Option<String>,
    /// Webhook to update (overrides WEBHOOK_ID)
    #[arg(long)]
    webhook_id: Option<String>,
}

#[derive(Args, Debug)]
struct StateArgs {
    /// Address file (overrides ADDRESSES_PATH)
    #[arg(long)]
    addresses_path: Option<PathBuf>,
}

impl CollectArgs {
    fn apply(self, config: &mut Config) {
        if let Some(creator) = self.creator {
            config.creator = Some(creator);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
    }
}

impl RegisterArgs {
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.webhook_url {
            config.webhook_url = Some(url);
        }
        if let Some(id) = self.webhook_id {
            config.webhook_id = Some(id);
        }
    }
}

impl StateArgs {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.addresses_path {
            config.addresses_path = path;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let opts = Opts::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(opts.log_level.as_str())
        .with_target(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", e);
    }

    match run(opts.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(command: Command) -> Result<(), Error> {
    let mut config = Config::load()?;

    match command {
        Command::Collect { collect, state } => {
            collect.apply(&mut config);
            state.apply(&mut config);
            let query = config.asset_query()?;
            let client = HeliusClient::from_config(&config)?;
            collect_step(&client, &query, &config.store()).await?;
        }
        Command::Register { register, state } => {
            register.apply(&mut config);
            state.apply(&mut config);
            let settings = config.webhook_settings()?;
            let client = HeliusClient::from_config(&config)?;
            client
                .webhooks()
                .replace_from_store(&settings, &config.store())
                .await?;
        }
        Command::Sync {
            collect,
            register,
            state,
        } => {
            collect.apply(&mut config);
            register.apply(&mut config);
            state.apply(&mut config);
            // Validate both halves before the first request.
            let query = config.asset_query()?;
            let settings = config.webhook_settings()?;
            let client = HeliusClient::from_config(&config)?;
            let ids = collect_step(&client, &query, &config.store()).await?;
            client.webhooks().replace(&settings, ids).await?;
        }
    }

    Ok(())
}

async fn collect_step(
    client: &HeliusClient,
    query: &AssetQuery,
    store: &AddressStore,
) -> Result<Vec<AssetId>, Error> {
    info!(creator = %query.creator, page_size = query.page_size, "Collecting assets");
    let ids = client.assets().collect_into(query, store).await?;
    info!(
        count = ids.len(),
        path = %store.path().display(),
        "Collected assets"
    );
    println!("All asset addresses: {}", join_ids(&ids));
    Ok(ids)
}
