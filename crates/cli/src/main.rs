use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zap_sdk::services::{MemoryRouter, Router, TokenList, TokenRegistry, WalletSnapshot};
use zap_sdk::{AppContext, RouteLocation, ZapConfig, ZapInitCoinFiller, ZapUrlReconciler};
use zap_types::PoolJsonInfo;

#[derive(Parser, Debug)]
#[command(name = "zap")]
#[command(about = "Resolve zap URLs against pool and token lists")]
struct Args {
    /// Path to zap configuration file
    #[arg(short, long, default_value = "zap.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a zap URL into the store, fill defaults and print the mirrored URL
    Sync {
        /// JSON array of pool descriptors
        #[arg(long)]
        pools: PathBuf,

        /// JSON array of tokens
        #[arg(long)]
        tokens: PathBuf,

        /// Location to start from, e.g. "/zap?ammId=..."
        #[arg(long, default_value = "/zap")]
        url: String,
    },

    /// Write the default configuration
    InitConfig {
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match args.command {
        Command::InitConfig { path } => {
            ZapConfig::default().save(&path)?;
            info!("Wrote default configuration to {}", path.display());
            Ok(())
        }
        Command::Sync { pools, tokens, url } => {
            let config = load_config(&args.config)?;
            sync(&config, &pools, &tokens, &url).await
        }
    }
}

fn load_config(path: &Path) -> Result<ZapConfig> {
    if path.exists() {
        let config = ZapConfig::load(path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        warn!("No configuration at {}, using defaults", path.display());
        Ok(ZapConfig::default())
    }
}

async fn sync(config: &ZapConfig, pools_path: &Path, tokens_path: &Path, url: &str) -> Result<()> {
    let pools_json = fs::read_to_string(pools_path)
        .with_context(|| format!("Failed to read pools from {}", pools_path.display()))?;
    let pools: Vec<PoolJsonInfo> =
        serde_json::from_str(&pools_json).context("Failed to parse pool list")?;

    let tokens_json = fs::read_to_string(tokens_path)
        .with_context(|| format!("Failed to read tokens from {}", tokens_path.display()))?;
    let tokens = TokenList::from_json(&tokens_json)?;

    info!("Loaded {} pools and {} tokens", pools.len(), tokens.token_count());

    let owner = match &config.wallet {
        Some(wallet) => wallet.owner,
        None => {
            warn!("No wallet configured, using a throwaway owner");
            Pubkey::new_unique()
        }
    };
    let ctx = AppContext::new(Arc::new(tokens), Arc::new(WalletSnapshot::new(owner, 0)))
        .with_settings(config.initial_settings());
    ctx.liquidity.set(|s| s.set_json_infos(pools));

    let router = MemoryRouter::new(RouteLocation::parse(url));
    let mut reconciler = ZapUrlReconciler::from_config(&config.url);
    let mut filler = ZapInitCoinFiller::new(config.tokens.secondary_mint);

    // URL first, then defaults for whatever it left empty, then mirror
    reconciler.tick(&ctx, &router.current(), tokio::time::Instant::now());
    if let Some(filled) = filler.on_tokens_changed(&ctx) {
        if !filled.is_empty() {
            info!(?filled, "Filled default coins");
        }
    }
    reconciler.tick(&ctx, &router.current(), tokio::time::Instant::now());

    if !reconciler.is_initialized() {
        warn!("Pool or token list is empty; the URL was not applied");
    }
    if reconciler.flush_when_due(&router).await {
        info!("URL updated");
    }

    let state = serde_json::to_string_pretty(&*ctx.zap.get())?;
    println!("{}", state);
    println!("{}", router.current());

    Ok(())
}
