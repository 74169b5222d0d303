//! Land registry CLI
//!
//! Command-line interface over a SQLite land registry

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use landreg_core::logging_facility;
use landreg_core::LandDetailsService;
use landreg_core_types::RequestContext;
use landreg_store::SqliteRegistry;

mod commands;
mod config;

use config::{Config, DB_ENV};

#[derive(Debug, Parser)]
#[command(name = "landreg")]
#[command(about = "Land ownership registry", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file (overrides config and LANDREG_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every record with owners, parcels and witnesses
    List,
    /// Show one record with its owners
    Show(commands::query::ShowArgs),
    /// Save a complete land details document
    Save(commands::write::SaveArgs),
    /// Overwrite the scalar fields of a record
    Update(commands::write::UpdateArgs),
    /// Delete a record
    Delete(commands::write::DeleteArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::load(cli.config.as_deref())?;
    logging_facility::init(config.log_profile);

    let ctx = RequestContext::new();
    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _guard = span.enter();

    let db_path = config.database_path(cli.db, std::env::var(DB_ENV).ok());
    let registry = SqliteRegistry::open(&db_path)
        .map_err(|e| e.with_request_id(ctx.request_id.clone()))
        .with_context(|| format!("opening database {}", db_path.display()))?;
    let mut service = LandDetailsService::with_options(registry, config.service);

    match cli.command {
        Commands::List => commands::query::execute_list(&ctx, &service),
        Commands::Show(args) => commands::query::execute_show(&ctx, &service, args),
        Commands::Save(args) => commands::write::execute_save(&ctx, &mut service, args),
        Commands::Update(args) => commands::write::execute_update(&ctx, &mut service, args),
        Commands::Delete(args) => commands::write::execute_delete(&ctx, &mut service, args),
    }
}
