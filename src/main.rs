//! PyQuest · Python Fundamentals content seeder
//!
//! - Seeds the built-in activity collections into SQLite (idempotent upsert)
//! - Audits collection structure and content quality, writing a text report
//!
//! Important env variables:
//!   DATABASE_URL      : sqlx connection string (overrides the config file)
//!   SEED_CONFIG_PATH  : path to TOML config (database, category, report path)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default), "compact" or "json"

mod audit;
mod collections;
mod config;
mod domain;
mod error;
mod seeder;
mod store;
mod telemetry;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::audit::Auditor;
use crate::config::{load_seed_config_from_env, SeedConfig};
use crate::error::SeedError;
use crate::store::{ActivityStore, SeedStatus, SqliteStore};

#[derive(Parser)]
#[command(name = "pyquest-seed")]
#[command(version)]
#[command(about = "Seed and audit the Python Fundamentals activity collections")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Upsert one collection (e.g. `quiz`, `drag_drop`)
  Seed {
    collection: String,
  },

  /// Upsert every collection in one transaction and report the stored count
  SeedAll,

  /// Check and score the audited collections, then write the report
  Audit {
    /// JSON object mapping collection names to activity arrays (defaults to the built-in data)
    #[arg(long)]
    from: Option<PathBuf>,

    /// Report destination (overrides `report_path` from the config)
    #[arg(long)]
    report: Option<PathBuf>,
  },

  /// Show the built-in collections
  List,
}

#[tokio::main]
async fn main() -> ExitCode {
  telemetry::init_tracing();
  let cli = Cli::parse();
  let cfg = load_seed_config_from_env();

  let result = match cli.command {
    Commands::Seed { collection } => seed_one(&cfg, &collection).await,
    Commands::SeedAll => seed_everything(&cfg).await,
    Commands::Audit { from, report } => run_audit(&cfg, from, report),
    Commands::List => {
      list();
      Ok(ExitCode::SUCCESS)
    }
  };

  match result {
    Ok(code) => code,
    Err(e) => {
      error!(target: "pyquest_seed", error = %e, "Command failed");
      ExitCode::FAILURE
    }
  }
}

async fn seed_one(cfg: &SeedConfig, name: &str) -> Result<ExitCode, SeedError> {
  let collection = collections::find(name).ok_or_else(|| SeedError::UnknownCollection(name.to_string()))?;
  let store = SqliteStore::connect(&cfg.database_url, cfg.max_connections).await?;
  let outcome = seeder::seed_collection(&store, &collection).await;
  store.close().await;

  let summary = outcome?;
  for o in &summary.outcomes {
    let status = match o.status {
      SeedStatus::Inserted => "inserted",
      SeedStatus::Updated => "updated",
    };
    println!("  {status:<8} {}", o.title);
  }
  println!("{}: {} inserted, {} updated", summary.collection, summary.inserted, summary.updated);
  Ok(ExitCode::SUCCESS)
}

async fn seed_everything(cfg: &SeedConfig) -> Result<ExitCode, SeedError> {
  let store = SqliteStore::connect(&cfg.database_url, cfg.max_connections).await?;
  let outcome = seeder::seed_all(&store, &cfg.category).await;
  store.close().await;

  let summary = outcome?;
  for c in &summary.collections {
    println!("{:<24} {:>3} inserted {:>3} updated", c.collection, c.inserted, c.updated);
  }
  println!("Total activities in \"{}\": {}", summary.category, summary.total_in_category);
  Ok(ExitCode::SUCCESS)
}

fn run_audit(cfg: &SeedConfig, from: Option<PathBuf>, report: Option<PathBuf>) -> Result<ExitCode, SeedError> {
  let mut auditor = Auditor::new(cfg.expected_count);
  match &from {
    Some(path) => {
      let doc = audit::load_collections_file(path)?;
      auditor.run_from_json(&doc)?;
    }
    None => auditor.run_all()?,
  }

  let text = auditor.generate_report();
  println!("{text}");
  let path = report.unwrap_or_else(|| PathBuf::from(&cfg.report_path));
  audit::report::save_results(&text, &path)?;

  let summary = auditor.summary();
  info!(target: "audit", errors = summary.total_errors, warnings = summary.total_warnings,
    average = summary.average_score, grade = summary.grade, "Audit finished");
  Ok(ExitCode::from(summary.exit_code()))
}

fn list() {
  for c in collections::all() {
    let audited = if c.audited { "audited" } else { "not audited" };
    println!("{:<24} {:>3} activities  ({audited})", c.name(), c.activities().len());
  }
}
