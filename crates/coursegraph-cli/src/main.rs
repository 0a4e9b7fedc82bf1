//! `coursegraph`: batch materialization of course graph views.
//!
//! Usage:
//!   coursegraph materialize [--config-root DIR] [--db FILE] [--dry-run] ...
//!   coursegraph show <KEY> [--db FILE]
//!   coursegraph keys [--prefix P] [--db FILE]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use coursegraph_core::config::{CliOverrides, CourseGraphConfig};
use coursegraph_core::errors::{CourseGraphErrorCode, PipelineError};
use coursegraph_core::traits::ViewStore;
use coursegraph_storage::{MemoryViewStore, SqliteViewStore};
use coursegraph_views::{load_inputs, MaterializeReport, Materializer};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "coursegraph")]
#[command(version, about = "Precompute neighborhood views of a course prerequisite graph")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild every view from the processed catalog files
    Materialize(MaterializeArgs),

    /// Print the value stored under a key
    Show {
        key: String,
        #[command(flatten)]
        store: StoreArgs,
    },

    /// List stored keys
    Keys {
        /// Only keys starting with this prefix
        #[arg(long, default_value = "")]
        prefix: String,
        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// Directory holding coursegraph.toml
    #[arg(long, env = "COURSEGRAPH_CONFIG_ROOT", default_value = ".")]
    config_root: PathBuf,
    /// SQLite database file
    #[arg(long)]
    db: Option<String>,
}

#[derive(Args, Debug)]
struct MaterializeArgs {
    #[command(flatten)]
    store: StoreArgs,
    /// Course records (JSON array)
    #[arg(long)]
    courses: Option<PathBuf>,
    /// Prerequisite links (JSON array)
    #[arg(long)]
    links: Option<PathBuf>,
    /// Catalog hierarchy (JSON object)
    #[arg(long)]
    hierarchy: Option<PathBuf>,
    /// Presentation tree, stored verbatim
    #[arg(long)]
    nav: Option<PathBuf>,
    /// Key namespace of hierarchy views
    #[arg(long)]
    namespace: Option<String>,
    /// Resolution threads (0 = one per core)
    #[arg(long)]
    threads: Option<usize>,
    /// Compute everything, write nothing
    #[arg(long)]
    dry_run: bool,
}

impl MaterializeArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            courses: self.courses.clone(),
            links: self.links.clone(),
            hierarchy: self.hierarchy.clone(),
            nav: self.nav.clone(),
            store_path: self.store.db.clone(),
            namespace: self.namespace.clone(),
            threads: self.threads,
        }
    }
}

fn main() -> ExitCode {
    coursegraph_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err.diagnostic());
            match err {
                PipelineError::Config(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, PipelineError> {
    match cli.command {
        Command::Materialize(args) => {
            let config = CourseGraphConfig::load(&args.store.config_root, Some(&args.overrides()))?;
            let report = materialize(&config, args.dry_run)?;
            let target = if args.dry_run {
                "dry run, nothing written".to_string()
            } else {
                config.store.effective_path()
            };
            println!("{} ({target})", summary(&report));
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { key, store } => {
            let views = open_store(&store)?;
            match views.get(&key)? {
                Some(value) => {
                    println!("{value}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no value stored under {key}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Keys { prefix, store } => {
            for key in open_store(&store)?.keys(&prefix)? {
                println!("{key}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn materialize(config: &CourseGraphConfig, dry_run: bool) -> Result<MaterializeReport, PipelineError> {
    let input = load_inputs(&config.input)?;
    let materializer = Materializer::from_config(config)?;

    let report = if dry_run {
        materializer.run(input, &MemoryViewStore::new())?
    } else {
        let store = SqliteViewStore::open(Path::new(&config.store.effective_path()))?;
        materializer.run(input, &store)?
    };

    for dropped in &report.dropped {
        warn!("{}", dropped.diagnostic());
    }
    Ok(report)
}

fn open_store(args: &StoreArgs) -> Result<SqliteViewStore, PipelineError> {
    let overrides = CliOverrides {
        store_path: args.db.clone(),
        ..Default::default()
    };
    let config = CourseGraphConfig::load(&args.config_root, Some(&overrides))?;
    Ok(SqliteViewStore::open(Path::new(&config.store.effective_path()))?)
}

fn summary(report: &MaterializeReport) -> String {
    format!(
        "{} views, {} course records{}; {} links kept, {} dropped",
        report.views_written,
        report.courses_written,
        if report.nav_written { ", nav" } else { "" },
        report.links_kept,
        report.links_dropped,
    )
}
