use std::path::PathBuf;

use clap::{Parser, Subcommand};
use opsengine_core::ErrorReport;
use opsengine_core::draft::DEFAULT_COMPANY_NAME;

mod commands;
mod config;
mod util;

use config::LogFormat;

#[derive(Parser)]
#[command(
    name = "opsengine",
    version,
    about = "OpsEngine CLI — triage support tickets against compliance SOPs"
)]
struct Cli {
    /// SOP catalog JSON
    /// (defaults to <config_dir>/opsengine/sops.json, then built-in SOPs)
    #[arg(long = "sops", global = true, env = "OPSENGINE_SOPS_PATH")]
    sops_path: Option<PathBuf>,

    /// Company name used in customer-facing drafts
    #[arg(
        long,
        global = true,
        env = "OPSENGINE_COMPANY_NAME",
        default_value = DEFAULT_COMPANY_NAME
    )]
    company_name: String,

    /// Log line format (logs go to stderr)
    #[arg(
        long,
        global = true,
        env = "OPSENGINE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Triage a single ticket
    Triage(commands::triage::TriageArgs),
    /// Run the reference demo tickets through the engine
    Demo(commands::demo::DemoArgs),
    /// List the active SOP catalog
    Sops,
    /// Load and validate a SOP catalog file
    ValidateCatalog {
        /// Path to the catalog JSON
        path: PathBuf,
    },
}

fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    util::init_tracing(cli.log_format);

    let code = run(cli);
    std::process::exit(code);
}

fn run(cli: Cli) -> i32 {
    if let Commands::ValidateCatalog { path } = &cli.command {
        return commands::catalog::validate(path);
    }

    let engine = match config::build_engine(cli.sops_path.as_deref(), &cli.company_name) {
        Ok(engine) => engine,
        Err(err) => return util::report_error(&ErrorReport::from(&err), util::EXIT_CATALOG),
    };

    match cli.command {
        Commands::Triage(args) => commands::triage::run(&engine, args),
        Commands::Demo(args) => commands::demo::run(&engine, args),
        Commands::Sops => commands::sops::run(&engine),
        Commands::ValidateCatalog { path } => commands::catalog::validate(&path),
    }
}
