use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use cotizador::cli::section::SectionArgs;
use cotizador::cli::work_plan::WorkPlanArgs;
use cotizador::models::CotizadorConfig;
use cotizador::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cotizador")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Structured extraction for AI proposal pipelines", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./cotizador.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the client record from an intake message
    Client {
        /// Payload file (JSON with a `message` field, or plain text)
        input: Option<PathBuf>,
    },

    /// Recover a JSON object from raw model output
    #[command(name = "extract-json")]
    ExtractJson {
        /// Raw model output file
        input: Option<PathBuf>,
    },

    /// Parse and summarize a JSON work plan produced by a model
    #[command(name = "work-plan")]
    WorkPlan(WorkPlanArgs),

    /// Parse the task table of a markdown execution plan
    #[command(name = "execution-plan")]
    ExecutionPlan {
        /// Markdown file
        input: Option<PathBuf>,
    },

    /// Print a markdown section or its numbered list
    Section(SectionArgs),

    /// Print today's proposal date
    Date,

    /// Write a default cotizador.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<CotizadorConfig> {
    match path {
        Some(p) => CotizadorConfig::load_file(p),
        None => CotizadorConfig::load(&std::env::current_dir()?),
    }
}

fn init_tracing(fallback_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.log_level);

    match cli.command {
        Commands::Client { input } => {
            cotizador::cli::client::run(input.as_deref())?;
        }

        Commands::ExtractJson { input } => {
            cotizador::cli::extract::run(input.as_deref())?;
        }

        Commands::WorkPlan(args) => {
            cotizador::cli::work_plan::run(&args, &config)?;
        }

        Commands::ExecutionPlan { input } => {
            cotizador::cli::execution_plan::run(input.as_deref())?;
        }

        Commands::Section(args) => {
            cotizador::cli::section::run(&args)?;
        }

        Commands::Date => {
            println!("{}", cotizador::parser::today_label());
        }

        Commands::Init { force } => {
            println!("{}", "🚀 Initializing cotizador config...".cyan());
            cotizador::cli::init::run(&std::env::current_dir()?, force)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cotizador", &mut io::stdout());
        }
    }

    Ok(())
}
