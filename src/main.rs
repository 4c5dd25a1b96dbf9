mod analysis;
mod cli;
mod config;
mod matcher;
mod normalize;
mod rules;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use config::{Config, Mode};
use rules::{load_rules, load_rules_from_file, Rules};

#[derive(Parser)]
#[command(name = "qualia")]
#[command(about = "Recommend which AI assistant best fits a task description")]
#[command(version)]
struct Cli {
    /// Rules file to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the model of the best matching task category
    Analyze {
        /// Task description (e.g., escrever um artigo técnico sobre IA)
        #[arg(required = true)]
        task: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Append the detailed explanation
        #[arg(long)]
        explain: bool,
    },
    /// Score and rank every model for the task
    Compare {
        /// Task description
        #[arg(required = true)]
        task: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Append the detailed explanation
        #[arg(long)]
        explain: bool,
    },
    /// Print the detailed explanation for a task
    Explain {
        /// Task description
        #[arg(required = true)]
        task: Vec<String>,
        /// Explain the comparative ranking instead of the best match
        #[arg(long)]
        compare: bool,
    },
    /// List the available models
    Models {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one model and the categories it is recommended for
    Model {
        /// Model name or ID (e.g., Claude, chatgpt)
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List task categories and their recommendations
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print sample task descriptions
    Samples {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(config: &Config, override_path: Option<&std::path::Path>) -> Result<Rules> {
    match config.rules_path(override_path) {
        Some(path) => load_rules_from_file(path),
        None => load_rules(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "qualia", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let rules = load(&config, cli.rules.as_deref())?;

    match cli.command {
        Some(Commands::Analyze { task, json, explain }) => {
            let task = cli::analyze::task_text(&task)?;
            cli::analyze::run(&rules, &config, &task, Mode::Analyze, json, explain)?
        }
        Some(Commands::Compare { task, json, explain }) => {
            let task = cli::analyze::task_text(&task)?;
            cli::analyze::run(&rules, &config, &task, Mode::Compare, json, explain)?
        }
        Some(Commands::Explain { task, compare }) => {
            let task = cli::analyze::task_text(&task)?;
            let mode = if compare { Mode::Compare } else { Mode::Analyze };
            cli::analyze::explain(&rules, &config, &task, mode)?
        }
        Some(Commands::Models { json }) => cli::models::list(&rules, json)?,
        Some(Commands::Model { name, json }) => cli::models::show(&rules, &name, json)?,
        Some(Commands::Categories { json }) => cli::categories::list(&rules, json)?,
        Some(Commands::Samples { json }) => cli::categories::samples(&rules, json)?,
        Some(Commands::Completions { .. }) => {}
        None => cli::interactive::run(&rules, &config)?,
    }

    Ok(())
}
