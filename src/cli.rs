//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use tokenwind::output::OutputMode;

/// tokenwind - Utility-class scanning and design-token resolution
#[derive(Parser, Debug)]
#[command(
    name = "tokenwind",
    version,
    about = "Utility-class scanning and design-token resolution",
    long_about = "Scan source files for utility classes and resolve them against a theme.\n\n\
                  The theme is a base token table merged with the project's overrides:\n\
                  `theme.extend` adds tokens, other `theme` namespaces replace the base."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: tokenwind.toml or tokenwind.json in the root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root that content patterns are relative to
    /// (default: the config file's directory, else the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan content files and list the utilities they use
    Scan,

    /// Resolve a single token
    Resolve {
        /// Namespace, e.g. `height` or `fontFamily`
        namespace: String,

        /// Key within the namespace, e.g. `128`
        key: String,
    },

    /// List theme namespaces after merging
    Namespaces,

    /// Show version
    Version,
}

/// Where to find the project
#[derive(Debug, Clone)]
pub struct Project {
    /// Explicit config file, if given
    pub config: Option<PathBuf>,
    /// Explicit root, if given
    pub root: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let project = Project {
        config: cli.config,
        root: cli.root,
    };

    match cli.command {
        Some(Command::Scan) => commands::scan(&project, output_mode),
        Some(Command::Resolve { namespace, key }) => {
            commands::resolve(&project, &namespace, &key, output_mode)
        },
        Some(Command::Namespaces) => commands::namespaces(&project, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tokenwind::VERSION
                    })
                );
            } else {
                println!("tokenwind v{}", tokenwind::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tokenwind::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tokenwind v{}", tokenwind::VERSION);
                println!("\nRun 'tokenwind --help' for usage");
                println!("Run 'tokenwind scan' in a project with a tokenwind.toml");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
