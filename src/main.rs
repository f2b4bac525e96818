mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "missive")]
#[command(about = "Render messages as HTML and plaintext from themed skeletons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Render a message file (.toml or .json)
    Render {
        /// Message file to render
        message: PathBuf,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Theme to use instead of the configured one
        #[arg(long)]
        theme: Option<String>,

        /// Directory for the .html and .txt outputs (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Dry run - print the plaintext to stdout instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// List available themes
    Themes {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize missive.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Render {
            message,
            config,
            theme,
            out_dir,
            dry_run,
        } => cli::render::run(message, config, theme, out_dir, dry_run),
        Commands::Themes { config } => cli::themes::list(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
