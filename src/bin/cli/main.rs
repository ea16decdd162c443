//! CLI tool for multi-part file operations.

mod commands;
mod exit_codes;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use exit_codes::ExitCode;

/// Split files into size-bounded parts and join them back
#[derive(Parser)]
#[command(name = "partfile")]
#[command(author, version, about = "Split files into size-bounded parts and join them back", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Suppress normal output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file into parts (alias: s)
    #[command(alias = "s")]
    Split {
        /// File to split
        input: PathBuf,

        /// Path of the first part; later parts are named <name>.partN.<ext>
        output: PathBuf,

        /// Maximum size of each part (e.g. 512, 64K, 10M, 4G)
        #[arg(short = 's', long, value_parser = output::parse_size)]
        size: u64,
    },

    /// Join parts into a single file (alias: j)
    #[command(alias = "j")]
    Join {
        /// Base file (parts are discovered), or several files joined in order
        #[arg(required = true)]
        parts: Vec<PathBuf>,

        /// File to write the joined content to
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// List the parts of a file (alias: l)
    #[command(alias = "l")]
    List {
        /// Base file whose parts to list
        base: PathBuf,
    },

    /// Delete a file and its sequential parts (alias: d)
    #[command(alias = "d")]
    Delete {
        /// Base file to delete
        base: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Split {
            input,
            output,
            size,
        } => commands::split(&input, &output, size, cli.format, cli.quiet),

        Commands::Join { parts, output } => {
            commands::join(&parts, &output, cli.format, cli.quiet)
        }

        Commands::List { base } => commands::list(&base, cli.format),

        Commands::Delete { base } => commands::delete(&base, cli.format, cli.quiet),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.code());
}
