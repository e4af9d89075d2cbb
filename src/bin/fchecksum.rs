// fchecksum — generate MD5/SHA-1/SHA-256 checksums for a file or for every
// direct child file of a directory, printing them and/or appending them to a
// .txt output file.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;

use checksum_rs::common::reset_sigpipe;
use checksum_rs::generate::{self, ChecksumRequest};
use checksum_rs::hash::ChecksumAlgorithm;

#[derive(Debug, Parser)]
#[command(name = "fchecksum", about = "Generate checksums for files")]
struct Cli {
    /// Show the installed version
    #[arg(short = 'v', long = "version")]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate checksums for files
    Generate {
        /// Path to the directory or file for which to generate checksums
        checksum_path: PathBuf,

        /// Path to the file to save the checksums. Must be a .txt file. If no
        /// path is provided the output will be printed to the screen and not
        /// saved
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// The type of checksum to generate [default: sha256]
        #[arg(short, long, default_value = "sha256", hide_default_value = true)]
        checksum_type: String,

        /// Overwrite the output file rather than appending to it
        #[arg(long)]
        overwrite: bool,

        /// Provides more output while running
        #[arg(short, long)]
        verbose: bool,
    },
}

fn run(command: Command) -> Result<()> {
    let Command::Generate {
        checksum_path,
        output_file,
        checksum_type,
        overwrite,
        verbose,
    } = command;

    let request = ChecksumRequest {
        target: checksum_path,
        // Unrecognized tokens deliberately fall back to sha256
        algorithm: ChecksumAlgorithm::from_token(&checksum_type),
        output_file,
        overwrite,
        verbose,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    generate::run(&request, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();

    // --version wins over any subcommand
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        process::exit(2);
    };

    if let Err(e) = run(command) {
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}
