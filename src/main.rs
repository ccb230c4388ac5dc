//! tailseek: print the end of a file, or everything from a given line.
//!
//! Usage: tailseek [-n NUM] [OPTIONS] FILE...

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use tailseek::config::{ScanConfig, DEFAULT_BACKWARD_BUFFER};
use tailseek::{LineSpec, TailCommand, TailError};

#[derive(Parser)]
#[command(name = "tailseek")]
#[command(author = "Manish Kumar Bobbili")]
#[command(version)]
#[command(about = "Print the last lines of a file, seeking instead of reading it all", long_about = None)]
struct Cli {
    /// Output the last NUM lines; use +NUM to output starting with line NUM
    #[arg(
        short = 'n',
        long = "lines",
        value_name = "NUM",
        default_value = "10",
        allow_hyphen_values = true
    )]
    lines: LineSpec,

    /// Never print headers giving file names
    #[arg(short, long)]
    quiet: bool,

    /// Scan buffer size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_BACKWARD_BUFFER)]
    buffer_size: usize,

    /// Print seek statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Input files (must be seekable)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => {}
        // Downstream closed early (e.g. piped into `head`).
        Err(TailError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), TailError> {
    let config = ScanConfig::with_buffer_size(cli.buffer_size);
    config.validate()?;

    let cmd = TailCommand::new(cli.lines).with_config(config);
    let headers = cli.files.len() > 1 && !cli.quiet;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let results = cmd.run_many(&cli.files, &mut handle, headers)?;

    if cli.stats {
        for (path, stats) in cli.files.iter().zip(&results) {
            eprintln!("{}: {}", path.display(), stats);
        }
    }

    Ok(())
}
