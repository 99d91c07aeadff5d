//! dnsblock - classify names read on stdin against a blocklist.
//!
//! Usage:
//!   dnsblock -b blocklist.txt              # Default table size (1873)
//!   dnsblock -b blocklist.txt -t 101 -s    # Custom size, stats on stderr

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dnsblock::{run, Config, StatsFormat, DEFAULT_TABLE_SIZE, MIN_TABLE_SIZE};

#[derive(ValueEnum, Clone, Copy)]
enum CliStatsFormat {
    Text,
    Json,
}

impl From<CliStatsFormat> for StatsFormat {
    fn from(format: CliStatsFormat) -> Self {
        match format {
            CliStatsFormat::Text => StatsFormat::Text,
            CliStatsFormat::Json => StatsFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "dnsblock", about = "Report whether each name on stdin is blocked")]
struct Cli {
    /// Blocklist file, one name per line
    #[arg(short = 'b', long = "blocklist", value_name = "BLOCKFILE")]
    blocklist: PathBuf,

    /// Number of hash table buckets
    #[arg(
        short = 't',
        long = "table-size",
        value_name = "TABLESIZE",
        default_value_t = DEFAULT_TABLE_SIZE,
        value_parser = parse_table_size
    )]
    table_size: usize,

    /// Print table statistics to stderr before querying
    #[arg(short = 's', long = "stats")]
    stats: bool,

    /// Stats output format (implies --stats)
    #[arg(long, value_enum)]
    stats_format: Option<CliStatsFormat>,
}

fn parse_table_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("value must be equal or larger than {}", MIN_TABLE_SIZE))?;
    if size < MIN_TABLE_SIZE {
        return Err(format!("value must be equal or larger than {}", MIN_TABLE_SIZE));
    }
    Ok(size)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::new(cli.blocklist).with_table_size(cli.table_size);
    match (cli.stats, cli.stats_format) {
        (_, Some(format)) => config = config.with_stats(format.into()),
        (true, None) => config = config.with_stats(StatsFormat::Text),
        (false, None) => {}
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&config, stdin.lock(), stdout.lock(), io::stderr()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dnsblock: {}", e);
            ExitCode::FAILURE
        }
    }
}
