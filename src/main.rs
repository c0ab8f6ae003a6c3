use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use twinarray::config::{DEFAULT_ARRAY_SIZE, DEFAULT_UNIQUE_VALUES};
use twinarray::memory::TrackingAllocator;
use twinarray::{BenchConfig, BenchmarkRunner, MemoryProbe};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Benchmark counting sort strategies on a random array and on {2, 3, 4, 10000}
#[derive(Parser)]
#[command(name = "twinarray")]
struct SortArgs {
    /// Array size (1-10000000)
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_SIZE.to_string())]
    size: String,

    /// Number of unique values (1-array size)
    #[arg(short, long, default_value_t = DEFAULT_UNIQUE_VALUES.to_string())]
    unique: String,

    /// Worker threads for the parallel strategy (defaults to available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for a reproducible input array
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = SortArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: SortArgs) -> twinarray::Result<()> {
    let config = BenchConfig::from_text(&args.size, &args.unique)?;

    let runner = match args.threads {
        Some(threads) => BenchmarkRunner::new(threads, MemoryProbe::detect()),
        None => BenchmarkRunner::default(),
    };
    let mut rng = twinarray::rand::seeded_rng(args.seed);

    let report = runner.run(config.array_size, config.unique_values, &mut rng)?;
    print!("{}", report);

    if let Some(path) = args.output {
        report.write_to(&path)?;
    }
    Ok(())
}
