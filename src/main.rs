use anyhow::{Context, Result};
use clap::Parser;
use mulcmp::bench::{self, DriverOpts, SeriesRecord};
use mulcmp::{Algorithm, BigNat};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of tests. Test i multiplies two (i + 1)-digit operands.
    #[clap(long, short = 'n', env = "MULCMP_TESTS", default_value = "8")]
    tests: u32,

    /// Seed for operand generation; drawn from the OS when absent.
    #[clap(long, env = "MULCMP_SEED")]
    seed: Option<u64>,

    /// standard | karatsuba | divide_and_conquer, comma separated
    #[clap(long, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    algorithms: Vec<Algorithm>,

    /// Write the timing series to this CSV file.
    #[clap(long)]
    csv: Option<PathBuf>,

    /// Also record work counters for every multiplication (untimed).
    #[clap(long)]
    stats: bool,

    /// Multiply x and y once with each algorithm instead of benchmarking.
    #[clap(long, requires = "y")]
    x: Option<BigNat>,

    /// Second operand for the one-shot multiplication.
    #[clap(long, requires = "x")]
    y: Option<BigNat>,
}

fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn write_csv(path: &Path, records: &[SeriesRecord]) -> Result<()> {
    let file = File::create(path)?;
    bench::write_records(file, records)?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logger();
    let args = Args::parse();

    if let (Some(x), Some(y)) = (&args.x, &args.y) {
        for measurement in bench::multiply_once(&args.algorithms, x, y) {
            println!("{}", measurement.product);
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        tests = args.tests,
        "comparing {}",
        args.algorithms
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let opts = DriverOpts {
        tests: args.tests,
        algorithms: args.algorithms,
        collect_stats: args.stats,
    };
    let trials = bench::run(&opts, &mut rng);

    for curve in bench::series(&trials) {
        if let Some(&(size, seconds)) = curve.points.last() {
            info!(
                algorithm = %curve.algorithm,
                size,
                seconds,
                "largest input"
            );
        }
    }

    if let Some(path) = args.csv {
        write_csv(&path, &bench::records(&trials))
            .with_context(|| format!("failed to write timing series to {}", path.display()))?;
        info!("wrote timing series to {}", path.display());
    }
    Ok(())
}
