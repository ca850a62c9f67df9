//! Timing comparison of the multipliers on growing random operands.
//!
//! Test `i` (counting from 1) multiplies two operands drawn uniformly from
//! `[10^i, 10^(i + 1) - 1]`, so each test is ten times larger in magnitude than the previous one.
//! Every selected algorithm sees the same pair, and the calls run one after another so that each
//! duration is measured on its own.
use crate::{Algorithm, BigNat, MulStats};
use rand::Rng;
use serde::Serialize;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOpts {
    /// Number of tests to run.
    pub tests: u32,
    /// Algorithms to time, in the order they run within each test.
    pub algorithms: Vec<Algorithm>,
    /// Repeat each multiplication untimed with counters enabled.
    pub collect_stats: bool,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            tests: 8,
            algorithms: Algorithm::ALL.to_vec(),
            collect_stats: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub product: BigNat,
    pub stats: Option<MulStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub index: u32,
    pub x: BigNat,
    pub y: BigNat,
    /// Digit count of the longer operand.
    pub size: usize,
    pub measurements: Vec<Measurement>,
}

impl Trial {
    pub fn products_agree(&self) -> bool {
        self.measurements
            .windows(2)
            .all(|pair| pair[0].product == pair[1].product)
    }
}

/// Uniform draw from `[10^(digits - 1), 10^digits - 1]`. Zero digits gives zero.
pub fn random_operand<R: Rng>(rng: &mut R, digits: usize) -> BigNat {
    if digits == 0 {
        return BigNat::ZERO;
    }
    let mut out: Vec<u8> = (1..digits).map(|_| rng.gen_range(0..10)).collect();
    out.push(rng.gen_range(1..10));
    BigNat::from_digits(out)
}

pub fn measure(algorithm: Algorithm, x: &BigNat, y: &BigNat) -> (BigNat, Duration) {
    let start = Instant::now();
    let product = algorithm.multiply(x, y);
    (product, start.elapsed())
}

fn log_result(x: &BigNat, y: &BigNat, product: &BigNat, algorithm: Algorithm, elapsed: Duration) {
    info!(
        "For {} * {}, the result is {} and {} multiplication took {} seconds.",
        x,
        y,
        product,
        algorithm,
        elapsed.as_secs_f64()
    );
}

/// Multiply a single given pair once with each algorithm.
pub fn multiply_once(algorithms: &[Algorithm], x: &BigNat, y: &BigNat) -> Vec<Measurement> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let (product, elapsed) = measure(algorithm, x, y);
            log_result(x, y, &product, algorithm, elapsed);
            Measurement {
                algorithm,
                elapsed,
                product,
                stats: None,
            }
        })
        .collect()
}

pub fn run_trial<R: Rng>(index: u32, rng: &mut R, opts: &DriverOpts) -> Trial {
    let digits = index as usize + 1;
    let x = random_operand(rng, digits);
    let y = random_operand(rng, digits);
    let size = std::cmp::max(x.digit_count(), y.digit_count());
    let measurements = opts
        .algorithms
        .iter()
        .map(|&algorithm| {
            let (product, elapsed) = measure(algorithm, &x, &y);
            log_result(&x, &y, &product, algorithm, elapsed);
            let stats = if opts.collect_stats {
                let mut stats = MulStats::default();
                algorithm.multiply_with_stats(&x, &y, &mut stats);
                debug!(%algorithm, size, ?stats, "multiplication counters");
                Some(stats)
            } else {
                None
            };
            Measurement {
                algorithm,
                elapsed,
                product,
                stats,
            }
        })
        .collect();
    let trial = Trial {
        index,
        x,
        y,
        size,
        measurements,
    };
    if !trial.products_agree() {
        warn!(index, "algorithms disagree on {} * {}", trial.x, trial.y);
    }
    trial
}

pub fn run<R: Rng>(opts: &DriverOpts, rng: &mut R) -> Vec<Trial> {
    (1..=opts.tests)
        .map(|index| run_trial(index, rng, opts))
        .collect()
}

/// One timing curve: input size on the x axis, seconds on the y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub algorithm: Algorithm,
    pub points: Vec<(usize, f64)>,
}

pub fn series(trials: &[Trial]) -> Vec<Series> {
    let mut out: Vec<Series> = Vec::new();
    for trial in trials {
        for measurement in &trial.measurements {
            let point = (trial.size, measurement.elapsed.as_secs_f64());
            match out.iter_mut().find(|s| s.algorithm == measurement.algorithm) {
                Some(existing) => existing.points.push(point),
                None => out.push(Series {
                    algorithm: measurement.algorithm,
                    points: vec![point],
                }),
            }
        }
    }
    out
}

/// Flat row for CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    pub test: u32,
    pub size: usize,
    pub algorithm: Algorithm,
    pub seconds: f64,
    pub splits: Option<u64>,
    pub base_cases: Option<u64>,
    pub digit_products: Option<u64>,
}

pub fn records(trials: &[Trial]) -> Vec<SeriesRecord> {
    trials
        .iter()
        .flat_map(|trial| {
            trial.measurements.iter().map(move |m| SeriesRecord {
                test: trial.index,
                size: trial.size,
                algorithm: m.algorithm,
                seconds: m.elapsed.as_secs_f64(),
                splits: m.stats.map(|s| s.splits),
                base_cases: m.stats.map(|s| s.base_cases),
                digit_products: m.stats.map(|s| s.digit_products),
            })
        })
        .collect()
}

/// Writes one CSV row per record, preceded by a header row.
pub fn write_records<W: io::Write>(sink: W, records: &[SeriesRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
