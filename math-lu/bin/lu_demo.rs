//! LU demo
//!
//! Inverts a matrix through its LU decomposition and checks the result.
//! Without `--size` the built-in 3x3 matrix is used; otherwise a seeded random
//! matrix of the requested size.
//!
//! Usage:
//!     cargo run --bin lu-demo --release
//!     cargo run --bin lu-demo --release -- --size 6 --seed 42 --pivot signed

use clap::{Parser, ValueEnum};
use math_lu::matrix::{approx_eq, display, identity, random};
use math_lu::{LuConfig, Matrix, PivotSearch, decompose_with, product};
use ndarray::array;

#[derive(Parser, Debug)]
#[command(name = "lu-demo")]
#[command(about = "Invert a dense matrix through its LU decomposition")]
struct Args {
    /// Size of a random square matrix (default: built-in 3x3 matrix)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Seed for the random matrix
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Smallest random value
    #[arg(long, default_value = "-10.0", allow_negative_numbers = true)]
    min: f64,

    /// Largest random value (exclusive)
    #[arg(long, default_value = "10.0", allow_negative_numbers = true)]
    max: f64,

    /// Pivot row selection rule
    #[arg(short, long, default_value = "magnitude")]
    pivot: CliPivotSearch,

    /// Tolerance for the inverse * A == I check
    #[arg(long, default_value = "1e-9")]
    epsilon: f64,

    /// Number of parallel threads (default: all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPivotSearch {
    Magnitude,
    Signed,
}

impl From<CliPivotSearch> for PivotSearch {
    fn from(value: CliPivotSearch) -> Self {
        match value {
            CliPivotSearch::Magnitude => PivotSearch::Magnitude,
            CliPivotSearch::Signed => PivotSearch::Signed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    anyhow::ensure!(
        args.min < args.max,
        "--min ({}) must be smaller than --max ({})",
        args.min,
        args.max
    );

    let m: Matrix = match args.size {
        Some(n) => random(n, n, args.min, args.max, args.seed),
        None => array![[1.0, 2.0, 3.0], [0.0, 77.0, 3.0], [11.0, 0.0, 14.0]],
    };
    let n = m.nrows();

    let config = LuConfig {
        pivot_search: args.pivot.into(),
        ..Default::default()
    };

    println!("{}", display(&m));

    let factorization = decompose_with(&m, &config)?;
    let inv = factorization.inverse();
    println!("Inverse = \n{}", display(&inv));
    println!("Determinant = {:.6}", factorization.determinant());
    println!("Permutation = {:?}", factorization.perm);

    let check = product(&inv, &m)?;
    if approx_eq(&check, &identity(n), args.epsilon) {
        println!("inverse * A == I (epsilon {:e})", args.epsilon);
    } else {
        println!("inverse * A differs from I (epsilon {:e})", args.epsilon);
        println!("{}", display(&check));
    }

    Ok(())
}
