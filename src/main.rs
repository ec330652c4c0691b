//! Benchmark runner for the buffer growth policies and matmul orderings.
//!
//! Usage: `cachelab [SIZE] [REPEATS] [LIST_LEN]`
//!
//! Matrices are SIZE×SIZE (default 500) and each kernel runs REPEATS times
//! (default 100). The buffer benchmark appends the first LIST_LEN squares
//! (default 100 000).

use cachelab::{
    GrowableBuffer, GrowthPolicy, JaggedMatrix, Matrix, matmul_ijk, matmul_ikj, multiply_jagged,
};
use env_logger::Env;
use std::process::ExitCode;
use std::time::Instant;

struct BenchConfig {
    size: usize,
    repeats: usize,
    list_len: usize,
}

impl BenchConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let arg = |idx: usize, default: usize| -> Result<usize, String> {
            match args.get(idx) {
                Some(s) => s
                    .parse()
                    .map_err(|e| format!("argument {} ({s:?}): {e}", idx + 1)),
                None => Ok(default),
            }
        };
        Ok(Self {
            size: arg(0, 500)?,
            repeats: arg(1, 100)?.max(1),
            list_len: arg(2, 100_000)?,
        })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match BenchConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: cachelab [SIZE] [REPEATS] [LIST_LEN]");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&config) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(config: &BenchConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Buffer Growth Benchmark ===\n");
    println!("Appending {} squares\n", config.list_len);
    for policy in [GrowthPolicy::ExactFit, GrowthPolicy::Doubling] {
        let (ms, reallocs) = bench_appends(policy, config.list_len)?;
        println!("{:10} {:10.3} ms  {:8} reallocations", format!("{policy:?}"), ms, reallocs);
    }

    let (m, n, k) = (config.size, config.size, config.size);
    println!("\n=== Matrix Multiplication Benchmark ===\n");
    println!("Matrix: {}×{}, {} repeats", m, n, config.repeats);
    println!("{}", "-".repeat(50));

    // Same sample data as the original C harness.
    let a_at = |i: usize, j: usize| 2.0 * (i as f64 - j as f64) / (i + j + 2) as f64;
    let b_at = |i: usize, j: usize| ((i + 1) as f64 / (j + 1) as f64).sqrt();

    let a = Matrix::from_fn(m, k, a_at)?;
    let b = Matrix::from_fn(k, n, b_at)?;
    let ja = JaggedMatrix::from_fn(m, k, a_at)?;
    let jb = JaggedMatrix::from_fn(k, n, b_at)?;

    if m > 0 && k > 0 && n > 0 {
        println!("A[{},{}] = {}", m, k, a[(m - 1, k - 1)]);
        println!("B[{},{}] = {}", k, n, b[(k - 1, n - 1)]);
    }

    let mut c = Matrix::allocate(m, n)?;
    let mut jc = JaggedMatrix::allocate(m, n)?;

    let results = [
        (
            "Naive (i-j-k)",
            time_repeats(config.repeats, m, n, k, || {
                matmul_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k)
            }),
        ),
        (
            "Jagged (i-j-k)",
            time_repeats(config.repeats, m, n, k, || multiply_jagged(&ja, &jb, &mut jc)),
        ),
        (
            "Scalar (i-k-j)",
            time_repeats(config.repeats, m, n, k, || {
                matmul_ikj(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k)
            }),
        ),
    ];

    let baseline_time = results[0].1.0;
    for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
        let speedup = baseline_time / time_ms;
        println!(
            "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
            i + 1,
            name,
            time_ms,
            gflops,
            speedup
        );
    }

    if m > 0 && n > 0 {
        println!("\nC[{},{}] = {}", m, n, c[(m - 1, n - 1)]);
    }
    println!("\nSpeedup relative to Naive (i-j-k). Higher is better.\n");

    c.release();
    Ok(())
}

/// Build a list of the first `len` squares, returning (ms, reallocations).
fn bench_appends(policy: GrowthPolicy, len: usize) -> Result<(f64, usize), cachelab::BufferError> {
    let start = Instant::now();
    let mut squares = GrowableBuffer::with_policy(policy);
    for i in 0..len {
        let x = i as f64;
        squares.append(x * x)?;
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    let reallocs = squares.reallocations();
    squares.destroy();
    Ok((elapsed, reallocs))
}

/// Run `f` once to warm up, then `repeats` times; returns (avg ms, GFLOPS).
fn time_repeats<F>(repeats: usize, m: usize, n: usize, k: usize, mut f: F) -> (f64, f64)
where
    F: FnMut(),
{
    f();

    let start = Instant::now();
    for _ in 0..repeats {
        f();
    }
    let avg = start.elapsed().as_secs_f64() / repeats as f64;
    let gflops = 2.0 * (m * n * k) as f64 / avg / 1e9;
    (avg * 1000.0, gflops)
}
