//! Benchmark every local search algorithm on random 8-puzzles and on N-Queens.
//!
//! Set `RUST_LOG=debug` to follow individual searches.

use anyhow::Result as AnyResult;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use puzzle_localsearch::bench::{BenchConfig, run_eight_puzzle_batch, run_n_queens_batch};

fn create_pbar(n_trials: u64, label: &str) -> AnyResult<ProgressBar> {
    let pb = ProgressBar::new(n_trials);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {msg} [{wide_bar:.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );
    pb.set_message(label.to_string());
    pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
    Ok(pb)
}

fn main() -> AnyResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = BenchConfig::default();
    info!("puzzle-bench {}", puzzle_localsearch::VERSION);
    let mut rng = config.make_rng();

    let pb = create_pbar(config.trials as u64, "8-puzzle")?;
    let report = run_eight_puzzle_batch(&config, &mut rng, |_| pb.inc(1));
    pb.finish_and_clear();
    println!("{report}");

    let pb = create_pbar(config.trials as u64, "n-queens")?;
    let report = run_n_queens_batch(&config, &mut rng, |_| pb.inc(1))?;
    pb.finish_and_clear();
    println!("{report}");

    Ok(())
}
