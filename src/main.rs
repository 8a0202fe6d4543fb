use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising_sim::{run_trials_with_progress, SimulationParameters};
use tracing_subscriber::EnvFilter;

/// Thermalize independent 2D Ising lattices with Metropolis moves and report
/// their energy statistics.
#[derive(Debug, Parser)]
#[command(name = "ising", version, about)]
struct Args {
    /// Lattice side length N (N×N sites).
    #[arg(long, default_value_t = 25)]
    size: usize,

    /// Coupling strength of the nearest-neighbor term.
    #[arg(long, default_value_t = 1.0)]
    beta: f64,

    /// External field h.
    #[arg(long = "field", default_value_t = 0.1, allow_negative_numbers = true)]
    h: f64,

    /// Metropolis moves per trial (single-site proposals).
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Number of independent trials.
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Base seed; trial k uses seed + k.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run all trials on one thread.
    #[arg(long)]
    sequential: bool,

    /// Print trial-averaged energies along the thermalization.
    #[arg(long)]
    checkpoints: bool,
}

impl From<&Args> for SimulationParameters {
    fn from(args: &Args) -> Self {
        Self {
            size: args.size,
            beta: args.beta,
            h: args.h,
            n_steps: args.steps,
            n_trials: args.trials,
            seed: args.seed,
            sequential: args.sequential,
            checkpoints: args.checkpoints,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = SimulationParameters::from(&args);

    let pb = ProgressBar::new(params.n_trials as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .context("invalid progress bar template")?
        .progress_chars("=> "),
    );
    pb.set_message("trials");

    let results = run_trials_with_progress(&params, &|| pb.inc(1))
        .context("simulation failed")?;
    pb.finish_and_clear();

    let s = &results.summary;
    println!(
        "Lattice {}x{}, beta = {}, h = {}, {} steps, {} trials",
        params.size, params.size, params.beta, params.h, params.n_steps, params.n_trials
    );
    println!("Mean energy: {:.2}", s.mean);
    println!("Standard deviation: {:.2}", s.std_dev);
    println!("Energy range: [{:.2}, {:.2}]", s.min, s.max);
    println!("Acceptance rate: {:.4}", results.acceptance_rate);

    if !results.checkpoints.is_empty() {
        println!();
        println!("{:>10}  {:>14}", "step", "mean energy");
        for c in &results.checkpoints {
            println!("{:>10}  {:>14.2}", c.step, c.mean_energy);
        }
    }

    Ok(())
}
