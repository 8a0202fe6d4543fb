use std::time::Instant;

use ising_sim::{run_trials, SimulationParameters};

const L: usize = 64;
const N_STEPS: usize = 200 * L * L;
const N_TRIALS: usize = 32;

fn main() {
    let base = SimulationParameters {
        size: L,
        beta: 0.44,
        h: 0.0,
        n_steps: N_STEPS,
        n_trials: N_TRIALS,
        seed: 42,
        sequential: false,
        checkpoints: false,
    };

    println!(
        "Lattice: {}x{}  |  Steps: {}  |  Trials: {}",
        L, L, N_STEPS, N_TRIALS
    );
    println!("{}", "-".repeat(70));

    for sequential in [true, false] {
        let config = SimulationParameters {
            sequential,
            ..base.clone()
        };
        let t0 = Instant::now();
        let res = run_trials(&config).unwrap();
        let elapsed = t0.elapsed().as_secs_f64();
        let per_move = elapsed / (N_STEPS * N_TRIALS) as f64 * 1e9;
        println!(
            "{:<10}  total: {:.3} s  |  {:.2} ns/move  |  <E> = {:.2}",
            if sequential { "sequential" } else { "parallel" },
            elapsed,
            per_move,
            res.summary.mean
        );
    }
}
