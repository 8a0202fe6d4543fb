pub mod trial;

pub use trial::{run_trial, trial_rng, TrialOutcome};

use tracing::{debug, info};

use crate::config::SimulationParameters;
use crate::error::{IsingError, Result};
use crate::parallel::par_over_trials;
use crate::statistics::{checkpoint_schedule, CheckpointAccum, EnergyCheckpoint, EnergySummary};

/// Energy samples of a batch of trials plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResults {
    /// One total energy per trial, in trial order.
    pub samples: Vec<f64>,
    pub summary: EnergySummary,
    /// Final mean spin per trial, in trial order.
    pub magnetizations: Vec<f64>,
    /// Accepted moves over proposed moves across all trials (0 with no moves).
    pub acceptance_rate: f64,
    /// Trial-averaged energies along the checkpoint schedule; empty unless
    /// `checkpoints` was requested.
    pub checkpoints: Vec<EnergyCheckpoint>,
}

/// Run `params.n_trials` independent thermalization trials.
pub fn run_trials(params: &SimulationParameters) -> Result<TrialResults> {
    run_trials_with_progress(params, &|| {})
}

/// Like [`run_trials`], calling `on_trial` once per finished trial (useful for
/// progress bars).
///
/// Trial `k` owns a fresh lattice and a generator seeded with `params.seed + k`,
/// so the samples are identical whether trials run on the rayon pool or, with
/// `params.sequential`, on the current thread.
pub fn run_trials_with_progress(
    params: &SimulationParameters,
    on_trial: &(dyn Fn() + Sync),
) -> Result<TrialResults> {
    params.check()?;

    let schedule = if params.checkpoints {
        checkpoint_schedule(params.n_steps)
    } else {
        Vec::new()
    };

    let outcomes: Vec<Result<TrialOutcome>> = par_over_trials(
        params.n_trials,
        params.sequential,
        |trial_id| -> Result<TrialOutcome> {
            let out = run_trial(params, trial_id, &schedule)?;
            debug!(
                trial_id,
                energy = out.energy,
                accepted = out.accepted,
                "trial finished"
            );
            on_trial();
            Ok(out)
        },
    );
    let outcomes: Vec<TrialOutcome> = outcomes.into_iter().collect::<Result<Vec<_>>>()?;

    let samples: Vec<f64> = outcomes.iter().map(|o| o.energy).collect();
    let magnetizations: Vec<f64> = outcomes.iter().map(|o| o.magnetization).collect();

    let summary = EnergySummary::from_samples(&samples).ok_or_else(|| {
        IsingError::InvalidConfiguration("no trials were run".to_string())
    })?;

    let n_moves = params.n_trials * params.n_steps;
    let n_accepted: usize = outcomes.iter().map(|o| o.accepted).sum();
    let acceptance_rate = if n_moves == 0 {
        0.0
    } else {
        n_accepted as f64 / n_moves as f64
    };

    let checkpoints = if schedule.is_empty() {
        Vec::new()
    } else {
        let mut accum = CheckpointAccum::new(schedule);
        for o in &outcomes {
            accum.push(&o.checkpoint_energies);
        }
        accum.finish()
    };

    info!(
        size = params.size,
        beta = params.beta,
        h = params.h,
        n_steps = params.n_steps,
        n_trials = params.n_trials,
        mean = summary.mean,
        std_dev = summary.std_dev,
        acceptance_rate,
        "trials complete"
    );

    Ok(TrialResults {
        samples,
        summary,
        magnetizations,
        acceptance_rate,
        checkpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small() -> SimulationParameters {
        SimulationParameters {
            size: 8,
            beta: 1.0,
            h: 0.1,
            n_steps: 400,
            n_trials: 24,
            seed: 1234,
            sequential: false,
            checkpoints: false,
        }
    }

    #[test]
    fn test_sample_count_and_mean() {
        let res = run_trials(&small()).unwrap();
        assert_eq!(res.samples.len(), 24);
        assert_eq!(res.magnetizations.len(), 24);
        let mean = res.samples.iter().sum::<f64>() / res.samples.len() as f64;
        assert_relative_eq!(res.summary.mean, mean, epsilon = 1e-9);
        assert!(res.summary.min <= res.summary.mean && res.summary.mean <= res.summary.max);
        assert_eq!(
            res.summary.min,
            res.samples.iter().copied().fold(f64::INFINITY, f64::min)
        );
        assert!(res.summary.std_dev >= 0.0);
        assert!(res.checkpoints.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = run_trials(&small()).unwrap();
        let b = run_trials(&small()).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let par = run_trials(&small()).unwrap();
        let seq = run_trials(&SimulationParameters {
            sequential: true,
            ..small()
        })
        .unwrap();
        assert_eq!(par.samples, seq.samples);
        assert_eq!(par.acceptance_rate, seq.acceptance_rate);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = run_trials(&small()).unwrap();
        let b = run_trials(&SimulationParameters {
            seed: 99,
            ..small()
        })
        .unwrap();
        assert_ne!(a.samples, b.samples);
    }

    #[test]
    fn test_progress_called_per_trial() {
        let count = AtomicUsize::new(0);
        run_trials_with_progress(&small(), &|| {
            count.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(count.load(Ordering::Relaxed), 24);
    }

    #[test]
    fn test_invalid_size() {
        let err = run_trials(&SimulationParameters {
            size: 0,
            ..small()
        })
        .unwrap_err();
        assert!(matches!(err, IsingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_steps_samples_random_lattices() {
        let res = run_trials(&SimulationParameters {
            n_steps: 0,
            ..small()
        })
        .unwrap();
        assert_eq!(res.acceptance_rate, 0.0);
        // random lattices: bond sum is centered on zero, far from the ground state
        assert!(res.summary.mean > -64.0, "mean = {}", res.summary.mean);
    }

    #[test]
    fn test_energy_decreases_over_checkpoints() {
        let res = run_trials(&SimulationParameters {
            size: 16,
            beta: 1.0,
            h: 0.0,
            n_steps: 8192,
            n_trials: 16,
            seed: 5,
            sequential: false,
            checkpoints: true,
        })
        .unwrap();
        let steps: Vec<usize> = res.checkpoints.iter().map(|c| c.step).collect();
        assert_eq!(steps, vec![128, 256, 512, 1024, 2048, 4096, 8192]);
        let first = res.checkpoints.first().unwrap().mean_energy;
        let last = res.checkpoints.last().unwrap().mean_energy;
        assert!(last < first, "first = {first}, last = {last}");
        assert_relative_eq!(last, res.summary.mean, epsilon = 1e-9);
    }
}
