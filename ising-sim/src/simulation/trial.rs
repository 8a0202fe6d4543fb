use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::SimulationParameters;
use crate::error::Result;
use crate::geometry::Lattice;
use crate::mcmc::{thermalize_with_checkpoints, thermalize_with_stats};

/// Outcome of one independent trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    /// Total energy after thermalization.
    pub energy: f64,
    /// Mean spin after thermalization.
    pub magnetization: f64,
    pub accepted: usize,
    /// Energies at the checkpoint schedule; empty unless requested.
    pub checkpoint_energies: Vec<f64>,
}

/// Generator for trial `trial_id`, seeded as `seed + trial_id`.
pub fn trial_rng(seed: u64, trial_id: usize) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed.wrapping_add(trial_id as u64))
}

/// Run one trial: fresh random lattice, `n_steps` moves, final energy.
///
/// The lattice and the generator live only for the duration of the call, so
/// trials never share mutable state.
pub fn run_trial(
    params: &SimulationParameters,
    trial_id: usize,
    schedule: &[usize],
) -> Result<TrialOutcome> {
    let mut rng = trial_rng(params.seed, trial_id);
    let mut lattice = Lattice::new(params.size, params.beta, params.h, &mut rng)?;

    let (therm, checkpoint_energies) = if schedule.is_empty() {
        (
            thermalize_with_stats(&mut lattice, params.n_steps, &mut rng),
            Vec::new(),
        )
    } else {
        let (therm, recorded) =
            thermalize_with_checkpoints(&mut lattice, params.n_steps, &mut rng, schedule);
        (therm, recorded.into_iter().map(|(_, e)| e).collect())
    };

    Ok(TrialOutcome {
        energy: therm.energy,
        magnetization: lattice.magnetization(),
        accepted: therm.accepted,
        checkpoint_energies,
    })
}
