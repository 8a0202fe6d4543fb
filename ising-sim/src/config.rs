use validator::{Validate, ValidationError};

use crate::error::{IsingError, Result};

fn validate_parameters(cfg: &SimulationParameters) -> std::result::Result<(), ValidationError> {
    if cfg.size < 1 {
        return Err(ValidationError::new("size must be >= 1"));
    }
    if cfg.n_trials < 1 {
        return Err(ValidationError::new("n_trials must be >= 1"));
    }
    if !cfg.beta.is_finite() {
        return Err(ValidationError::new("beta must be finite"));
    }
    if !cfg.h.is_finite() {
        return Err(ValidationError::new("h must be finite"));
    }
    Ok(())
}

/// Read-only configuration for a batch of thermalization trials.
///
/// Trial `k` draws all of its randomness (initial spins, site selection,
/// acceptance) from a generator seeded with `seed + k`, so a batch is fully
/// determined by these fields regardless of how trials are scheduled.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_parameters"))]
pub struct SimulationParameters {
    /// Side length N of the N×N lattice.
    pub size: usize,
    /// Coupling strength of the nearest-neighbor term.
    pub beta: f64,
    /// External field.
    pub h: f64,
    /// Metropolis moves per trial (single-site proposals, not sweeps).
    pub n_steps: usize,
    /// Number of independent trials.
    pub n_trials: usize,
    /// Base seed for the per-trial generators.
    pub seed: u64,
    /// Run trials on the current thread instead of the rayon pool.
    pub sequential: bool,
    /// Record trial-averaged energies at the checkpoint schedule.
    pub checkpoints: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            size: 25,
            beta: 1.0,
            h: 0.1,
            n_steps: 1000,
            n_trials: 100,
            seed: 42,
            sequential: false,
            checkpoints: false,
        }
    }
}

impl SimulationParameters {
    /// Validate and convert any failure into [`IsingError::InvalidConfiguration`].
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| IsingError::InvalidConfiguration(format!("{e}")))
    }

    /// Total number of sites per lattice.
    pub fn n_sites(&self) -> usize {
        self.size * self.size
    }
}
