//! Single-spin-flip Metropolis sampling of the 2D Ising model on a periodic
//! square lattice.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod parallel;
pub mod simulation;
pub mod spins;
pub mod statistics;

pub use config::SimulationParameters;
pub use error::{IsingError, Result};
pub use geometry::Lattice;
pub use mcmc::{propose_flip, thermalize, MoveOutcome};
pub use simulation::{run_trials, run_trials_with_progress, TrialResults};
pub use spins::total_energy;
pub use statistics::{EnergyCheckpoint, EnergySummary};
