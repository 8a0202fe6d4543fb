pub mod metropolis;
pub mod thermalize;

pub use metropolis::{propose_flip, MoveOutcome};
pub use thermalize::{thermalize, thermalize_with_checkpoints, thermalize_with_stats, Thermalization};
