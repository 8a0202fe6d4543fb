pub mod equilibration;
pub mod summary;

pub use equilibration::{checkpoint_schedule, CheckpointAccum, EnergyCheckpoint};
pub use summary::EnergySummary;
