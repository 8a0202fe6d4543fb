pub mod energy;

pub use energy::{energy_per_site, flip_energy_change, total_energy};
