use rand::Rng;

use super::metropolis::propose_flip;
use crate::geometry::Lattice;
use crate::spins::total_energy;

/// Result of driving one lattice through a fixed number of moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermalization {
    /// Total energy after the last move.
    pub energy: f64,
    /// Number of accepted moves.
    pub accepted: usize,
}

/// Run exactly `steps` Metropolis moves on `lattice`, then return its total
/// energy. Each step is one single-site proposal, not a full sweep.
pub fn thermalize<R: Rng + ?Sized>(lattice: &mut Lattice, steps: usize, rng: &mut R) -> f64 {
    thermalize_with_stats(lattice, steps, rng).energy
}

pub fn thermalize_with_stats<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    steps: usize,
    rng: &mut R,
) -> Thermalization {
    let mut accepted = 0usize;
    for _ in 0..steps {
        if propose_flip(lattice, rng).accepted {
            accepted += 1;
        }
    }
    Thermalization {
        energy: total_energy(lattice),
        accepted,
    }
}

/// Like [`thermalize_with_stats`], also recording the total energy right after
/// each step count in `schedule` (ascending; entries past `steps` are ignored).
///
/// The move sequence and RNG consumption are identical to the plain run, so
/// enabling checkpoints never changes the final sample.
pub fn thermalize_with_checkpoints<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    steps: usize,
    rng: &mut R,
    schedule: &[usize],
) -> (Thermalization, Vec<(usize, f64)>) {
    let mut recorded = Vec::with_capacity(schedule.len());
    let mut next = schedule.iter().copied().peekable();
    let mut accepted = 0usize;

    for step in 1..=steps {
        if propose_flip(lattice, rng).accepted {
            accepted += 1;
        }
        while next.peek() == Some(&step) {
            next.next();
            recorded.push((step, total_energy(lattice)));
        }
    }

    let energy = total_energy(lattice);
    (Thermalization { energy, accepted }, recorded)
}
