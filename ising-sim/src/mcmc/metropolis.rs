use rand::Rng;

use crate::geometry::Lattice;
use crate::spins::flip_energy_change;

/// What a single Metropolis proposal did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub row: usize,
    pub col: usize,
    /// Local energy change the flip would cause (or caused).
    pub delta_energy: f64,
    pub accepted: bool,
}

/// One single-spin-flip Metropolis move.
///
/// Picks a site uniformly (row first, then column), computes the local
/// `ΔE = 2 s (beta Σn + h)` and flips the spin if `ΔE <= 0` or, otherwise, if
/// a fresh uniform draw in `[0, 1)` falls below `exp(-ΔE)`. No acceptance draw
/// is consumed for downhill moves. At most one site changes.
#[cfg_attr(feature = "profile", inline(never))]
pub fn propose_flip<R: Rng + ?Sized>(lattice: &mut Lattice, rng: &mut R) -> MoveOutcome {
    let n = lattice.size();
    let row = rng.gen_range(0..n);
    let col = rng.gen_range(0..n);

    let delta_energy = flip_energy_change(lattice, row as isize, col as isize);
    let accepted = delta_energy <= 0.0 || rng.gen::<f64>() < (-delta_energy).exp();
    if accepted {
        lattice.flip(row as isize, col as isize);
    }

    MoveOutcome {
        row,
        col,
        delta_energy,
        accepted,
    }
}
