use crate::geometry::Lattice;

/// Total energy `E = -beta * Σ_<ij> s_i s_j - h * Σ_i s_i`.
///
/// Each site contributes its forward bonds only (right and down neighbor,
/// wrapping at the boundary), so every undirected edge of the torus is
/// counted exactly once. A 2×2 all-up lattice at `beta = 1, h = 0` gives
/// `-8`: four sites times two forward bonds.
pub fn total_energy(lattice: &Lattice) -> f64 {
    let n = lattice.size();
    let spins = lattice.spins();

    let mut bonds = 0i64;
    let mut field = 0i64;

    #[allow(clippy::needless_range_loop)]
    for row in 0..n {
        let down_row = if row + 1 == n { 0 } else { row + 1 };
        for col in 0..n {
            let right_col = if col + 1 == n { 0 } else { col + 1 };
            let si = spins[row * n + col] as i64;
            bonds += si * spins[row * n + right_col] as i64;
            bonds += si * spins[down_row * n + col] as i64;
            field += si;
        }
    }

    -lattice.beta() * bonds as f64 - lattice.h() * field as f64
}

/// Energy per site.
pub fn energy_per_site(lattice: &Lattice) -> f64 {
    total_energy(lattice) / lattice.n_sites() as f64
}

/// Energy change from flipping the spin at `(row, col)`:
/// `ΔE = 2 * s * (beta * Σn + h)`, with `Σn` the four periodic neighbors.
#[inline]
pub fn flip_energy_change(lattice: &Lattice, row: isize, col: isize) -> f64 {
    let s = lattice.spin_at(row, col) as f64;
    let neighbor_sum = lattice.neighbor_sum(row, col) as f64;
    2.0 * s * (lattice.beta() * neighbor_sum + lattice.h())
}
