use rand::Rng;

use crate::error::{IsingError, Result};

/// Periodic N×N square lattice of ±1 spins.
///
/// Spins are stored in row-major (C) order in a flat `Vec<i8>`: site
/// `(row, col)` lives at `row * size + col`. Every coordinate passed to the
/// accessors is reduced with `rem_euclid(size)`, so any integer index names a
/// site of the torus and each site has exactly four neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    spins: Vec<i8>,
    beta: f64,
    h: f64,
}

impl Lattice {
    /// Create a lattice with i.i.d. uniform ±1 spins drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(size: usize, beta: f64, h: f64, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::InvalidConfiguration(
                "lattice size must be >= 1".to_string(),
            ));
        }
        let spins = (0..size * size)
            .map(|_| if rng.gen::<bool>() { 1 } else { -1 })
            .collect();
        Ok(Self {
            size,
            spins,
            beta,
            h,
        })
    }

    /// Build a lattice from explicit row-major spin values.
    pub fn from_spins(size: usize, spins: Vec<i8>, beta: f64, h: f64) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::InvalidConfiguration(
                "lattice size must be >= 1".to_string(),
            ));
        }
        if spins.len() != size * size {
            return Err(IsingError::InvalidConfiguration(format!(
                "expected {} spins for a {size}x{size} lattice, got {}",
                size * size,
                spins.len()
            )));
        }
        if let Some(pos) = spins.iter().position(|&s| s != 1 && s != -1) {
            return Err(IsingError::InvalidConfiguration(format!(
                "spin at flat index {pos} is {}, expected +1 or -1",
                spins[pos]
            )));
        }
        Ok(Self {
            size,
            spins,
            beta,
            h,
        })
    }

    /// Uniformly magnetized lattice (every spin equal to `value`'s sign).
    pub fn aligned(size: usize, value: i8, beta: f64, h: f64) -> Result<Self> {
        let s = if value < 0 { -1 } else { 1 };
        Self::from_spins(size, vec![s; size * size], beta, h)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn n_sites(&self) -> usize {
        self.spins.len()
    }

    /// Flat row-major view of all spins.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Flat index of `(row, col)` after periodic wraparound.
    #[inline]
    pub fn index(&self, row: isize, col: isize) -> usize {
        let n = self.size as isize;
        (row.rem_euclid(n) * n + col.rem_euclid(n)) as usize
    }

    #[inline]
    pub fn spin_at(&self, row: isize, col: isize) -> i8 {
        self.spins[self.index(row, col)]
    }

    /// Set a spin; `value` is reduced to its sign (negative → -1, else +1).
    #[inline]
    pub fn set_spin_at(&mut self, row: isize, col: isize, value: i8) {
        let idx = self.index(row, col);
        self.spins[idx] = if value < 0 { -1 } else { 1 };
    }

    #[inline]
    pub fn flip(&mut self, row: isize, col: isize) {
        let idx = self.index(row, col);
        self.spins[idx] = -self.spins[idx];
    }

    /// Spins of the four periodic neighbors: up, down, left, right.
    #[inline]
    pub fn neighbors(&self, row: isize, col: isize) -> [i8; 4] {
        [
            self.spin_at(row - 1, col),
            self.spin_at(row + 1, col),
            self.spin_at(row, col - 1),
            self.spin_at(row, col + 1),
        ]
    }

    #[inline]
    pub fn neighbor_sum(&self, row: isize, col: isize) -> i32 {
        self.neighbors(row, col).iter().map(|&s| s as i32).sum()
    }

    /// Mean spin, in `[-1, 1]`.
    pub fn magnetization(&self) -> f64 {
        let sum: i64 = self.spins.iter().map(|&s| s as i64).sum();
        sum as f64 / self.n_sites() as f64
    }
}
