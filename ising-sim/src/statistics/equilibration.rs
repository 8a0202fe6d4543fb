/// Trial-averaged total energy after `step` Metropolis moves.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyCheckpoint {
    pub step: usize,
    pub mean_energy: f64,
}

/// Steps at which thermalization records the energy: powers of two from 128
/// that lie below `n_steps`, then `n_steps` itself. Empty for `n_steps == 0`.
pub fn checkpoint_schedule(n_steps: usize) -> Vec<usize> {
    if n_steps == 0 {
        return Vec::new();
    }
    let mut checkpoints = Vec::new();
    let mut p = 128usize;
    while p < n_steps {
        checkpoints.push(p);
        p *= 2;
    }
    checkpoints.push(n_steps);
    checkpoints
}

/// Sums per-checkpoint energies over trials.
pub struct CheckpointAccum {
    steps: Vec<usize>,
    sum_energy: Vec<f64>,
    count: usize,
}

impl CheckpointAccum {
    pub fn new(steps: Vec<usize>) -> Self {
        let n = steps.len();
        Self {
            steps,
            sum_energy: vec![0.0; n],
            count: 0,
        }
    }

    /// Add one trial's energies, one per scheduled step and in schedule order.
    pub fn push(&mut self, energies: &[f64]) {
        debug_assert_eq!(energies.len(), self.steps.len());
        self.count += 1;
        for (acc, &e) in self.sum_energy.iter_mut().zip(energies.iter()) {
            *acc += e;
        }
    }

    pub fn finish(self) -> Vec<EnergyCheckpoint> {
        if self.count == 0 {
            return Vec::new();
        }
        let c = self.count as f64;
        self.steps
            .into_iter()
            .zip(self.sum_energy)
            .map(|(step, sum)| EnergyCheckpoint {
                step,
                mean_energy: sum / c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule() {
        assert!(checkpoint_schedule(0).is_empty());
        assert_eq!(checkpoint_schedule(1), vec![1]);
        assert_eq!(checkpoint_schedule(128), vec![128]);
        assert_eq!(checkpoint_schedule(129), vec![128, 129]);
        assert_eq!(checkpoint_schedule(1000), vec![128, 256, 512, 1000]);
        assert_eq!(checkpoint_schedule(1024), vec![128, 256, 512, 1024]);
    }

    #[test]
    fn test_accum_means() {
        let mut acc = CheckpointAccum::new(vec![128, 256]);
        acc.push(&[-10.0, -20.0]);
        acc.push(&[-30.0, -40.0]);
        let out = acc.finish();
        assert_eq!(
            out,
            vec![
                EnergyCheckpoint {
                    step: 128,
                    mean_energy: -20.0
                },
                EnergyCheckpoint {
                    step: 256,
                    mean_energy: -30.0
                },
            ]
        );
    }

    #[test]
    fn test_empty_accum() {
        assert!(CheckpointAccum::new(vec![128]).finish().is_empty());
    }
}
