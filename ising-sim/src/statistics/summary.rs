/// Mean, population standard deviation and range of a set of energy samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl EnergySummary {
    /// `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        // two-pass variance, divided by n (population)
        let var = samples.iter().map(|&e| (e - mean) * (e - mean)).sum::<f64>() / n;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            mean,
            std_dev: var.sqrt(),
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary() {
        let s = EnergySummary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(s.mean, 5.0);
        assert_relative_eq!(s.std_dev, 2.0);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn test_single_sample() {
        let s = EnergySummary::from_samples(&[-12.5]).unwrap();
        assert_eq!(s.mean, -12.5);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.min, -12.5);
        assert_eq!(s.max, -12.5);
    }

    #[test]
    fn test_empty() {
        assert!(EnergySummary::from_samples(&[]).is_none());
    }
}
