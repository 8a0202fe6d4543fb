use rayon::prelude::*;

/// Map `body` over trial indices `0..n_trials`, optionally in parallel.
///
/// Results come back in trial order either way. When `sequential` is true the
/// trials run on the current thread (no rayon overhead, best when the caller
/// already parallelizes at a coarser level).
pub fn par_over_trials<T, F>(n_trials: usize, sequential: bool, body: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    if sequential || n_trials == 1 {
        (0..n_trials).map(body).collect()
    } else {
        (0..n_trials).into_par_iter().map(body).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let seq = par_over_trials(64, true, |k| k * k);
        let par = par_over_trials(64, false, |k| k * k);
        assert_eq!(seq, par);
        assert_eq!(seq[7], 49);
    }

    #[test]
    fn test_empty() {
        let out: Vec<usize> = par_over_trials(0, false, |k| k);
        assert!(out.is_empty());
    }
}
