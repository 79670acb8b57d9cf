//! Side-by-side timing of the two solvers across growing input sizes.

use std::time::{Duration, Instant};

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::lis::{lis_dp, lis_patience};

/// Value range used for generated comparison sequences.
const COMPARE_MAX_VALUE: i64 = 10_000;

/// Fills a sequence with `len` uniform values in `0..max_value`.
///
/// # Panics
///
/// Panics if `max_value` is not positive.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize, max_value: i64) -> Vec<i64> {
    assert!(max_value > 0, "max_value must be positive");
    (0..len).map(|_| rng.gen_range(0..max_value)).collect()
}

/// Configuration for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Input sizes measured, in order.
    pub sizes: Vec<usize>,
    /// Largest size the quadratic solver still runs at; larger sizes skip
    /// the quadratic measurement so a comparison never stalls.
    pub dp_cutoff: usize,
    /// Seed for reproducible sequences; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CompareConfig {
    /// The sizes and cutoff the `compare` subcommand uses.
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000],
            dp_cutoff: 2_000,
            seed: None,
        }
    }
}

/// Timings gathered by [`run_comparison`].
#[derive(Debug, Clone)]
pub struct CompareReport {
    pub sizes: Vec<usize>,
    /// One cell per size; `None` where the size was over the cutoff.
    pub dp_times: Vec<Option<Duration>>,
    pub patience_times: Vec<Duration>,
    /// LIS length observed at each size.
    pub lis_lengths: Vec<usize>,
    pub dp_cutoff: usize,
}

impl CompareReport {
    /// True when at least one quadratic measurement was skipped.
    pub fn dp_skipped(&self) -> bool {
        self.dp_times.iter().any(Option::is_none)
    }
}

/// Times both solvers on one fresh random sequence per configured size.
///
/// `progress` runs before each size is measured, so a driver can show
/// which size is in flight. Sizes over the cutoff record `None` for the
/// quadratic solver and still measure the patience solver.
pub fn run_comparison<F>(config: &CompareConfig, mut progress: F) -> CompareReport
where
    F: FnMut(usize),
{
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let mut dp_times = Vec::with_capacity(config.sizes.len());
    let mut patience_times = Vec::with_capacity(config.sizes.len());
    let mut lis_lengths = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        progress(n);
        let values = random_sequence(&mut rng, n, COMPARE_MAX_VALUE);

        let start = Instant::now();
        let fast = lis_patience(&values);
        let patience_time = start.elapsed();
        patience_times.push(patience_time);
        lis_lengths.push(fast.len());
        debug!("n = {n}: patience took {patience_time:?}");

        if n <= config.dp_cutoff {
            let start = Instant::now();
            let slow = lis_dp(&values);
            let dp_time = start.elapsed();
            dp_times.push(Some(dp_time));
            debug!("n = {n}: dp took {dp_time:?}");
            debug_assert_eq!(slow.len(), fast.len(), "solvers disagree on LIS length");
        } else {
            debug!("n = {n}: dp skipped (cutoff {})", config.dp_cutoff);
            dp_times.push(None);
        }
    }

    CompareReport {
        sizes: config.sizes.clone(),
        dp_times,
        patience_times,
        lis_lengths,
        dp_cutoff: config.dp_cutoff,
    }
}
