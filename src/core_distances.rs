use crate::data_wrappers::float_cmp;
use crate::MstError;
use num_traits::Float;
use std::fmt::Debug;

#[cfg(feature = "parallel")]
pub(crate) mod parallel;
pub(crate) mod serial;

// Up to this many points, Auto computes every pairwise distance rather than building a k-d tree
pub(crate) const BRUTE_FORCE_N_SAMPLES_LIMIT: usize = 250;

/// The nearest neighbour algorithm options
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NnAlgorithm {
    /// Selects brute force or a k-d tree based on the number of points
    Auto,
    /// Computes the distance from each point to all others
    BruteForce,
    /// K-dimensional tree algorithm.
    KdTree,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Strategy {
    BruteForce,
    KdTree,
}

impl NnAlgorithm {
    pub(crate) fn strategy_for(&self, n_samples: usize) -> Strategy {
        match self {
            NnAlgorithm::Auto if n_samples <= BRUTE_FORCE_N_SAMPLES_LIMIT => Strategy::BruteForce,
            NnAlgorithm::Auto => Strategy::KdTree,
            NnAlgorithm::BruteForce => Strategy::BruteForce,
            NnAlgorithm::KdTree => Strategy::KdTree,
        }
    }
}

/// The kth smallest distance, counting from 1. The caller guarantees `1 <= k <= len`.
pub(crate) fn kth_smallest<T: Float>(mut distances: Vec<T>, k: usize) -> T {
    let (_, kth, _) = distances.select_nth_unstable_by(k - 1, |a, b| float_cmp(a, b));
    *kth
}

pub(crate) fn nearest_neighbour_error<E: Debug>(err: E) -> MstError {
    MstError::NearestNeighbour(format!("{err:?}"))
}
