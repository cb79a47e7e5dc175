#![cfg(feature = "parallel")]
use super::{kth_smallest, nearest_neighbour_error, NnAlgorithm, Strategy};
use crate::distance::DistanceMetric;
use crate::{MstError, TreeHyperParams};
use num_traits::Float;
use rayon::prelude::*;

/// Rayon counterpart of the serial core distance calculator. Produces identical results.
pub(crate) struct CoreDistanceCalculatorPar<'a, T> {
    data: &'a [Vec<T>],
    nn_algo: NnAlgorithm,
    dist_metric: DistanceMetric,
    k: usize,
}

impl<'a, T: Float + Send + Sync> CoreDistanceCalculatorPar<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], hp: &TreeHyperParams) -> Self {
        Self {
            data,
            nn_algo: hp.nn_algo,
            dist_metric: hp.dist_metric,
            k: hp.min_samples,
        }
    }

    pub(crate) fn calc_core_distances(&self) -> Result<Vec<T>, MstError> {
        match self.nn_algo.strategy_for(self.data.len()) {
            Strategy::BruteForce => Ok(self.brute_force()),
            Strategy::KdTree => self.kd_tree(),
        }
    }

    fn brute_force(&self) -> Vec<T> {
        let dist_func = self.dist_metric.dist_func::<T>();
        self.data
            .par_iter()
            .map(|point| {
                let distances = self.data.iter().map(|other| dist_func(point, other)).collect();
                kth_smallest(distances, self.k)
            })
            .collect()
    }

    fn kd_tree(&self) -> Result<Vec<T>, MstError> {
        let mut tree: kdtree::KdTree<T, usize, &Vec<T>> = kdtree::KdTree::new(self.data[0].len());
        for (n, datapoint) in self.data.iter().enumerate() {
            tree.add(datapoint, n).map_err(nearest_neighbour_error)?;
        }

        let dist_func = self.dist_metric.dist_func::<T>();
        self.data
            .par_iter()
            .map(|datapoint| {
                let neighbours = tree
                    .nearest(datapoint, self.k, &dist_func)
                    .map_err(nearest_neighbour_error)?;
                neighbours
                    .last()
                    .map(|(dist, _idx)| *dist)
                    .ok_or_else(|| MstError::NearestNeighbour(String::from("no neighbours found")))
            })
            .collect()
    }
}
