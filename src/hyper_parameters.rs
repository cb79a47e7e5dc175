use crate::core_distances::NnAlgorithm;
use crate::distance::DistanceMetric;
use tracing::warn;

// Defaults for parameters
const MIN_SAMPLES_DEFAULT: usize = 5;
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::Euclidean;
const NN_ALGORITHM_DEFAULT: NnAlgorithm = NnAlgorithm::Auto;

// Valid minimums/left bounds of parameters
const MIN_SAMPLES_MINIMUM: usize = 1;

/// The parameters of the mutual reachability spanning tree builder.
/// Use `TreeHyperParams::builder()` to tune them, or
/// `MutualReachabilityMst::default_hyper_params()` to build with the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeHyperParams {
    pub(crate) min_samples: usize,
    pub(crate) dist_metric: DistanceMetric,
    pub(crate) nn_algo: NnAlgorithm,
}

/// Builder object to set custom hyper parameters.
#[derive(Debug, Default)]
pub struct TreeParamBuilder {
    min_samples: Option<usize>,
    dist_metric: Option<DistanceMetric>,
    nn_algo: Option<NnAlgorithm>,
}

impl Default for TreeHyperParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TreeHyperParams {
    /// Enters the builder pattern, allowing custom hyper parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn builder() -> TreeParamBuilder {
        TreeParamBuilder::default()
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }

    pub fn nn_algorithm(&self) -> NnAlgorithm {
        self.nn_algo
    }
}

impl TreeParamBuilder {
    /// Sets min samples. The core distance of a point is the distance to its kth nearest
    /// neighbour, counting the point itself, where k = min_samples. Edge weights in the tree
    /// are mutual reachability distances: the largest of the two core distances and the
    /// distance between the points. A value of 1 gives a plain minimum spanning tree.
    /// Defaults to 5.
    ///
    /// # Parameters
    /// * min_samples - the number of neighbourhood points considered in distances
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn min_samples(mut self, min_samples: usize) -> TreeParamBuilder {
        let valid_min_samples = TreeParamBuilder::validate_input_left_bound(
            min_samples,
            MIN_SAMPLES_MINIMUM,
            "min_samples",
        );
        self.min_samples = Some(valid_min_samples);
        self
    }

    /// Sets the distance metric used between points. Defaults to Euclidean.
    ///
    /// # Parameters
    /// * dist_metric - the distance metric
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> TreeParamBuilder {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Sets the nearest neighbour algorithm used to find core distances. Only affects
    /// performance, never the tree. Defaults to Auto, which picks brute force for small
    /// datasets and a k-d tree otherwise.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn nn_algorithm(mut self, nn_algorithm: NnAlgorithm) -> TreeParamBuilder {
        self.nn_algo = Some(nn_algorithm);
        self
    }

    /// Finishes the building of the hyper parameter configuration.
    ///
    /// # Returns
    /// * The completed spanning tree hyper parameters.
    pub fn build(self) -> TreeHyperParams {
        TreeHyperParams {
            min_samples: self.min_samples.unwrap_or(MIN_SAMPLES_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
            nn_algo: self.nn_algo.unwrap_or(NN_ALGORITHM_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            warn!(
                "{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else {
            input_param
        }
    }
}
