use crate::MstError;
use num_traits::Float;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Distance metrics available to the spanning tree builder for measuring how far apart two
/// points are.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Straight line distance.
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
    /// Largest absolute coordinate difference.
    Chebyshev,
}

impl DistanceMetric {
    pub fn calc_dist<T: Float>(&self, a: &[T], b: &[T]) -> T {
        self.dist_func::<T>()(a, b)
    }

    pub(crate) fn dist_func<T: Float>(&self) -> fn(&[T], &[T]) -> T {
        match self {
            DistanceMetric::Euclidean => euclidean_distance,
            DistanceMetric::Manhattan => manhattan_distance,
            DistanceMetric::Chebyshev => chebyshev_distance,
        }
    }
}

impl Display for DistanceMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Chebyshev => "chebyshev",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DistanceMetric {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(DistanceMetric::Euclidean),
            "manhattan" | "cityblock" | "l1" => Ok(DistanceMetric::Manhattan),
            "chebyshev" | "infinity" => Ok(DistanceMetric::Chebyshev),
            other => Err(MstError::InvalidParameter(format!(
                "unknown distance metric \"{other}\", expected euclidean, manhattan or chebyshev"
            ))),
        }
    }
}

fn coordinate_gaps<'a, T: Float>(a: &'a [T], b: &'a [T]) -> impl Iterator<Item = T> + 'a {
    a.iter().zip(b.iter()).map(|(&x, &y)| (x - y).abs())
}

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    coordinate_gaps(a, b)
        .map(|gap| gap * gap)
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

pub(crate) fn manhattan_distance<T: Float>(a: &[T], b: &[T]) -> T {
    coordinate_gaps(a, b).fold(T::zero(), std::ops::Add::add)
}

pub(crate) fn chebyshev_distance<T: Float>(a: &[T], b: &[T]) -> T {
    coordinate_gaps(a, b).fold(T::zero(), |widest, gap| widest.max(gap))
}
