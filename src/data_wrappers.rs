use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A set of canonical edges. Iterates in ascending canonical order.
pub type CanonicalTree<T> = BTreeSet<CanonicalEdge<T>>;

/// One edge of a spanning tree, with endpoints given as local indices into the coordinate
/// array the tree was built over.
#[derive(Clone, Debug, PartialEq)]
pub struct MSTEdge<T> {
    pub left_node_id: usize,
    pub right_node_id: usize,
    pub distance: T,
}

impl<T> MSTEdge<T> {
    pub fn new(left_node_id: usize, right_node_id: usize, distance: T) -> Self {
        MSTEdge {
            left_node_id,
            right_node_id,
            distance,
        }
    }
}

impl<T> From<(usize, usize, T)> for MSTEdge<T> {
    fn from((left_node_id, right_node_id, distance): (usize, usize, T)) -> Self {
        MSTEdge::new(left_node_id, right_node_id, distance)
    }
}

/// Total order over floats. Agrees with `==` for every number (so `-0.0` equals `0.0`), and
/// places NaN after all numbers and equal to itself.
pub(crate) fn float_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

/// A point identified by its coordinates rather than by its position in an array.
/// Ordered lexicographically, coordinate by coordinate.
#[derive(Clone, Debug)]
pub struct CanonicalPoint<T>(Vec<T>);

impl<T: Float> CanonicalPoint<T> {
    pub fn coords(&self) -> &[T] {
        &self.0
    }
}

impl<T: Float> From<&[T]> for CanonicalPoint<T> {
    fn from(coords: &[T]) -> Self {
        CanonicalPoint(coords.to_vec())
    }
}

impl<T: Float> From<Vec<T>> for CanonicalPoint<T> {
    fn from(coords: Vec<T>) -> Self {
        CanonicalPoint(coords)
    }
}

impl<T: Float> Ord for CanonicalPoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| float_cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.0.len().cmp(&other.0.len()))
    }
}

impl<T: Float> PartialOrd for CanonicalPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> PartialEq for CanonicalPoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T: Float> Eq for CanonicalPoint<T> {}

/// An undirected weighted edge expressed in coordinate space. The endpoints are always stored
/// low first, so an edge and its reverse are the same value.
#[derive(Clone, Debug)]
pub struct CanonicalEdge<T> {
    low: CanonicalPoint<T>,
    high: CanonicalPoint<T>,
    weight: T,
}

impl<T: Float> CanonicalEdge<T> {
    pub fn new(a: CanonicalPoint<T>, b: CanonicalPoint<T>, weight: T) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        CanonicalEdge { low, high, weight }
    }

    pub fn low(&self) -> &CanonicalPoint<T> {
        &self.low
    }

    pub fn high(&self) -> &CanonicalPoint<T> {
        &self.high
    }

    pub fn weight(&self) -> T {
        self.weight
    }

    pub(crate) fn same_endpoints(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<T: Float> Ord for CanonicalEdge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.low
            .cmp(&other.low)
            .then_with(|| self.high.cmp(&other.high))
            .then_with(|| float_cmp(&self.weight, &other.weight))
    }
}

impl<T: Float> PartialOrd for CanonicalEdge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> PartialEq for CanonicalEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T: Float> Eq for CanonicalEdge<T> {}
