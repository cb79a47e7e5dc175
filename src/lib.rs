//! Checks whether two minimum spanning trees, built over two differently ordered copies of the
//! same points, are the same tree. Generic over floating point numeric types.
//!
//! A correct minimum spanning tree algorithm must not care about the order its input arrives
//! in: shuffle the points, rebuild, and the same edges with the same weights should come out.
//! Checking that is harder than it sounds, because each tree names its endpoints by their
//! position in its own array, and those positions change with the shuffle. This crate
//! compares trees by coordinates instead:
//!  1. every edge endpoint is replaced by the coordinates it refers to;
//!  2. the two endpoints are put in lexicographic order, so an edge and its reverse coincide;
//!     and
//!  3. the resulting sets of (point, point, weight) triples are compared.
//!
//! Weights are compared exactly. When more than one minimum spanning tree exists (distance
//! ties) two valid builds can differ, and the verdict is `false`; that is a property of the
//! data, not necessarily a bug in the builder.
//!
//! The crate also ships the builder HDBSCAN uses, a Prim's minimum spanning tree over mutual
//! reachability distances, so that whole pipelines can be checked for order independence.
//!
//! # Examples
//! ```
//!use mst_equivalence::{MutualReachabilityMst, SpanningTreeBuilder, TreeHyperParams};
//!
//!let data: Vec<Vec<f64>> = vec![
//!    vec![1.5, 2.2],
//!    vec![1.0, 1.1],
//!    vec![1.2, 1.4],
//!    vec![0.8, 1.0],
//!    vec![3.7, 4.0],
//!    vec![3.9, 3.8],
//!];
//!let mut shuffled = data.clone();
//!shuffled.rotate_left(2);
//!
//!let hp = TreeHyperParams::builder().min_samples(1).build();
//!let builder = MutualReachabilityMst::new(hp);
//!let tree1 = builder.build(&data).unwrap();
//!let tree2 = builder.build(&shuffled).unwrap();
//!assert!(tree1.is_equivalent_to(&tree2));
//! ```
//!
//! # References
//! * [How HDBSCAN Works](https://hdbscan.readthedocs.io/en/latest/how_hdbscan_works.html)

pub use crate::core_distances::NnAlgorithm;
pub use crate::data_wrappers::{CanonicalEdge, CanonicalPoint, CanonicalTree, MSTEdge};
pub use crate::distance::DistanceMetric;
#[cfg(feature = "parallel")]
pub use crate::equivalence::are_equivalent_par;
pub use crate::equivalence::{
    are_equivalent, are_equivalent_within, canonicalize, matrices_equal, normalize, resolve,
};
pub use crate::error::MstError;
pub use crate::hyper_parameters::{TreeHyperParams, TreeParamBuilder};
pub use crate::input::{parse_csv_points, parse_whitespace_points};
pub use crate::plot::plot_trees;
pub use crate::report::{verdict_line, Comparison};
pub use crate::spanning_tree::{MutualReachabilityMst, SpanningTree, SpanningTreeBuilder};

mod core_distances;
mod data_wrappers;
mod distance;
mod equivalence;
mod error;
mod hyper_parameters;
mod input;
mod plot;
mod report;
mod spanning_tree;
mod validation;
