//! Label-independent comparison of spanning trees.
//!
//! A tree arrives as a list of edges whose endpoints are indices into that tree's own
//! coordinate array. Indices from two differently ordered arrays cannot be compared, but
//! coordinates can. Every edge is therefore rewritten as a pair of coordinate tuples, smaller
//! tuple first, plus its weight. Two trees are equivalent when these canonical edge sets match.

use crate::data_wrappers::{CanonicalEdge, CanonicalPoint, CanonicalTree, MSTEdge};
use num_traits::Float;
use tracing::debug;

/// Looks up the coordinates of the point at `index`.
///
/// # Panics
/// If `index` is not a valid offset into `coordinates`. Edge lists are expected to come from
/// a spanning tree built over the same coordinate array.
pub fn resolve<T>(index: usize, coordinates: &[Vec<T>]) -> &[T] {
    &coordinates[index]
}

/// Rewrites the edge `index_a`-`index_b` in coordinate space. The result does not depend on
/// which endpoint is given first.
///
/// # Examples
/// ```
///use mst_equivalence::canonicalize;
///
///let coords = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
///assert_eq!(canonicalize(0, 1, 1.4, &coords), canonicalize(1, 0, 1.4, &coords));
/// ```
pub fn canonicalize<T: Float>(
    index_a: usize,
    index_b: usize,
    weight: T,
    coordinates: &[Vec<T>],
) -> CanonicalEdge<T> {
    let point_a = CanonicalPoint::from(resolve(index_a, coordinates));
    let point_b = CanonicalPoint::from(resolve(index_b, coordinates));
    CanonicalEdge::new(point_a, point_b, weight)
}

/// Canonicalizes every edge of a tree. Edges that coincide exactly in both endpoints and
/// weight collapse into one.
pub fn normalize<T: Float>(edges: &[MSTEdge<T>], coordinates: &[Vec<T>]) -> CanonicalTree<T> {
    edges
        .iter()
        .map(|edge| {
            canonicalize(
                edge.left_node_id,
                edge.right_node_id,
                edge.distance,
                coordinates,
            )
        })
        .collect()
}

/// Decides whether two spanning trees contain exactly the same undirected weighted edges in
/// coordinate space, however their points were ordered. Weights must match exactly.
///
/// Trees with a different number of edges are rejected without being normalized.
///
/// A `false` verdict for two trees over the same points can also mean that distance ties
/// allowed more than one minimum spanning tree, and the two builds broke the ties differently.
///
/// # Examples
/// ```
///use mst_equivalence::{are_equivalent, MSTEdge};
///
///let coords1 = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
///let edges1 = vec![MSTEdge::new(0, 1, 1.0), MSTEdge::new(0, 2, 1.0)];
///
///let coords2 = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]];
///let edges2 = vec![MSTEdge::new(0, 2, 1.0), MSTEdge::new(1, 2, 1.0)];
///
///assert!(are_equivalent(&edges1, &coords1, &edges2, &coords2));
/// ```
pub fn are_equivalent<T: Float>(
    edges1: &[MSTEdge<T>],
    coords1: &[Vec<T>],
    edges2: &[MSTEdge<T>],
    coords2: &[Vec<T>],
) -> bool {
    if !same_shape(edges1, edges2) {
        return false;
    }
    let tree1 = normalize(edges1, coords1);
    let tree2 = normalize(edges2, coords2);
    compare_canonical_trees(&tree1, &tree2)
}

/// Same verdict as [`are_equivalent`], with the two trees normalized on separate rayon tasks.
#[cfg(feature = "parallel")]
pub fn are_equivalent_par<T: Float + Send + Sync>(
    edges1: &[MSTEdge<T>],
    coords1: &[Vec<T>],
    edges2: &[MSTEdge<T>],
    coords2: &[Vec<T>],
) -> bool {
    if !same_shape(edges1, edges2) {
        return false;
    }
    let (tree1, tree2) = rayon::join(
        || normalize(edges1, coords1),
        || normalize(edges2, coords2),
    );
    compare_canonical_trees(&tree1, &tree2)
}

/// Like [`are_equivalent`], but two edges with identical endpoints match when their weights
/// differ by at most `tolerance`. Useful when the two trees computed their weights in a
/// different order and picked up rounding differences. Endpoints are still compared exactly.
///
/// # Examples
/// ```
///use mst_equivalence::{are_equivalent, are_equivalent_within, MSTEdge};
///
///let coords = vec![vec![0.0], vec![0.3]];
///let edges1 = vec![MSTEdge::new(0, 1, 0.1 + 0.2)];
///let edges2 = vec![MSTEdge::new(1, 0, 0.3)];
///
///assert!(!are_equivalent(&edges1, &coords, &edges2, &coords));
///assert!(are_equivalent_within(&edges1, &coords, &edges2, &coords, 1e-9));
/// ```
pub fn are_equivalent_within<T: Float>(
    edges1: &[MSTEdge<T>],
    coords1: &[Vec<T>],
    edges2: &[MSTEdge<T>],
    coords2: &[Vec<T>],
    tolerance: T,
) -> bool {
    if !same_shape(edges1, edges2) {
        return false;
    }
    let tree1 = normalize(edges1, coords1);
    let tree2 = normalize(edges2, coords2);
    if tree1.len() != tree2.len() {
        debug!(
            first = tree1.len(),
            second = tree2.len(),
            "canonical trees differ in size"
        );
        return false;
    }
    // Both sets iterate sorted by endpoints first, so matching edges line up
    tree1.iter().zip(tree2.iter()).all(|(a, b)| {
        a.same_endpoints(b) && (a.weight() - b.weight()).abs() <= tolerance
    })
}

/// Compares two edge-index matrices cell by cell. This looks at raw indices, so it is almost
/// always `false` for trees over reordered points even when they are equivalent. Only useful
/// as a diagnostic next to [`are_equivalent`].
pub fn matrices_equal<T: PartialEq>(m1: &[Vec<T>], m2: &[Vec<T>]) -> bool {
    if m1.len() != m2.len() || m1.iter().zip(m2).any(|(a, b)| a.len() != b.len()) {
        return false;
    }
    m1.iter()
        .zip(m2)
        .all(|(row1, row2)| row1.iter().zip(row2).all(|(a, b)| a == b))
}

fn same_shape<T>(edges1: &[MSTEdge<T>], edges2: &[MSTEdge<T>]) -> bool {
    if edges1.len() != edges2.len() {
        debug!(
            first = edges1.len(),
            second = edges2.len(),
            "edge lists differ in length"
        );
        return false;
    }
    true
}

fn compare_canonical_trees<T: Float>(tree1: &CanonicalTree<T>, tree2: &CanonicalTree<T>) -> bool {
    let equivalent = tree1 == tree2;
    debug!(
        first = tree1.len(),
        second = tree2.len(),
        equivalent,
        "compared canonical trees"
    );
    equivalent
}
