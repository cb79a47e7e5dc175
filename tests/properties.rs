use mst_equivalence::{are_equivalent, canonicalize, normalize, MSTEdge};
use proptest::prelude::*;

type Tree = (Vec<Vec<f64>>, Vec<MSTEdge<f64>>);

/// Random points with a random tree over them: every point after the first hangs off an
/// earlier one. Also yields a permutation of the point indices.
fn tree_and_permutation() -> impl Strategy<Value = (Tree, Vec<usize>)> {
    (2usize..40).prop_flat_map(|n| {
        let points = prop::collection::vec(prop::collection::vec(-1e3f64..1e3, 2), n);
        let edges = (1..n)
            .map(|child| {
                (0..child, 0.0f64..10.0)
                    .prop_map(move |(parent, weight)| MSTEdge::new(parent, child, weight))
            })
            .collect::<Vec<_>>();
        let permutation = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
        ((points, edges), permutation)
    })
}

/// Moves the point at old index `permutation[j]` to position `j`, rewrites the edges to
/// match, flips every other edge and reverses the edge order.
fn relabel(points: &[Vec<f64>], edges: &[MSTEdge<f64>], permutation: &[usize]) -> Tree {
    let mut new_index = vec![0; permutation.len()];
    for (new, &old) in permutation.iter().enumerate() {
        new_index[old] = new;
    }
    let new_points = permutation.iter().map(|&old| points[old].clone()).collect();
    let new_edges = edges
        .iter()
        .enumerate()
        .rev()
        .map(|(n, edge)| {
            let (a, b) = (new_index[edge.left_node_id], new_index[edge.right_node_id]);
            if n % 2 == 0 {
                MSTEdge::new(a, b, edge.distance)
            } else {
                MSTEdge::new(b, a, edge.distance)
            }
        })
        .collect();
    (new_points, new_edges)
}

proptest! {
    #[test]
    fn relabelled_tree_is_equivalent(((points, edges), permutation) in tree_and_permutation()) {
        let (new_points, new_edges) = relabel(&points, &edges, &permutation);
        prop_assert!(are_equivalent(&edges, &points, &new_edges, &new_points));
        prop_assert!(are_equivalent(&new_edges, &new_points, &edges, &points));
    }

    #[test]
    fn tree_is_equivalent_to_itself(((points, edges), _permutation) in tree_and_permutation()) {
        prop_assert!(are_equivalent(&edges, &points, &edges, &points));
    }

    #[test]
    fn bumped_weight_is_detected(
        ((points, edges), permutation) in tree_and_permutation(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (new_points, mut new_edges) = relabel(&points, &edges, &permutation);
        let k = pick.index(new_edges.len());
        new_edges[k].distance += 1.0;
        prop_assert!(!are_equivalent(&edges, &points, &new_edges, &new_points));
    }

    #[test]
    fn canonical_form_ignores_endpoint_order(
        ((points, _edges), permutation) in tree_and_permutation(),
        weight in 0.0f64..100.0,
    ) {
        let (a, b) = (permutation[0], permutation[permutation.len() - 1]);
        prop_assert_eq!(
            canonicalize(a, b, weight, &points),
            canonicalize(b, a, weight, &points)
        );
    }

    #[test]
    fn normalized_tree_has_one_edge_per_input_edge(
        ((points, edges), _permutation) in tree_and_permutation(),
    ) {
        // Random coordinates never coincide, so nothing collapses
        prop_assert_eq!(edges.len(), normalize(&edges, &points).len());
    }
}
