#![allow(dead_code)]
use mst_equivalence::{
    are_equivalent, matrices_equal, MSTEdge, MstError, MutualReachabilityMst, NnAlgorithm,
    SpanningTree, TreeHyperParams,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub type BuildFn = fn(&MutualReachabilityMst, &[Vec<f64>]) -> Result<SpanningTree<f64>, MstError>;
pub type EquivFn = fn(&SpanningTree<f64>, &SpanningTree<f64>) -> bool;

pub fn test_permuted_points_are_equivalent(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(60, 2, 7);
    let shuffled = shuffle(&data, 11);
    let builder = plain_builder(NnAlgorithm::Auto);

    let tree1 = build_fn(&builder, &data).unwrap();
    let tree2 = build_fn(&builder, &shuffled).unwrap();
    assert_eq!(59, tree1.edges().len());
    assert!(equiv_fn(&tree1, &tree2));
    // Raw indices change with the ordering even though the trees do not
    assert!(!matrices_equal(&tree1.to_matrix(), &tree2.to_matrix()));
}

pub fn test_permutation_invariance_with_kd_tree(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(400, 3, 3);
    let shuffled = shuffle(&data, 5);
    let builder = plain_builder(NnAlgorithm::KdTree);

    let tree1 = build_fn(&builder, &data).unwrap();
    let tree2 = build_fn(&builder, &shuffled).unwrap();
    assert!(equiv_fn(&tree1, &tree2));
}

pub fn test_identity_permutation_keeps_matrices(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(25, 2, 1);
    let builder = MutualReachabilityMst::default_hyper_params();

    let tree1 = build_fn(&builder, &data).unwrap();
    let tree2 = build_fn(&builder, &data).unwrap();
    assert!(equiv_fn(&tree1, &tree2));
    assert!(matrices_equal(&tree1.to_matrix(), &tree2.to_matrix()));
}

pub fn test_reflexive(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(30, 4, 19);
    let tree = build_fn(&MutualReachabilityMst::default_hyper_params(), &data).unwrap();
    assert!(equiv_fn(&tree, &tree));
}

pub fn test_weight_change_is_detected(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(20, 2, 23);
    let tree = build_fn(&plain_builder(NnAlgorithm::BruteForce), &data).unwrap();

    let mut edges = tree.edges().to_vec();
    edges[7].distance += 0.25;
    let mutated = SpanningTree::new(edges, tree.points().to_vec());
    assert!(!equiv_fn(&tree, &mutated));
}

pub fn test_different_point_counts_are_rejected(build_fn: BuildFn, equiv_fn: EquivFn) {
    let data = random_points(20, 2, 29);
    let builder = plain_builder(NnAlgorithm::Auto);

    let tree1 = build_fn(&builder, &data).unwrap();
    let tree2 = build_fn(&builder, &data[..19]).unwrap();
    assert!(!equiv_fn(&tree1, &tree2));
}

pub fn test_reordered_triangle(_build_fn: BuildFn, equiv_fn: EquivFn) {
    let (tree1, tree2) = triangle_trees(1.0);
    assert!(equiv_fn(&tree1, &tree2));
}

pub fn test_reordered_triangle_with_changed_weight(_build_fn: BuildFn, equiv_fn: EquivFn) {
    let (tree1, tree2) = triangle_trees(1.5);
    assert!(!equiv_fn(&tree1, &tree2));
}

pub fn test_ties_keep_total_weight(build_fn: BuildFn, equiv_fn: EquivFn) {
    // Corners of a unit square: four equally short sides, so several minimum spanning trees
    // exist and the verdict depends on how ties were broken
    let data = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
    ];
    let reversed: Vec<_> = data.iter().rev().cloned().collect();
    let builder = plain_builder(NnAlgorithm::BruteForce);

    let tree1 = build_fn(&builder, &data).unwrap();
    let tree2 = build_fn(&builder, &reversed).unwrap();
    assert_eq!(tree1.total_weight(), tree2.total_weight());
    assert_eq!(equiv_fn(&tree1, &tree2), equiv_fn(&tree2, &tree1));
}

pub fn test_empty_data(build_fn: BuildFn, _equiv_fn: EquivFn) {
    let data: Vec<Vec<f64>> = Vec::new();
    let result = build_fn(&MutualReachabilityMst::default_hyper_params(), &data);
    assert!(matches!(result, Err(MstError::EmptyDataset)));
}

pub fn test_mismatched_dimensions(build_fn: BuildFn, _equiv_fn: EquivFn) {
    let data = vec![vec![1.5, 2.2], vec![1.0, 1.1], vec![1.2]];
    let result = build_fn(&plain_builder(NnAlgorithm::Auto), &data);
    assert!(matches!(result, Err(MstError::WrongDimension(..))));
}

pub fn test_non_finite_coordinate(build_fn: BuildFn, _equiv_fn: EquivFn) {
    let data = vec![vec![1.5, f64::INFINITY]];
    let result = build_fn(&plain_builder(NnAlgorithm::Auto), &data);
    assert!(matches!(result, Err(MstError::NonFiniteCoordinate(..))));
}

pub fn test_min_samples_too_large(build_fn: BuildFn, _equiv_fn: EquivFn) {
    let data = random_points(4, 2, 31);
    let result = build_fn(&MutualReachabilityMst::default_hyper_params(), &data);
    assert!(matches!(result, Err(MstError::InvalidParameter(..))));
}

pub fn plain_builder(nn_algo: NnAlgorithm) -> MutualReachabilityMst {
    let hp = TreeHyperParams::builder()
        .min_samples(1)
        .nn_algorithm(nn_algo)
        .build();
    MutualReachabilityMst::new(hp)
}

pub fn random_points(n: usize, dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dims).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

pub fn shuffle(data: &[Vec<f64>], seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut copy = data.to_vec();
    copy.shuffle(&mut rng);
    copy
}

pub fn triangle_trees(second_weight: f64) -> (SpanningTree<f64>, SpanningTree<f64>) {
    let tree1 = SpanningTree::new(
        vec![MSTEdge::new(0, 1, 1.0), MSTEdge::new(0, 2, 1.0)],
        vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]],
    );
    let tree2 = SpanningTree::new(
        vec![MSTEdge::new(0, 2, 1.0), MSTEdge::new(1, 2, second_weight)],
        vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
    );
    assert_eq!(
        are_equivalent(tree1.edges(), tree1.points(), tree2.edges(), tree2.points()),
        tree1.is_equivalent_to(&tree2)
    );
    (tree1, tree2)
}
