#[cfg(feature = "parallel")]
use crate::core_distances::parallel::CoreDistanceCalculatorPar;
use crate::core_distances::serial::CoreDistanceCalculator;
use crate::data_wrappers::{float_cmp, CanonicalTree, MSTEdge};
use crate::equivalence;
use crate::validation::DataValidator;
use crate::{MstError, TreeHyperParams};
use num_traits::Float;
use tracing::debug;

/// A spanning tree together with the coordinate array its edge indices refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    edges: Vec<MSTEdge<T>>,
    points: Vec<Vec<T>>,
}

impl<T: Float> SpanningTree<T> {
    /// Pairs an edge list with its coordinate array. The edges are trusted to index into
    /// `points`; nothing is checked here.
    pub fn new(edges: Vec<MSTEdge<T>>, points: Vec<Vec<T>>) -> Self {
        SpanningTree { edges, points }
    }

    pub fn edges(&self) -> &[MSTEdge<T>] {
        &self.edges
    }

    pub fn points(&self) -> &[Vec<T>] {
        &self.points
    }

    pub fn n_samples(&self) -> usize {
        self.points.len()
    }

    pub fn total_weight(&self) -> T {
        self.edges
            .iter()
            .map(|edge| edge.distance)
            .fold(T::zero(), std::ops::Add::add)
    }

    /// The edge list as `[left, right, weight]` rows, indices converted to `T`.
    pub fn to_matrix(&self) -> Vec<Vec<T>> {
        self.edges
            .iter()
            .map(|edge| {
                vec![
                    T::from(edge.left_node_id).unwrap_or_else(T::nan),
                    T::from(edge.right_node_id).unwrap_or_else(T::nan),
                    edge.distance,
                ]
            })
            .collect()
    }

    pub fn canonical_edges(&self) -> CanonicalTree<T> {
        equivalence::normalize(&self.edges, &self.points)
    }

    /// Whether both trees hold the same weighted edges in coordinate space.
    /// See [`are_equivalent`](crate::are_equivalent).
    pub fn is_equivalent_to(&self, other: &SpanningTree<T>) -> bool {
        equivalence::are_equivalent(&self.edges, &self.points, &other.edges, &other.points)
    }
}

/// Anything able to turn a set of points into a spanning tree over them.
pub trait SpanningTreeBuilder<T> {
    fn build(&self, data: &[Vec<T>]) -> Result<SpanningTree<T>, MstError>;
}

/// Builds the minimum spanning tree HDBSCAN works on: a tree over mutual reachability
/// distances, `max(core(a), core(b), dist(a, b))`, where the core distance of a point is the
/// distance to its `min_samples`th nearest neighbour. With `min_samples` of 1 this is the
/// ordinary Euclidean (or Manhattan, or Chebyshev) minimum spanning tree.
///
/// # Examples
/// ```
///use mst_equivalence::{MutualReachabilityMst, SpanningTreeBuilder, TreeHyperParams};
///
///let data: Vec<Vec<f64>> = vec![
///    vec![0.0, 0.0],
///    vec![3.0, 0.0],
///    vec![0.0, 1.0],
///];
///let hp = TreeHyperParams::builder().min_samples(1).build();
///let tree = MutualReachabilityMst::new(hp).build(&data).unwrap();
///assert_eq!(2, tree.edges().len());
///assert_eq!(4.0, tree.total_weight());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutualReachabilityMst {
    hp: TreeHyperParams,
}

impl MutualReachabilityMst {
    pub fn new(hyper_params: TreeHyperParams) -> Self {
        MutualReachabilityMst { hp: hyper_params }
    }

    pub fn default_hyper_params() -> Self {
        MutualReachabilityMst::new(TreeHyperParams::default())
    }

    pub fn hyper_params(&self) -> &TreeHyperParams {
        &self.hp
    }

    /// Same as [`SpanningTreeBuilder::build`], with core distances computed on the rayon
    /// thread pool. Not worth it for small datasets.
    #[cfg(feature = "parallel")]
    pub fn build_par<T: Float + Send + Sync>(
        &self,
        data: &[Vec<T>],
    ) -> Result<SpanningTree<T>, MstError> {
        DataValidator::new(data).validate_for_tree(&self.hp)?;
        let core_distances = CoreDistanceCalculatorPar::new(data, &self.hp).calc_core_distances()?;
        Ok(self.assemble(data, &core_distances))
    }

    fn assemble<T: Float>(&self, data: &[Vec<T>], core_distances: &[T]) -> SpanningTree<T> {
        let edges = self.prims_min_spanning_tree(data, core_distances);
        debug!(
            n_samples = data.len(),
            n_edges = edges.len(),
            metric = %self.hp.dist_metric,
            "built spanning tree"
        );
        SpanningTree::new(edges, data.to_vec())
    }

    fn prims_min_spanning_tree<T: Float>(
        &self,
        data: &[Vec<T>],
        core_distances: &[T],
    ) -> Vec<MSTEdge<T>> {
        let n_samples = data.len();
        let mut in_tree = vec![false; n_samples];
        let mut distances = vec![T::infinity(); n_samples];
        let mut parents = vec![0; n_samples];
        let mut mst = Vec::with_capacity(n_samples.saturating_sub(1));

        let mut newest_node = 0;
        for _ in 1..n_samples {
            in_tree[newest_node] = true;
            let mut closest: Option<usize> = None;

            for i in 0..n_samples {
                if in_tree[i] {
                    continue;
                }
                let mrd = self.calc_mutual_reachability_dist(data, newest_node, i, core_distances);
                if mrd < distances[i] {
                    distances[i] = mrd;
                    parents[i] = newest_node;
                }
                if closest.map_or(true, |c| distances[i] < distances[c]) {
                    closest = Some(i);
                }
            }

            let Some(next_node) = closest else { break };
            mst.push(MSTEdge::new(parents[next_node], next_node, distances[next_node]));
            newest_node = next_node;
        }
        mst.sort_by(|a, b| float_cmp(&a.distance, &b.distance));
        mst
    }

    fn calc_mutual_reachability_dist<T: Float>(
        &self,
        data: &[Vec<T>],
        a: usize,
        b: usize,
        core_distances: &[T],
    ) -> T {
        let dist_a_b = self.hp.dist_metric.calc_dist(&data[a], &data[b]);
        core_distances[a].max(core_distances[b]).max(dist_a_b)
    }
}

impl<T: Float> SpanningTreeBuilder<T> for MutualReachabilityMst {
    fn build(&self, data: &[Vec<T>]) -> Result<SpanningTree<T>, MstError> {
        DataValidator::new(data).validate_for_tree(&self.hp)?;
        let core_distances = CoreDistanceCalculator::new(data, &self.hp).calc_core_distances()?;
        Ok(self.assemble(data, &core_distances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DistanceMetric, NnAlgorithm};

    fn plain_mst() -> MutualReachabilityMst {
        MutualReachabilityMst::new(TreeHyperParams::builder().min_samples(1).build())
    }

    fn edge_set(tree: &SpanningTree<f64>) -> Vec<(usize, usize)> {
        let mut pairs: Vec<_> = tree
            .edges()
            .iter()
            .map(|e| (e.left_node_id.min(e.right_node_id), e.left_node_id.max(e.right_node_id)))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn tree_has_one_edge_fewer_than_points() {
        let data = vec![
            vec![0.0, 0.0],
            vec![5.0, 5.0],
            vec![1.0, 0.2],
            vec![5.5, 4.0],
            vec![2.3, 1.0],
        ];
        let tree = plain_mst().build(&data).unwrap();
        assert_eq!(4, tree.edges().len());
        assert_eq!(5, tree.n_samples());
        assert_eq!(&data[..], tree.points());
    }

    #[test]
    fn edges_join_nearest_parent_not_newest_node() {
        // Star around the origin: every leaf hangs off point 0, even though the leaves are
        // added one after another
        let data = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, -1.1],
            vec![-1.2, 0.0],
            vec![0.0, 1.3],
        ];
        let tree = plain_mst().build(&data).unwrap();
        assert_eq!(vec![(0, 1), (0, 2), (0, 3), (0, 4)], edge_set(&tree));
    }

    #[test]
    fn edges_are_sorted_by_weight() {
        let data = vec![vec![0.0], vec![10.0], vec![1.0], vec![3.0]];
        let tree = plain_mst().build(&data).unwrap();
        let weights: Vec<f64> = tree.edges().iter().map(|e| e.distance).collect();
        assert_eq!(vec![1.0, 2.0, 7.0], weights);
        assert_eq!(10.0, tree.total_weight());
    }

    #[test]
    fn mutual_reachability_raises_weights_to_core_distance() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
        let hp = TreeHyperParams::builder()
            .min_samples(3)
            .nn_algorithm(NnAlgorithm::BruteForce)
            .build();
        let tree = MutualReachabilityMst::new(hp).build(&data).unwrap();
        // Core distances are 2, 1, 2 and 9
        let weights: Vec<f64> = tree.edges().iter().map(|e| e.distance).collect();
        assert_eq!(vec![2.0, 2.0, 9.0], weights);
    }

    #[test]
    fn manhattan_metric() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let hp = TreeHyperParams::builder()
            .min_samples(1)
            .dist_metric(DistanceMetric::Manhattan)
            .build();
        let tree = MutualReachabilityMst::new(hp).build(&data).unwrap();
        assert_eq!(2.0, tree.total_weight());
    }

    #[test]
    fn single_point_has_no_edges() {
        let data = vec![vec![4.0, 2.0]];
        let tree = plain_mst().build(&data).unwrap();
        assert!(tree.edges().is_empty());
    }

    #[test]
    fn too_few_points_for_min_samples() {
        let data = vec![vec![0.0], vec![1.0]];
        let result = MutualReachabilityMst::default_hyper_params().build(&data);
        assert!(matches!(result, Err(MstError::InvalidParameter(..))));
    }

    #[test]
    fn matrix_rows() {
        let tree = SpanningTree::new(
            vec![MSTEdge::new(2, 0, 1.5), MSTEdge::new(1, 2, 0.5)],
            vec![vec![0.0], vec![2.0], vec![1.5]],
        );
        assert_eq!(vec![vec![2.0, 0.0, 1.5], vec![1.0, 2.0, 0.5]], tree.to_matrix());
    }

    #[test]
    fn canonical_edges_use_coordinates() {
        let tree = SpanningTree::new(
            vec![MSTEdge::new(1, 0, 2.0)],
            vec![vec![3.0], vec![1.0]],
        );
        let canonical = tree.canonical_edges();
        let edge = canonical.iter().next().unwrap();
        assert_eq!(&[1.0], edge.low().coords());
        assert_eq!(&[3.0], edge.high().coords());
    }
}
