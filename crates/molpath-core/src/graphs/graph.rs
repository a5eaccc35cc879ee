use ndarray::Array2;

/// A finished graph stage: dense node ids, a directed edge list in parallel
/// `src`/`dst` vectors, and one feature matrix per node set and edge set.
///
/// Edges always come in symmetric directed pairs occupying adjacent rows
/// with identical features. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGraph {
    node_count: usize,
    src: Vec<usize>,
    dst: Vec<usize>,
    node_features: Array2<f64>,
    edge_features: Array2<f64>,
}

impl FeatureGraph {
    pub(crate) fn new(
        node_count: usize,
        node_features: Array2<f64>,
        src: Vec<usize>,
        dst: Vec<usize>,
        edge_features: Array2<f64>,
    ) -> Self {
        debug_assert_eq!(node_features.nrows(), node_count);
        debug_assert_eq!(src.len(), dst.len());
        debug_assert_eq!(edge_features.nrows(), src.len());
        Self {
            node_count,
            src,
            dst,
            node_features,
            edge_features,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of directed edges (half-edges count individually).
    pub fn edge_count(&self) -> usize {
        self.src.len()
    }

    /// Source node ids, one per directed edge.
    pub fn src(&self) -> &[usize] {
        &self.src
    }

    /// Destination node ids, one per directed edge.
    pub fn dst(&self) -> &[usize] {
        &self.dst
    }

    /// Iterates directed edges as `(src, dst)` pairs in emission order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.src.iter().copied().zip(self.dst.iter().copied())
    }

    /// Node feature matrix, `node_count` x feature width.
    pub fn node_features(&self) -> &Array2<f64> {
        &self.node_features
    }

    /// Edge feature matrix, `edge_count` x feature width.
    pub fn edge_features(&self) -> &Array2<f64> {
        &self.edge_features
    }
}

/// Accumulates symmetric directed edge pairs with fixed-width feature rows.
pub(crate) struct EdgeAccumulator {
    width: usize,
    src: Vec<usize>,
    dst: Vec<usize>,
    features: Vec<f64>,
}

impl EdgeAccumulator {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            src: Vec::new(),
            dst: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Emits the directed pair `a -> b`, `b -> a`, both rows carrying
    /// `feature`.
    pub fn push_symmetric(&mut self, a: usize, b: usize, feature: &[f64]) {
        debug_assert_eq!(feature.len(), self.width);
        self.src.push(a);
        self.dst.push(b);
        self.features.extend_from_slice(feature);
        self.src.push(b);
        self.dst.push(a);
        self.features.extend_from_slice(feature);
    }

    /// Number of directed edges accumulated so far.
    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Array2<f64>) {
        let rows = self.src.len();
        let matrix = Array2::from_shape_vec((rows, self.width), self.features)
            .expect("accumulated feature rows share one width");
        (self.src, self.dst, matrix)
    }
}

/// Stacks equally wide feature rows into a matrix; an empty row set yields
/// a 0 x `width` matrix.
pub(crate) fn matrix_from_rows(width: usize, rows: Vec<Vec<f64>>) -> Array2<f64> {
    let mut flat = Vec::with_capacity(rows.len() * width);
    for row in &rows {
        debug_assert_eq!(row.len(), width);
        flat.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows.len(), width), flat).expect("feature rows share one width")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_emits_symmetric_pairs_with_identical_rows() {
        let mut acc = EdgeAccumulator::new(2);
        acc.push_symmetric(0, 1, &[1.0, 2.0]);
        acc.push_symmetric(1, 2, &[3.0, 4.0]);
        let (src, dst, features) = acc.into_parts();

        assert_eq!(src, vec![0, 1, 1, 2]);
        assert_eq!(dst, vec![1, 0, 2, 1]);
        assert_eq!(features.nrows(), 4);
        assert_eq!(features.row(0), features.row(1));
        assert_eq!(features.row(2), features.row(3));
        assert_eq!(features[[2, 0]], 3.0);
    }

    #[test]
    fn empty_accumulator_yields_empty_matrix_of_declared_width() {
        let acc = EdgeAccumulator::new(7);
        let (src, dst, features) = acc.into_parts();
        assert!(src.is_empty());
        assert!(dst.is_empty());
        assert_eq!(features.shape(), &[0, 7]);
    }

    #[test]
    fn matrix_from_rows_preserves_row_order() {
        let matrix = matrix_from_rows(3, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(matrix.shape(), &[2, 3]);
        assert_eq!(matrix[[1, 2]], 6.0);
    }

    #[test]
    fn feature_graph_exposes_edges_in_emission_order() {
        let mut acc = EdgeAccumulator::new(1);
        acc.push_symmetric(0, 1, &[9.0]);
        let (src, dst, edge_features) = acc.into_parts();
        let graph = FeatureGraph::new(2, matrix_from_rows(1, vec![vec![0.0], vec![1.0]]), src, dst, edge_features);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 0)]);
    }
}
