use crate::core::utils::geometry::{TriangleMode, triangle_properties};
use crate::graphs::atom_bond::AtomBondGraph;
use crate::graphs::graph::{EdgeAccumulator, FeatureGraph};
use ndarray::s;
use tracing::debug;

/// Stage 2: the bond-angle graph.
///
/// Each bonded half-edge of the atom-bond graph becomes a node (id = its
/// position in the bonded half-edge enumeration; non-bonded half-edges are
/// not numbered and never connected). Two nodes are joined when their
/// half-edges meet head-to-tail on exactly one shared atom, and the edge
/// carries the triangle descriptor of the three atoms involved.
#[derive(Debug, Clone, PartialEq)]
pub struct BondAngleGraph {
    graph: FeatureGraph,
}

impl BondAngleGraph {
    /// Derives the bond-angle graph. A molecule without adjacent bonds
    /// yields a graph with nodes and zero edges.
    pub fn build(atom_bond: &AtomBondGraph, mode: TriangleMode) -> Self {
        let node_count = atom_bond.bonded_half_edge_count();
        let src = atom_bond.graph().src();
        let dst = atom_bond.graph().dst();

        let node_features = atom_bond
            .graph()
            .edge_features()
            .slice(s![..node_count, ..])
            .to_owned();

        let mut edges = EdgeAccumulator::new(mode.feature_width());
        for i in 0..node_count {
            let (src_i, dst_i) = (src[i], dst[i]);
            for j in (i + 1)..node_count {
                let (src_j, dst_j) = (src[j], dst[j]);

                // Head-to-tail sharing of exactly one atom; identical or
                // reversed half-edges never match.
                let (a, b, c) = if dst_i == src_j && src_i != dst_j {
                    (src_i, src_j, dst_j)
                } else if src_i == dst_j && dst_i != src_j {
                    (dst_i, src_i, src_j)
                } else {
                    continue;
                };

                let feature = triangle_properties(
                    atom_bond.position(a),
                    atom_bond.position(b),
                    atom_bond.position(c),
                    mode,
                );
                edges.push_symmetric(i, j, &feature);
            }
        }

        debug!(
            nodes = node_count,
            edges = edges.len(),
            "Bond-angle graph assembled."
        );

        let (lg_src, lg_dst, edge_features) = edges.into_parts();
        Self {
            graph: FeatureGraph::new(node_count, node_features, lg_src, lg_dst, edge_features),
        }
    }

    pub fn graph(&self) -> &FeatureGraph {
        &self.graph
    }
}
