use crate::core::utils::geometry::{DihedralMode, dihedral_properties};
use crate::graphs::atom_bond::AtomBondGraph;
use crate::graphs::bond_angle::BondAngleGraph;
use crate::graphs::graph::{EdgeAccumulator, FeatureGraph};
use tracing::debug;

/// Stage 3: the dihedral graph.
///
/// Each directed edge of the bond-angle graph (an adjacent bond pair)
/// becomes a node carrying that edge's triangle features. Two nodes are
/// joined when their bond-angle edges chain head-to-tail and the four
/// underlying atoms are pairwise distinct, which rejects 3-cycles and
/// back-tracking paths; the edge carries the torsion descriptor of the four
/// atoms in chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct DihedralGraph {
    graph: FeatureGraph,
}

impl DihedralGraph {
    /// Derives the dihedral graph, or `None` when no qualifying torsion
    /// exists. The `None` sentinel is a valid terminal state that callers
    /// must handle; a zero-edge dihedral graph is never returned.
    pub fn build(
        atom_bond: &AtomBondGraph,
        bond_angle: &BondAngleGraph,
        mode: DihedralMode,
    ) -> Option<Self> {
        let lg_src = bond_angle.graph().src();
        let lg_dst = bond_angle.graph().dst();
        let node_count = bond_angle.graph().edge_count();

        let g_src = atom_bond.graph().src();
        let g_dst = atom_bond.graph().dst();

        let mut edges = EdgeAccumulator::new(mode.feature_width());
        for p in 0..node_count {
            // A bond-angle edge, read as a pair of half-edge ids.
            let (m, h) = (lg_src[p], lg_dst[p]);
            for q in (p + 1)..node_count {
                let (s, t) = (lg_src[q], lg_dst[q]);

                let atoms = if h == s && m != t {
                    let n = t;
                    [g_src[m], g_dst[m], g_dst[h], g_dst[n]]
                } else if m == t && h != s {
                    let n = s;
                    [g_src[n], g_dst[n], g_dst[m], g_dst[h]]
                } else {
                    continue;
                };

                if !pairwise_distinct(&atoms) {
                    continue;
                }

                let feature = dihedral_properties(
                    atom_bond.position(atoms[0]),
                    atom_bond.position(atoms[1]),
                    atom_bond.position(atoms[2]),
                    atom_bond.position(atoms[3]),
                    mode,
                );
                edges.push_symmetric(p, q, &feature);
            }
        }

        if edges.is_empty() {
            debug!("No qualifying torsion; dihedral graph omitted.");
            return None;
        }

        debug!(
            nodes = node_count,
            edges = edges.len(),
            "Dihedral graph assembled."
        );

        let node_features = bond_angle.graph().edge_features().clone();
        let (src, dst, edge_features) = edges.into_parts();
        Some(Self {
            graph: FeatureGraph::new(node_count, node_features, src, dst, edge_features),
        })
    }

    pub fn graph(&self) -> &FeatureGraph {
        &self.graph
    }
}

fn pairwise_distinct(atoms: &[usize; 4]) -> bool {
    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            if atoms[i] == atoms[j] {
                return false;
            }
        }
    }
    true
}
