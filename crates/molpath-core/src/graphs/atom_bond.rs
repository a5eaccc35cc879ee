use crate::core::features::atom::{STRUCTURAL_WIDTH, encode_atom_structure};
use crate::core::features::bond::{EDGE_FEATURE_WIDTH, encode_bonded, encode_non_bonded};
use crate::core::models::molecule::Molecule;
use crate::core::oracles::chemistry::ChemistryOracle;
use crate::core::oracles::geometry::GeometryOracle;
use crate::core::utils::geometry::distance;
use crate::graphs::config::GraphConfig;
use crate::graphs::error::GraphError;
use crate::graphs::graph::{EdgeAccumulator, FeatureGraph, matrix_from_rows};
use nalgebra::Point3;
use std::collections::HashSet;
use tracing::debug;

/// Stage 1: the atom-bond graph.
///
/// Nodes are atoms; directed edges are the bonded half-edge pairs followed
/// by the cutoff non-bonded half-edge pairs. Bonded half-edges occupy the
/// leading positions of the edge enumeration, which the derived stages rely
/// on for their node identity.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomBondGraph {
    graph: FeatureGraph,
    positions: Vec<Point3<f64>>,
    bonded: Vec<bool>,
    bonded_half_edge_count: usize,
}

impl AtomBondGraph {
    /// Builds the atom-bond graph for one molecule.
    ///
    /// # Errors
    ///
    /// Fails for the whole molecule on: atom count over the ceiling, an
    /// embedding failure, a conformer of the wrong size, an unresolvable
    /// element descriptor, an out-of-range categorical descriptor, or a
    /// coincident non-bonded pair. No partial graph is ever returned.
    pub fn build<G, C>(
        molecule: &Molecule,
        geometry: &G,
        chemistry: &C,
        config: &GraphConfig,
    ) -> Result<Self, GraphError>
    where
        G: GeometryOracle,
        C: ChemistryOracle,
    {
        let atom_count = molecule.atom_count();
        if atom_count > config.max_atoms {
            return Err(GraphError::TooLarge {
                count: atom_count,
                ceiling: config.max_atoms,
            });
        }

        let conformer = geometry.embed(molecule)?;
        if conformer.positions.len() != atom_count || conformer.partial_charges.len() != atom_count
        {
            return Err(GraphError::ConformerMismatch {
                atoms: atom_count,
                positions: conformer.positions.len(),
                charges: conformer.partial_charges.len(),
            });
        }

        let descriptor_width = chemistry.descriptor_width(&config.atom_scheme)?;
        let node_width = descriptor_width + STRUCTURAL_WIDTH;
        let adjacency = molecule.adjacency();

        let mut node_rows = Vec::with_capacity(atom_count);
        for (index, atom) in molecule.atoms().iter().enumerate() {
            let mut row = chemistry.atom_descriptor(&atom.element, &config.atom_scheme)?;
            if row.len() != descriptor_width {
                return Err(GraphError::DescriptorWidth {
                    atom: index,
                    expected: descriptor_width,
                    got: row.len(),
                });
            }
            let degree = adjacency[index].len();
            let hydrogen_count = adjacency[index]
                .iter()
                .filter(|&&neighbor| molecule.atoms()[neighbor].is_hydrogen())
                .count();
            let structural = encode_atom_structure(atom, degree, hydrogen_count)
                .map_err(|source| GraphError::Encoding { atom: index, source })?;
            row.extend(structural);
            node_rows.push(row);
        }

        let mut edges = EdgeAccumulator::new(EDGE_FEATURE_WIDTH);
        for bond in molecule.bonds() {
            let feature = encode_bonded(bond);
            edges.push_symmetric(bond.atom1, bond.atom2, &feature);
        }
        let bonded_half_edge_count = edges.len();

        let bonded_pairs: HashSet<(usize, usize)> = molecule
            .bonds()
            .iter()
            .map(|bond| (bond.atom1, bond.atom2))
            .collect();
        for i in 0..atom_count {
            for j in (i + 1)..atom_count {
                if bonded_pairs.contains(&(i, j)) {
                    continue;
                }
                let dist = distance(&conformer.positions[i], &conformer.positions[j]);
                if dist > config.cutoff {
                    continue;
                }
                if dist == 0.0 {
                    return Err(GraphError::DegenerateConformer { atom1: i, atom2: j });
                }
                let feature = encode_non_bonded(
                    conformer.partial_charges[i],
                    conformer.partial_charges[j],
                    dist,
                );
                edges.push_symmetric(i, j, &feature);
            }
        }

        debug!(
            atoms = atom_count,
            bonded_half_edges = bonded_half_edge_count,
            non_bonded_half_edges = edges.len() - bonded_half_edge_count,
            "Atom-bond graph assembled."
        );

        let total_edges = edges.len();
        let (src, dst, edge_features) = edges.into_parts();
        let bonded = (0..total_edges)
            .map(|edge| edge < bonded_half_edge_count)
            .collect();

        Ok(Self {
            graph: FeatureGraph::new(
                atom_count,
                matrix_from_rows(node_width, node_rows),
                src,
                dst,
                edge_features,
            ),
            positions: conformer.positions,
            bonded,
            bonded_half_edge_count,
        })
    }

    pub fn graph(&self) -> &FeatureGraph {
        &self.graph
    }

    /// Conformer coordinates, indexed by atom id.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn position(&self, atom: usize) -> &Point3<f64> {
        &self.positions[atom]
    }

    /// Whether the directed edge at this position is a bonded half-edge.
    pub fn is_bonded_edge(&self, edge: usize) -> bool {
        self.bonded[edge]
    }

    /// Bonded half-edges occupy edge positions `0..bonded_half_edge_count`.
    pub fn bonded_half_edge_count(&self) -> usize {
        self.bonded_half_edge_count
    }
}
