use crate::core::models::molecule::Molecule;
use crate::core::oracles::chemistry::ChemistryOracle;
use crate::core::oracles::geometry::GeometryOracle;
use crate::graphs::atom_bond::AtomBondGraph;
use crate::graphs::bond_angle::BondAngleGraph;
use crate::graphs::config::GraphConfig;
use crate::graphs::dihedral::DihedralGraph;
use crate::graphs::error::GraphError;
use tracing::{info, instrument};

/// All graph stages derived from one molecule.
///
/// `dihedral` is `None` when the molecule contains no 4-atom path that
/// survives the distinctness guard; consumers must branch on it rather than
/// expect a zero-edge graph.
#[derive(Debug, Clone)]
pub struct PathComplex {
    pub atom_bond: AtomBondGraph,
    pub bond_angle: BondAngleGraph,
    pub dihedral: Option<DihedralGraph>,
}

/// Runs the three-stage construction for one molecule.
///
/// The stages are strictly sequential: the bond-angle graph consumes the
/// finished atom-bond graph, the dihedral graph consumes both. Stage-1
/// failures abort the pipeline; an absent dihedral graph does not.
///
/// # Errors
///
/// Returns a [`GraphError`] when the atom-bond stage rejects the molecule
/// (size ceiling, embedding failure, descriptor failure, degenerate
/// conformer).
#[instrument(skip_all, name = "path_complex", fields(atoms = molecule.atom_count()))]
pub fn run<G, C>(
    molecule: &Molecule,
    geometry: &G,
    chemistry: &C,
    config: &GraphConfig,
) -> Result<PathComplex, GraphError>
where
    G: GeometryOracle,
    C: ChemistryOracle,
{
    info!("Building atom-bond graph.");
    let atom_bond = AtomBondGraph::build(molecule, geometry, chemistry, config)?;
    info!(
        nodes = atom_bond.graph().node_count(),
        half_edges = atom_bond.graph().edge_count(),
        bonded = atom_bond.bonded_half_edge_count(),
        "Atom-bond graph ready."
    );

    info!("Deriving bond-angle graph.");
    let bond_angle = BondAngleGraph::build(&atom_bond, config.triangle_mode);
    info!(
        nodes = bond_angle.graph().node_count(),
        edges = bond_angle.graph().edge_count(),
        "Bond-angle graph ready."
    );

    info!("Deriving dihedral graph.");
    let dihedral = DihedralGraph::build(&atom_bond, &bond_angle, config.dihedral_mode);
    match &dihedral {
        Some(graph) => info!(
            nodes = graph.graph().node_count(),
            edges = graph.graph().edge_count(),
            "Dihedral graph ready."
        ),
        None => info!("No qualifying torsion; dihedral graph omitted."),
    }

    Ok(PathComplex {
        atom_bond,
        bond_angle,
        dihedral,
    })
}
