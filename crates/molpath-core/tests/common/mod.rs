use molpath::core::models::atom::{Atom, Hybridization};
use molpath::core::models::bond::BondOrder;
use molpath::core::models::molecule::Molecule;
use molpath::core::oracles::geometry::{Conformer, EmbedError, GeometryOracle, StoredConformer};
use nalgebra::Point3;

/// Geometry oracle that always fails, for exercising the rejection path.
pub struct FailingGeometry;

impl GeometryOracle for FailingGeometry {
    fn embed(&self, _molecule: &Molecule) -> Result<Conformer, EmbedError> {
        Err(EmbedError::NoConformer)
    }
}

fn carbon() -> Atom {
    Atom::new("C").with_hybridization(Hybridization::Sp3)
}

/// Staggered ethane: two sp3 carbons, six hydrogens, all single bonds.
pub fn ethane() -> (Molecule, StoredConformer) {
    let mut molecule = Molecule::new();
    let c0 = molecule.add_atom(carbon());
    let c1 = molecule.add_atom(carbon());
    let hydrogens: Vec<usize> = (0..6).map(|_| molecule.add_atom(Atom::new("H"))).collect();

    molecule.add_bond(c0, c1, BondOrder::Single).unwrap();
    for &h in &hydrogens[..3] {
        molecule.add_bond(c0, h, BondOrder::Single).unwrap();
    }
    for &h in &hydrogens[3..] {
        molecule.add_bond(c1, h, BondOrder::Single).unwrap();
    }

    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.54, 0.0, 0.0),
        Point3::new(-0.3638, 1.0274, 0.0),
        Point3::new(-0.3638, -0.5137, 0.8898),
        Point3::new(-0.3638, -0.5137, -0.8898),
        Point3::new(1.9038, 0.5137, 0.8898),
        Point3::new(1.9038, -1.0274, 0.0),
        Point3::new(1.9038, 0.5137, -0.8898),
    ];
    let charges = vec![-0.06, -0.06, 0.02, 0.02, 0.02, 0.02, 0.02, 0.02];
    (molecule, StoredConformer::new(Conformer::new(positions, charges)))
}

/// Tetrahedral methane: one carbon, four hydrogens.
pub fn methane() -> (Molecule, StoredConformer) {
    let mut molecule = Molecule::new();
    let c = molecule.add_atom(carbon());
    for _ in 0..4 {
        let h = molecule.add_atom(Atom::new("H"));
        molecule.add_bond(c, h, BondOrder::Single).unwrap();
    }

    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.629, 0.629, 0.629),
        Point3::new(0.629, -0.629, -0.629),
        Point3::new(-0.629, 0.629, -0.629),
        Point3::new(-0.629, -0.629, 0.629),
    ];
    let charges = vec![-0.08, 0.02, 0.02, 0.02, 0.02];
    (molecule, StoredConformer::new(Conformer::new(positions, charges)))
}

/// Three heavy atoms closed into a triangle, no hydrogens.
pub fn three_ring() -> (Molecule, StoredConformer) {
    let mut molecule = Molecule::new();
    for _ in 0..3 {
        molecule.add_atom(carbon());
    }
    molecule.add_bond(0, 1, BondOrder::Single).unwrap();
    molecule.add_bond(1, 2, BondOrder::Single).unwrap();
    molecule.add_bond(2, 0, BondOrder::Single).unwrap();
    molecule.perceive_rings();

    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.51, 0.0, 0.0),
        Point3::new(0.755, 1.3077, 0.0),
    ];
    let charges = vec![0.0; 3];
    (molecule, StoredConformer::new(Conformer::new(positions, charges)))
}

/// Four-carbon backbone with every atom in the xy-plane.
pub fn coplanar_butane_backbone() -> (Molecule, StoredConformer) {
    let mut molecule = Molecule::new();
    for _ in 0..4 {
        molecule.add_atom(carbon());
    }
    for i in 1..4 {
        molecule.add_bond(i - 1, i, BondOrder::Single).unwrap();
    }

    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.54, 0.0, 0.0),
        Point3::new(2.31, 1.33, 0.0),
        Point3::new(3.85, 1.33, 0.0),
    ];
    let charges = vec![-0.06; 4];
    (molecule, StoredConformer::new(Conformer::new(positions, charges)))
}
