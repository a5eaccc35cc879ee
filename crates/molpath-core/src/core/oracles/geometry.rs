use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use thiserror::Error;

/// A 3D embedding of a molecule: one position and one partial charge per
/// atom, keyed by atom index.
#[derive(Debug, Clone, PartialEq)]
pub struct Conformer {
    pub positions: Vec<Point3<f64>>,
    pub partial_charges: Vec<f64>,
}

impl Conformer {
    pub fn new(positions: Vec<Point3<f64>>, partial_charges: Vec<f64>) -> Self {
        Self {
            positions,
            partial_charges,
        }
    }

    /// Number of embedded atoms.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Why an embedding attempt produced no usable conformer.
///
/// Embedding failure is ordinary data, not an exception: builders branch on
/// it early and reject the whole molecule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("no conformer could be generated")]
    NoConformer,

    #[error("force-field setup failed: {0}")]
    ForceField(String),

    #[error("molecule not supported by this oracle: {0}")]
    Unsupported(String),
}

/// External geometry collaborator: embeds a molecule in 3D and assigns
/// partial charges.
pub trait GeometryOracle {
    fn embed(&self, molecule: &Molecule) -> Result<Conformer, EmbedError>;
}

/// Geometry oracle over coordinates that are already known: molecules read
/// from files with embedded geometry, or fixtures in tests.
#[derive(Debug, Clone)]
pub struct StoredConformer {
    conformer: Conformer,
}

impl StoredConformer {
    pub fn new(conformer: Conformer) -> Self {
        Self { conformer }
    }
}

impl GeometryOracle for StoredConformer {
    fn embed(&self, molecule: &Molecule) -> Result<Conformer, EmbedError> {
        if self.conformer.len() != molecule.atom_count()
            || self.conformer.partial_charges.len() != molecule.atom_count()
        {
            return Err(EmbedError::Unsupported(format!(
                "stored conformer holds {} positions and {} charges for {} atoms",
                self.conformer.len(),
                self.conformer.partial_charges.len(),
                molecule.atom_count()
            )));
        }
        Ok(self.conformer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn two_atom_molecule() -> Molecule {
        let mut molecule = Molecule::new();
        molecule.add_atom(Atom::new("C"));
        molecule.add_atom(Atom::new("O"));
        molecule
    }

    #[test]
    fn stored_conformer_returns_its_coordinates() {
        let molecule = two_atom_molecule();
        let conformer = Conformer::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.2, 0.0, 0.0)],
            vec![0.1, -0.1],
        );
        let oracle = StoredConformer::new(conformer.clone());

        let embedded = oracle.embed(&molecule).unwrap();
        assert_eq!(embedded, conformer);
    }

    #[test]
    fn stored_conformer_rejects_size_mismatch() {
        let molecule = two_atom_molecule();
        let oracle = StoredConformer::new(Conformer::new(
            vec![Point3::new(0.0, 0.0, 0.0)],
            vec![0.0],
        ));

        assert!(matches!(
            oracle.embed(&molecule),
            Err(EmbedError::Unsupported(_))
        ));
    }
}
