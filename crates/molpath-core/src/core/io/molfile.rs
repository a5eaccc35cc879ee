use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::molecule::{Molecule, MoleculeError};
use crate::core::oracles::geometry::{Conformer, StoredConformer};
use nalgebra::Point3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MolFileError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("atom {atom}: invalid chirality '{value}'")]
    InvalidChirality { atom: usize, value: String },

    #[error("atom {atom}: invalid hybridization '{value}'")]
    InvalidHybridization { atom: usize, value: String },

    #[error("bond {bond}: invalid bond order '{value}'")]
    InvalidBondOrder { bond: usize, value: String },

    #[error("bond {bond}: invalid bond direction '{value}'")]
    InvalidBondDirection { bond: usize, value: String },

    #[error("invalid molecule: {source}")]
    Molecule {
        #[from]
        source: MoleculeError,
    },
}

#[derive(Debug, Deserialize)]
struct MolFileDoc {
    name: Option<String>,
    #[serde(default)]
    atoms: Vec<AtomRecord>,
    #[serde(default)]
    bonds: Vec<BondRecord>,
}

#[derive(Debug, Deserialize)]
struct AtomRecord {
    element: String,
    position: [f64; 3],
    #[serde(default)]
    charge: f64,
    #[serde(default)]
    aromatic: bool,
    #[serde(default)]
    formal_charge: i8,
    chirality: Option<String>,
    hybridization: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BondRecord {
    atoms: [usize; 2],
    order: String,
    direction: Option<String>,
    in_ring: Option<bool>,
}

/// A molecule description with its embedded geometry, as read from a TOML
/// document.
#[derive(Debug, Clone)]
pub struct MolFile {
    pub name: Option<String>,
    pub molecule: Molecule,
    pub geometry: StoredConformer,
}

/// Reads a molecule description from a TOML file.
pub fn load_molecule(path: &Path) -> Result<MolFile, MolFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| MolFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_molecule(&content)
}

/// Parses a molecule description from TOML text.
///
/// Ring membership is perceived from connectivity whenever at least one bond
/// record omits `in_ring`; records that state the flag explicitly win over
/// the perceived value.
pub fn parse_molecule(content: &str) -> Result<MolFile, MolFileError> {
    let doc: MolFileDoc = toml::from_str(content)?;

    let mut molecule = Molecule::new();
    let mut positions = Vec::with_capacity(doc.atoms.len());
    let mut charges = Vec::with_capacity(doc.atoms.len());

    for (index, record) in doc.atoms.iter().enumerate() {
        let mut atom = Atom::new(&record.element)
            .with_aromaticity(record.aromatic)
            .with_formal_charge(record.formal_charge);
        if let Some(value) = &record.chirality {
            atom.chirality = value
                .parse()
                .map_err(|_| MolFileError::InvalidChirality {
                    atom: index,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = &record.hybridization {
            atom.hybridization =
                value
                    .parse()
                    .map_err(|_| MolFileError::InvalidHybridization {
                        atom: index,
                        value: value.clone(),
                    })?;
        }
        molecule.add_atom(atom);
        positions.push(Point3::new(
            record.position[0],
            record.position[1],
            record.position[2],
        ));
        charges.push(record.charge);
    }

    for (index, record) in doc.bonds.iter().enumerate() {
        let order = record
            .order
            .parse()
            .map_err(|_| MolFileError::InvalidBondOrder {
                bond: index,
                value: record.order.clone(),
            })?;
        let mut bond = Bond::new(record.atoms[0], record.atoms[1], order);
        if let Some(value) = &record.direction {
            bond.direction = value
                .parse()
                .map_err(|_| MolFileError::InvalidBondDirection {
                    bond: index,
                    value: value.clone(),
                })?;
        }
        bond.in_ring = record.in_ring.unwrap_or(false);
        molecule.push_bond(bond)?;
    }

    if doc.bonds.iter().any(|record| record.in_ring.is_none()) {
        molecule.perceive_rings();
        for (index, record) in doc.bonds.iter().enumerate() {
            if let Some(flag) = record.in_ring {
                molecule.set_ring_flag(index, flag);
            }
        }
    }

    Ok(MolFile {
        name: doc.name,
        molecule,
        geometry: StoredConformer::new(Conformer::new(positions, charges)),
    })
}
