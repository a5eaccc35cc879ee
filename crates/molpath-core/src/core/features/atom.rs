use super::EncodingError;
use crate::core::models::atom::{Atom, Chirality, Hybridization};

/// Width of the structural categorical encoding: aromaticity (2) + formal
/// charge (16) + chirality tags (4) + degree (11) + hydrogen count (9) +
/// hybridization (5).
pub const STRUCTURAL_WIDTH: usize = 47;

const AROMATICITY_OFFSET: usize = 0;
const CHARGE_OFFSET: usize = 2;
const CHIRALITY_OFFSET: usize = 18;
const DEGREE_OFFSET: usize = 22;
const HYDROGEN_OFFSET: usize = 33;
const HYBRIDIZATION_OFFSET: usize = 42;

/// Four-slot chirality tag block: R/S/E/Z, all zero for unassigned atoms.
pub fn encode_chirality(chirality: Chirality) -> [f64; 4] {
    let mut tags = [0.0; 4];
    if let Some(slot) = chirality_slot(chirality) {
        tags[slot] = 1.0;
    }
    tags
}

fn chirality_slot(chirality: Chirality) -> Option<usize> {
    match chirality {
        Chirality::None => None,
        Chirality::R => Some(0),
        Chirality::S => Some(1),
        Chirality::E => Some(2),
        Chirality::Z => Some(3),
    }
}

fn hybridization_slot(hybridization: Hybridization) -> Option<usize> {
    match hybridization {
        Hybridization::Sp => Some(0),
        Hybridization::Sp2 => Some(1),
        Hybridization::Sp3 => Some(2),
        Hybridization::Sp3d => Some(3),
        Hybridization::Sp3d2 => Some(4),
        Hybridization::S | Hybridization::Other => None,
    }
}

/// Structural categorical encoding of an atom within its molecule.
///
/// `degree` and `hydrogen_count` come from the owning molecule's
/// connectivity; formal charge maps to slot `charge + 8`.
///
/// # Errors
///
/// Returns an error when a descriptor falls outside its one-hot range
/// (charge beyond ±8, degree above 10, more than 8 hydrogens).
pub fn encode_atom_structure(
    atom: &Atom,
    degree: usize,
    hydrogen_count: usize,
) -> Result<Vec<f64>, EncodingError> {
    if !(-8..=8).contains(&atom.formal_charge) {
        return Err(EncodingError::ChargeOutOfRange {
            charge: atom.formal_charge,
        });
    }
    let charge_slot = (atom.formal_charge + 8) as usize;
    if degree > 10 {
        return Err(EncodingError::DegreeOutOfRange { degree });
    }
    if hydrogen_count > 8 {
        return Err(EncodingError::HydrogenCountOutOfRange {
            count: hydrogen_count,
        });
    }

    let mut features = vec![0.0; STRUCTURAL_WIDTH];
    features[AROMATICITY_OFFSET + atom.is_aromatic as usize] = 1.0;
    features[CHARGE_OFFSET + charge_slot] = 1.0;
    features[CHIRALITY_OFFSET..CHIRALITY_OFFSET + 4]
        .copy_from_slice(&encode_chirality(atom.chirality));
    features[DEGREE_OFFSET + degree] = 1.0;
    features[HYDROGEN_OFFSET + hydrogen_count] = 1.0;
    if let Some(slot) = hybridization_slot(atom.hybridization) {
        features[HYBRIDIZATION_OFFSET + slot] = 1.0;
    }
    Ok(features)
}
