use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Stereochemical descriptor of an atom.
///
/// Covers both tetrahedral CIP assignments (R/S) and double-bond
/// assignments (E/Z). Atoms without an assignment use [`Chirality::None`],
/// which encodes to an all-zero tag vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chirality {
    /// No stereochemical assignment.
    #[default]
    None,
    /// Rectus tetrahedral center.
    R,
    /// Sinister tetrahedral center.
    S,
    /// Entgegen double-bond configuration.
    E,
    /// Zusammen double-bond configuration.
    Z,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid chirality string")]
pub struct ParseChiralityError;

impl FromStr for Chirality {
    type Err = ParseChiralityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "r" => Ok(Self::R),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "z" => Ok(Self::Z),
            _ => Err(ParseChiralityError),
        }
    }
}

/// Orbital hybridization of an atom.
///
/// The five `SP`-family states participate in the one-hot structural
/// encoding; [`Hybridization::S`] and [`Hybridization::Other`] encode to an
/// all-zero block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hybridization {
    /// Unhybridized s orbital only.
    S,
    /// sp linear.
    Sp,
    /// sp2 trigonal planar.
    Sp2,
    /// sp3 tetrahedral.
    Sp3,
    /// sp3d trigonal bipyramidal.
    Sp3d,
    /// sp3d2 octahedral.
    Sp3d2,
    /// Unknown or unclassified hybridization.
    #[default]
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hybridization string")]
pub struct ParseHybridizationError;

impl FromStr for Hybridization {
    type Err = ParseHybridizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" => Ok(Self::S),
            "sp" => Ok(Self::Sp),
            "sp2" => Ok(Self::Sp2),
            "sp3" => Ok(Self::Sp3),
            "sp3d" => Ok(Self::Sp3d),
            "sp3d2" => Ok(Self::Sp3d2),
            "other" | "unknown" => Ok(Self::Other),
            _ => Err(ParseHybridizationError),
        }
    }
}

/// An atom of a molecule under construction.
///
/// Carries the element symbol plus the categorical descriptors produced by
/// the external chemistry collaborator. An atom's identity is its index in
/// the owning [`super::molecule::Molecule`]; atoms are immutable once the
/// molecule is handed to a graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element symbol (e.g. "C", "H", "Cl").
    pub element: String,
    /// Whether the atom belongs to an aromatic system.
    pub is_aromatic: bool,
    /// Formal charge in elementary charge units. Encodable range is -8..=8.
    pub formal_charge: i8,
    /// Stereochemical assignment, if any.
    pub chirality: Chirality,
    /// Orbital hybridization.
    pub hybridization: Hybridization,
}

impl Atom {
    /// Creates an atom of the given element with default descriptors
    /// (non-aromatic, uncharged, unassigned stereo, unknown hybridization).
    pub fn new(element: &str) -> Self {
        Self {
            element: element.to_string(),
            is_aromatic: false,
            formal_charge: 0,
            chirality: Chirality::None,
            hybridization: Hybridization::Other,
        }
    }

    /// Sets the hybridization, builder-style.
    pub fn with_hybridization(mut self, hybridization: Hybridization) -> Self {
        self.hybridization = hybridization;
        self
    }

    /// Sets the aromaticity flag, builder-style.
    pub fn with_aromaticity(mut self, is_aromatic: bool) -> Self {
        self.is_aromatic = is_aromatic;
        self
    }

    /// Sets the formal charge, builder-style.
    pub fn with_formal_charge(mut self, charge: i8) -> Self {
        self.formal_charge = charge;
        self
    }

    /// Sets the stereochemical assignment, builder-style.
    pub fn with_chirality(mut self, chirality: Chirality) -> Self {
        self.chirality = chirality;
        self
    }

    /// Returns true for hydrogen atoms.
    pub fn is_hydrogen(&self) -> bool {
        self.element == "H"
    }
}
