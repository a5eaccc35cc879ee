use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chemical multiplicity of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Slot of this order in the 4-class one-hot encoding.
    pub fn encoding_index(self) -> usize {
        match self {
            Self::Single => 0,
            Self::Double => 1,
            Self::Triple => 2,
            Self::Aromatic => 3,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

/// Drawn direction of a bond, as assigned by the producing chemistry
/// collaborator. Seven classes, one-hot encoded in the bonded edge features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BondDirection {
    #[default]
    None,
    BeginWedge,
    BeginDash,
    EndDownRight,
    EndUpRight,
    EitherDouble,
    Unknown,
}

impl BondDirection {
    /// Slot of this direction in the 7-class one-hot encoding.
    pub fn encoding_index(self) -> usize {
        match self {
            Self::None => 0,
            Self::BeginWedge => 1,
            Self::BeginDash => 2,
            Self::EndDownRight => 3,
            Self::EndUpRight => 4,
            Self::EitherDouble => 5,
            Self::Unknown => 6,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond direction string")]
pub struct ParseBondDirectionError;

impl FromStr for BondDirection {
    type Err = ParseBondDirectionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "begin_wedge" | "beginwedge" => Ok(Self::BeginWedge),
            "begin_dash" | "begindash" => Ok(Self::BeginDash),
            "end_down_right" | "enddownright" => Ok(Self::EndDownRight),
            "end_up_right" | "endupright" => Ok(Self::EndUpRight),
            "either_double" | "eitherdouble" => Ok(Self::EitherDouble),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBondDirectionError),
        }
    }
}

/// A covalent bond between two atoms of a molecule.
///
/// Atom indices are canonicalized to ascending order so equality and hashing
/// do not depend on construction order. The bonded half-edge pair emitted
/// for this bond runs `atom1 -> atom2` then `atom2 -> atom1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Index of the first atom (lesser index after canonicalization).
    pub atom1: usize,
    /// Index of the second atom (greater index).
    pub atom2: usize,
    /// Chemical multiplicity.
    pub order: BondOrder,
    /// Drawn direction class.
    pub direction: BondDirection,
    /// Whether the bond lies on a ring.
    pub in_ring: bool,
}

impl Bond {
    /// Creates a bond between `atom1` and `atom2`, canonicalizing the
    /// endpoint ordering. Direction defaults to `None` and ring membership
    /// to `false`; both can be overwritten afterward or perceived by
    /// [`super::molecule::Molecule::perceive_rings`].
    pub fn new(atom1: usize, atom2: usize, order: BondOrder) -> Self {
        let (atom1, atom2) = if atom1 <= atom2 {
            (atom1, atom2)
        } else {
            (atom2, atom1)
        };
        Self {
            atom1,
            atom2,
            order,
            direction: BondDirection::None,
            in_ring: false,
        }
    }

    /// Sets the drawn direction, builder-style.
    pub fn with_direction(mut self, direction: BondDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the ring-membership flag, builder-style.
    pub fn with_ring_flag(mut self, in_ring: bool) -> Self {
        self.in_ring = in_ring;
        self
    }

    /// Returns true if the bond involves the given atom index.
    pub fn contains(&self, atom: usize) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }

    /// Returns the endpoint opposite to `atom`, or `None` if `atom` is not
    /// an endpoint.
    pub fn other(&self, atom: usize) -> Option<usize> {
        if atom == self.atom1 {
            Some(self.atom2)
        } else if atom == self.atom2 {
            Some(self.atom1)
        } else {
            None
        }
    }
}
