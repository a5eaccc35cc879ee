use super::atom::Atom;
use super::bond::{Bond, BondOrder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("bond references atom {index} but the molecule has {atom_count} atoms")]
    BondOutOfRange { index: usize, atom_count: usize },

    #[error("bond connects atom {index} to itself")]
    SelfBond { index: usize },

    #[error("duplicate bond between atoms {atom1} and {atom2}")]
    DuplicateBond { atom1: usize, atom2: usize },
}

/// A molecule description: atoms with categorical descriptors plus the
/// covalent bond list.
///
/// Atom identity is the insertion index. The molecule is a plain container;
/// 3D coordinates and partial charges live in the geometry collaborator's
/// [`crate::core::oracles::geometry::Conformer`], keyed by the same indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Adds a bond between two existing atoms.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range, the bond is a
    /// self-loop, or the pair is already bonded.
    pub fn add_bond(
        &mut self,
        atom1: usize,
        atom2: usize,
        order: BondOrder,
    ) -> Result<usize, MoleculeError> {
        self.push_bond(Bond::new(atom1, atom2, order))
    }

    /// Adds a fully specified bond (direction and ring flag included).
    ///
    /// # Errors
    ///
    /// Same validation as [`Molecule::add_bond`].
    pub fn push_bond(&mut self, bond: Bond) -> Result<usize, MoleculeError> {
        let atom_count = self.atoms.len();
        for index in [bond.atom1, bond.atom2] {
            if index >= atom_count {
                return Err(MoleculeError::BondOutOfRange { index, atom_count });
            }
        }
        if bond.atom1 == bond.atom2 {
            return Err(MoleculeError::SelfBond { index: bond.atom1 });
        }
        if self
            .bonds
            .iter()
            .any(|b| b.atom1 == bond.atom1 && b.atom2 == bond.atom2)
        {
            return Err(MoleculeError::DuplicateBond {
                atom1: bond.atom1,
                atom2: bond.atom2,
            });
        }
        self.bonds.push(bond);
        Ok(self.bonds.len() - 1)
    }

    /// Number of atoms, explicit hydrogens included.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds.
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Immutable access to the atom list.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Immutable access to the bond list.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Retrieves an atom by index.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Builds the neighbor list, indexed by atom.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.atoms.len()];
        for bond in &self.bonds {
            adjacency[bond.atom1].push(bond.atom2);
            adjacency[bond.atom2].push(bond.atom1);
        }
        adjacency
    }

    /// Number of bonded neighbors of an atom.
    pub fn degree(&self, atom: usize) -> usize {
        self.bonds.iter().filter(|b| b.contains(atom)).count()
    }

    /// Number of hydrogen neighbors of an atom.
    pub fn hydrogen_neighbor_count(&self, atom: usize) -> usize {
        self.bonds
            .iter()
            .filter_map(|b| b.other(atom))
            .filter(|&n| self.atoms[n].is_hydrogen())
            .count()
    }

    /// Returns true if the two atoms share a bond.
    pub fn are_bonded(&self, atom1: usize, atom2: usize) -> bool {
        let (a, b) = if atom1 <= atom2 {
            (atom1, atom2)
        } else {
            (atom2, atom1)
        };
        self.bonds.iter().any(|bond| bond.atom1 == a && bond.atom2 == b)
    }

    /// Overwrites one bond's ring-membership flag. Returns false when the
    /// bond index is out of range.
    pub fn set_ring_flag(&mut self, bond: usize, in_ring: bool) -> bool {
        match self.bonds.get_mut(bond) {
            Some(bond) => {
                bond.in_ring = in_ring;
                true
            }
            None => false,
        }
    }

    /// Recomputes every bond's `in_ring` flag from connectivity.
    ///
    /// A bond lies on a ring exactly when it is not a bridge of the bond
    /// graph, so a single bridge-finding pass (disc/low traversal) settles
    /// all flags. Used when the molecule source carries no ring annotations.
    pub fn perceive_rings(&mut self) {
        let atom_count = self.atoms.len();
        let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); atom_count];
        for (bond_index, bond) in self.bonds.iter().enumerate() {
            adjacency[bond.atom1].push((bond.atom2, bond_index));
            adjacency[bond.atom2].push((bond.atom1, bond_index));
        }

        const UNVISITED: usize = usize::MAX;
        let mut disc = vec![UNVISITED; atom_count];
        let mut low = vec![0usize; atom_count];
        let mut is_bridge = vec![false; self.bonds.len()];
        let mut timer = 0usize;

        for root in 0..atom_count {
            if disc[root] != UNVISITED {
                continue;
            }
            disc[root] = timer;
            low[root] = timer;
            timer += 1;

            // Frames: (vertex, bond taken to reach it, neighbor cursor).
            let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
            while !stack.is_empty() {
                let top = stack.len() - 1;
                let (u, via, cursor) = stack[top];
                if cursor < adjacency[u].len() {
                    stack[top].2 += 1;
                    let (v, bond_index) = adjacency[u][cursor];
                    if Some(bond_index) == via {
                        continue;
                    }
                    if disc[v] == UNVISITED {
                        disc[v] = timer;
                        low[v] = timer;
                        timer += 1;
                        stack.push((v, Some(bond_index), 0));
                    } else if disc[v] < low[u] {
                        low[u] = disc[v];
                    }
                } else {
                    stack.pop();
                    if let Some(&(parent, _, _)) = stack.last() {
                        if low[u] < low[parent] {
                            low[parent] = low[u];
                        }
                        if let Some(bond_index) = via {
                            if low[u] > disc[parent] {
                                is_bridge[bond_index] = true;
                            }
                        }
                    }
                }
            }
        }

        for (bond, bridge) in self.bonds.iter_mut().zip(is_bridge) {
            bond.in_ring = !bridge;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(length: usize) -> Molecule {
        let mut molecule = Molecule::new();
        for _ in 0..length {
            molecule.add_atom(Atom::new("C"));
        }
        for i in 1..length {
            molecule.add_bond(i - 1, i, BondOrder::Single).unwrap();
        }
        molecule
    }

    fn ring(size: usize) -> Molecule {
        let mut molecule = chain(size);
        molecule.add_bond(size - 1, 0, BondOrder::Single).unwrap();
        molecule
    }

    #[test]
    fn add_bond_rejects_out_of_range_indices() {
        let mut molecule = chain(2);
        assert_eq!(
            molecule.add_bond(0, 5, BondOrder::Single),
            Err(MoleculeError::BondOutOfRange {
                index: 5,
                atom_count: 2
            })
        );
    }

    #[test]
    fn add_bond_rejects_self_loops() {
        let mut molecule = chain(2);
        assert_eq!(
            molecule.add_bond(1, 1, BondOrder::Single),
            Err(MoleculeError::SelfBond { index: 1 })
        );
    }

    #[test]
    fn add_bond_rejects_duplicates_in_either_order() {
        let mut molecule = chain(2);
        assert_eq!(
            molecule.add_bond(1, 0, BondOrder::Double),
            Err(MoleculeError::DuplicateBond { atom1: 0, atom2: 1 })
        );
    }

    #[test]
    fn degree_and_hydrogen_count_follow_connectivity() {
        let mut molecule = Molecule::new();
        let c = molecule.add_atom(Atom::new("C"));
        let h1 = molecule.add_atom(Atom::new("H"));
        let h2 = molecule.add_atom(Atom::new("H"));
        let o = molecule.add_atom(Atom::new("O"));
        molecule.add_bond(c, h1, BondOrder::Single).unwrap();
        molecule.add_bond(c, h2, BondOrder::Single).unwrap();
        molecule.add_bond(c, o, BondOrder::Double).unwrap();

        assert_eq!(molecule.degree(c), 3);
        assert_eq!(molecule.hydrogen_neighbor_count(c), 2);
        assert_eq!(molecule.degree(o), 1);
        assert_eq!(molecule.hydrogen_neighbor_count(o), 0);
    }

    #[test]
    fn are_bonded_is_order_insensitive() {
        let molecule = chain(3);
        assert!(molecule.are_bonded(0, 1));
        assert!(molecule.are_bonded(1, 0));
        assert!(!molecule.are_bonded(0, 2));
    }

    #[test]
    fn perceive_rings_marks_cycle_bonds_only() {
        // Six-membered ring with one pendant atom.
        let mut molecule = ring(6);
        let pendant = molecule.add_atom(Atom::new("C"));
        molecule.add_bond(0, pendant, BondOrder::Single).unwrap();

        molecule.perceive_rings();

        for bond in &molecule.bonds()[..6] {
            assert!(bond.in_ring, "ring bond {:?} should be flagged", bond);
        }
        assert!(!molecule.bonds()[6].in_ring);
    }

    #[test]
    fn perceive_rings_leaves_acyclic_molecules_unflagged() {
        let mut molecule = chain(5);
        molecule.perceive_rings();
        assert!(molecule.bonds().iter().all(|b| !b.in_ring));
    }

    #[test]
    fn perceive_rings_handles_disconnected_components() {
        let mut molecule = ring(3);
        let a = molecule.add_atom(Atom::new("N"));
        let b = molecule.add_atom(Atom::new("N"));
        molecule.add_bond(a, b, BondOrder::Single).unwrap();

        molecule.perceive_rings();

        assert!(molecule.bonds()[..3].iter().all(|b| b.in_ring));
        assert!(!molecule.bonds()[3].in_ring);
    }

    #[test]
    fn perceive_rings_marks_fused_ring_systems() {
        // Two triangles sharing an edge: atoms 0-1-2 and 1-2-3.
        let mut molecule = Molecule::new();
        for _ in 0..4 {
            molecule.add_atom(Atom::new("C"));
        }
        molecule.add_bond(0, 1, BondOrder::Single).unwrap();
        molecule.add_bond(1, 2, BondOrder::Single).unwrap();
        molecule.add_bond(2, 0, BondOrder::Single).unwrap();
        molecule.add_bond(1, 3, BondOrder::Single).unwrap();
        molecule.add_bond(2, 3, BondOrder::Single).unwrap();

        molecule.perceive_rings();

        assert!(molecule.bonds().iter().all(|b| b.in_ring));
    }
}
