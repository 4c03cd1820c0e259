use super::atom::Atom;
use super::types::{BondStereo, BondTopology, BondType};
use serde::{Deserialize, Serialize};

/// One line of a V2000 bond block.
///
/// `begin` and `end` are 1-based atom indices and keep the order in which
/// they were written, since wedge stereo depends on direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub bond_type: BondType,
    pub stereo: BondStereo,
    pub topology: BondTopology,
    /// Reacting-center status; -1 marks "not a center", 0 unmarked.
    pub reacting_center: i8,
}

impl Bond {
    pub fn new(begin: usize, end: usize, bond_type: BondType) -> Self {
        Self {
            begin,
            end,
            bond_type,
            stereo: BondStereo::None,
            topology: BondTopology::Either,
            reacting_center: 0,
        }
    }

    pub fn with_stereo(mut self, stereo: BondStereo) -> Self {
        self.stereo = stereo;
        self
    }

    /// Whether `index` is one of the bond's endpoints.
    #[inline]
    pub fn involves(&self, index: usize) -> bool {
        self.begin == index || self.end == index
    }
}

/// A molecule template decoded from one `$MOL` block.
///
/// Atoms and bonds keep file order; `atoms.len()` and `bonds.len()` always
/// equal the counts declared on the block's counts line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub name: String,
    pub program: String,
    pub comment: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Looks up an atom by its 1-based index.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        index.checked_sub(1).and_then(|i| self.atoms.get(i))
    }

    /// Bonds touching the atom with the given 1-based index.
    pub fn bonds_of(&self, index: usize) -> impl Iterator<Item = &Bond> {
        self.bonds.iter().filter(move |b| b.involves(index))
    }

    /// Atom-atom mapping numbers in use, in atom order.
    pub fn mapping_numbers(&self) -> Vec<u32> {
        self.atoms
            .iter()
            .filter(|a| a.is_mapped())
            .map(|a| a.mapping)
            .collect()
    }
}
