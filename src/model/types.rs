use serde::{Deserialize, Serialize};
use std::fmt;

/// Bond type as declared in the third field of a V2000 bond line.
///
/// Values 5 through 8 are query types that only occur in reaction and
/// query templates. Codes with no defined meaning are kept in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BondType {
    Single,
    Double,
    Triple,
    Aromatic,
    SingleOrDouble,
    SingleOrAromatic,
    DoubleOrAromatic,
    Any,
    Dative,
    Hydrogen,
    Other(u8),
}

impl BondType {
    /// Nominal bond order, or `None` for query and non-covalent types.
    pub fn order(&self) -> Option<f64> {
        match self {
            BondType::Single | BondType::Dative => Some(1.0),
            BondType::Double => Some(2.0),
            BondType::Triple => Some(3.0),
            BondType::Aromatic => Some(1.5),
            _ => None,
        }
    }

    #[inline]
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            BondType::SingleOrDouble
                | BondType::SingleOrAromatic
                | BondType::DoubleOrAromatic
                | BondType::Any
        )
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondType::Single => write!(f, "Single"),
            BondType::Double => write!(f, "Double"),
            BondType::Triple => write!(f, "Triple"),
            BondType::Aromatic => write!(f, "Aromatic"),
            BondType::SingleOrDouble => write!(f, "SingleOrDouble"),
            BondType::SingleOrAromatic => write!(f, "SingleOrAromatic"),
            BondType::DoubleOrAromatic => write!(f, "DoubleOrAromatic"),
            BondType::Any => write!(f, "Any"),
            BondType::Dative => write!(f, "Dative"),
            BondType::Hydrogen => write!(f, "Hydrogen"),
            BondType::Other(code) => write!(f, "Other({code})"),
        }
    }
}

/// Bond stereo flag. `Up`, `Down` and `Either` are meant for single bonds,
/// `CisTransEither` for double bonds, but the code is kept whatever the
/// bond type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BondStereo {
    #[default]
    None,
    Up,
    CisTransEither,
    Either,
    Down,
    Other(u8),
}

/// Ring/chain topology constraint on a query bond.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BondTopology {
    #[default]
    Either,
    Ring,
    Chain,
    Other(u8),
}

/// Stereo parity carried on an atom line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AtomParity {
    #[default]
    None,
    Odd,
    Even,
    Either,
    Other(u8),
}

/// Radical state, from charge code 4 or an `M  RAD` property.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Radical {
    #[default]
    None,
    Singlet,
    Doublet,
    Triplet,
}

/// Reaction stereo flag on an atom: whether configuration is inverted or
/// retained between reactant and product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Inversion {
    #[default]
    Unspecified,
    Inverted,
    Retained,
    Other(u8),
}

/// Which side of the arrow a molecule template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Reactant,
    Product,
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Reactant => write!(f, "reactant"),
            Role::Product => write!(f, "product"),
            Role::Agent => write!(f, "agent"),
        }
    }
}
