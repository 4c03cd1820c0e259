use super::types::{AtomParity, Inversion, Radical};
use serde::{Deserialize, Serialize};

/// One line of a V2000 atom block.
///
/// Identity is positional: the atom's 1-based index within its molecule is
/// its position in [`Molecule::atoms`](super::molecule::Molecule::atoms)
/// plus one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub position: [f64; 3],
    /// Element or pseudo-atom symbol as written (`C`, `Cl`, `R#`, `*`, ...).
    pub symbol: String,
    pub mass_difference: i8,
    pub charge: i8,
    pub radical: Radical,
    /// Atom-block charge code outside `0..=7`, kept as written; `charge` and
    /// `radical` stay at their defaults.
    pub raw_charge_code: Option<u8>,
    pub parity: AtomParity,
    /// Raw `hhh` field: 0 means unspecified, otherwise hydrogen count + 1.
    pub hydrogen_count: u8,
    pub stereo_care: bool,
    /// Raw `vvv` field: 0 means default valence, 15 means zero valence.
    pub valence: u8,
    pub h0_designator: bool,
    /// Atom-atom mapping number; 0 when unmapped.
    pub mapping: u32,
    pub inversion: Inversion,
    pub exact_change: bool,
    /// Absolute isotope mass from `M  ISO`.
    pub isotope: Option<u16>,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            position,
            symbol: symbol.into(),
            mass_difference: 0,
            charge: 0,
            radical: Radical::None,
            raw_charge_code: None,
            parity: AtomParity::None,
            hydrogen_count: 0,
            stereo_care: false,
            valence: 0,
            h0_designator: false,
            mapping: 0,
            inversion: Inversion::Unspecified,
            exact_change: false,
            isotope: None,
        }
    }

    pub fn with_charge(mut self, charge: i8) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_mapping(mut self, mapping: u32) -> Self {
        self.mapping = mapping;
        self
    }

    #[inline]
    pub fn is_mapped(&self) -> bool {
        self.mapping != 0
    }
}
