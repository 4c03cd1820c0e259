use crate::model::types::{AtomParity, BondStereo, BondTopology, BondType, Inversion, Radical};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("columns {start}-{end} split a multi-byte character")]
    CharBoundary { start: usize, end: usize },
    #[error("'{0}' is not a valid number")]
    NotNumeric(String),
}

/// Fixed-width field `[start, end)` of `line`, clipped to the line length.
///
/// A field that starts past the end of the line is empty, matching the
/// format's rule that absent trailing fields read as blank.
pub fn column(line: &str, start: usize, end: usize) -> Result<&str, FieldError> {
    if start >= line.len() {
        return Ok("");
    }
    let end = end.min(line.len());
    line.get(start..end)
        .ok_or(FieldError::CharBoundary { start, end })
}

/// Numeric fixed-width field; `Ok(None)` when blank.
pub fn number_field<T: FromStr>(line: &str, start: usize, end: usize) -> Result<Option<T>, FieldError> {
    let raw = column(line, start, end)?.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| FieldError::NotNumeric(raw.to_string()))
}

/// Numeric field that reads as zero/default when blank or absent.
pub fn flag_field<T: FromStr + Default>(line: &str, start: usize, end: usize) -> Result<T, FieldError> {
    number_field(line, start, end).map(Option::unwrap_or_default)
}

/// Version token (`V2000`, `V3000`, ...) closing a counts line, if any.
pub fn counts_version(line: &str) -> Option<&str> {
    let token = line.split_whitespace().last()?;
    let digits = token.strip_prefix(['V', 'v'])?;
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(token)
    } else {
        None
    }
}

/// Decodes an atom-block charge code into a formal charge and radical.
pub fn charge_from_ctfile(code: u8) -> Option<(i8, Radical)> {
    match code {
        0 => Some((0, Radical::None)),
        1 => Some((3, Radical::None)),
        2 => Some((2, Radical::None)),
        3 => Some((1, Radical::None)),
        4 => Some((0, Radical::Doublet)),
        5 => Some((-1, Radical::None)),
        6 => Some((-2, Radical::None)),
        7 => Some((-3, Radical::None)),
        _ => None,
    }
}

/// Atom-block charge code for a charge; charges outside ±3 write 0 and
/// rely on `M  CHG`.
pub fn charge_to_ctfile(charge: i8, radical: Radical) -> u8 {
    match charge {
        3 => 1,
        2 => 2,
        1 => 3,
        -1 => 5,
        -2 => 6,
        -3 => 7,
        0 if radical == Radical::Doublet => 4,
        _ => 0,
    }
}

pub fn radical_from_ctfile(code: u8) -> Option<Radical> {
    match code {
        0 => Some(Radical::None),
        1 => Some(Radical::Singlet),
        2 => Some(Radical::Doublet),
        3 => Some(Radical::Triplet),
        _ => None,
    }
}

pub fn radical_to_ctfile(radical: Radical) -> u8 {
    match radical {
        Radical::None => 0,
        Radical::Singlet => 1,
        Radical::Doublet => 2,
        Radical::Triplet => 3,
    }
}

pub fn parity_from_ctfile(code: u8) -> AtomParity {
    match code {
        0 => AtomParity::None,
        1 => AtomParity::Odd,
        2 => AtomParity::Even,
        3 => AtomParity::Either,
        other => AtomParity::Other(other),
    }
}

pub fn parity_to_ctfile(parity: AtomParity) -> u8 {
    match parity {
        AtomParity::None => 0,
        AtomParity::Odd => 1,
        AtomParity::Even => 2,
        AtomParity::Either => 3,
        AtomParity::Other(code) => code,
    }
}

pub fn inversion_from_ctfile(code: u8) -> Inversion {
    match code {
        0 => Inversion::Unspecified,
        1 => Inversion::Inverted,
        2 => Inversion::Retained,
        other => Inversion::Other(other),
    }
}

pub fn inversion_to_ctfile(inversion: Inversion) -> u8 {
    match inversion {
        Inversion::Unspecified => 0,
        Inversion::Inverted => 1,
        Inversion::Retained => 2,
        Inversion::Other(code) => code,
    }
}

/// Codes 9 and 10 are the dative and hydrogen bond extensions.
pub fn bond_type_from_ctfile(code: u8) -> BondType {
    match code {
        1 => BondType::Single,
        2 => BondType::Double,
        3 => BondType::Triple,
        4 => BondType::Aromatic,
        5 => BondType::SingleOrDouble,
        6 => BondType::SingleOrAromatic,
        7 => BondType::DoubleOrAromatic,
        8 => BondType::Any,
        9 => BondType::Dative,
        10 => BondType::Hydrogen,
        other => BondType::Other(other),
    }
}

pub fn bond_type_to_ctfile(bond_type: BondType) -> u8 {
    match bond_type {
        BondType::Single => 1,
        BondType::Double => 2,
        BondType::Triple => 3,
        BondType::Aromatic => 4,
        BondType::SingleOrDouble => 5,
        BondType::SingleOrAromatic => 6,
        BondType::DoubleOrAromatic => 7,
        BondType::Any => 8,
        BondType::Dative => 9,
        BondType::Hydrogen => 10,
        BondType::Other(code) => code,
    }
}

pub fn bond_stereo_from_ctfile(code: u8) -> BondStereo {
    match code {
        0 => BondStereo::None,
        1 => BondStereo::Up,
        3 => BondStereo::CisTransEither,
        4 => BondStereo::Either,
        6 => BondStereo::Down,
        other => BondStereo::Other(other),
    }
}

pub fn bond_stereo_to_ctfile(stereo: BondStereo) -> u8 {
    match stereo {
        BondStereo::None => 0,
        BondStereo::Up => 1,
        BondStereo::CisTransEither => 3,
        BondStereo::Either => 4,
        BondStereo::Down => 6,
        BondStereo::Other(code) => code,
    }
}

pub fn topology_from_ctfile(code: u8) -> BondTopology {
    match code {
        0 => BondTopology::Either,
        1 => BondTopology::Ring,
        2 => BondTopology::Chain,
        other => BondTopology::Other(other),
    }
}

pub fn topology_to_ctfile(topology: BondTopology) -> u8 {
    match topology {
        BondTopology::Either => 0,
        BondTopology::Ring => 1,
        BondTopology::Chain => 2,
        BondTopology::Other(code) => code,
    }
}
