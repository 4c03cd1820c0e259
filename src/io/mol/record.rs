//! Fixed-column decoding of V2000 counts, atom and bond lines.
//!
//! Atom line layout (0-based byte columns):
//!
//! ```text
//! xxxxx.xxxxyyyyy.yyyyzzzzz.zzzz aaaddcccssshhhbbbvvvHHHrrriiimmmnnneee
//! 0         10        20        31 34 36 39 42 45 48 51 54 57 60 63 66
//! ```
//!
//! Bond line layout: `111222tttsssxxxrrrccc`.

use crate::io::error::Error;
use crate::io::lines::Line;
use crate::io::util::{self, FieldError};
use crate::io::Format;
use crate::model::atom::Atom;
use crate::model::molecule::Bond;

/// Declared sizes of a molecule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub atoms: usize,
    pub bonds: usize,
}

/// Whether a line has the shape of a counts line: integer atom and bond
/// counts in the first six columns and a `V2000` or `V3000` token.
pub fn is_counts_line(line: &Line<'_>) -> bool {
    let counted = |start| matches!(util::number_field::<usize>(line.text, start, start + 3), Ok(Some(_)));
    counted(0)
        && counted(3)
        && util::counts_version(line.text)
            .is_some_and(|v| v.eq_ignore_ascii_case("V2000") || v.eq_ignore_ascii_case("V3000"))
}

pub fn decode_counts(line: &Line<'_>) -> Result<Counts, Error> {
    if let Some(version) = util::counts_version(line.text)
        && !version.eq_ignore_ascii_case("V2000")
    {
        return Err(Error::UnsupportedVersion {
            format: Format::Mol,
            line: line.number,
            version: version.to_string(),
        });
    }

    let field = |start, end, what: &str| {
        util::number_field::<usize>(line.text, start, end)
            .map_err(|e| Error::header(line.number, format!("invalid {what} count: {e}")))?
            .ok_or_else(|| Error::header(line.number, format!("missing {what} count")))
    };

    Ok(Counts {
        atoms: field(0, 3, "atom")?,
        bonds: field(3, 6, "bond")?,
    })
}

pub fn decode_atom(line: &Line<'_>) -> Result<Atom, Error> {
    let ln = line.number;
    let text = line.text;
    let bad = |what: &str, e: FieldError| Error::atom_line(ln, format!("invalid {what}: {e}"));

    let coord = |start, axis: &str| -> Result<f64, Error> {
        util::number_field::<f64>(text, start, start + 10)
            .map_err(|e| bad(axis, e))?
            .ok_or_else(|| Error::atom_line(ln, format!("missing {axis} coordinate")))
    };
    let x = coord(0, "x")?;
    let y = coord(10, "y")?;
    let z = coord(20, "z")?;

    let symbol = util::column(text, 30, 34)
        .map_err(|e| bad("element symbol", e))?
        .trim();
    if symbol.is_empty() {
        return Err(Error::atom_line(ln, "missing element symbol"));
    }

    let mut atom = Atom::new(symbol, [x, y, z]);

    atom.mass_difference = util::flag_field(text, 34, 36).map_err(|e| bad("mass difference", e))?;

    let charge_code: u8 = util::flag_field(text, 36, 39).map_err(|e| bad("charge code", e))?;
    match util::charge_from_ctfile(charge_code) {
        Some((charge, radical)) => {
            atom.charge = charge;
            atom.radical = radical;
        }
        None => atom.raw_charge_code = Some(charge_code),
    }

    let parity_code: u8 = util::flag_field(text, 39, 42).map_err(|e| bad("stereo parity", e))?;
    atom.parity = util::parity_from_ctfile(parity_code);

    atom.hydrogen_count = util::flag_field(text, 42, 45).map_err(|e| bad("hydrogen count", e))?;
    atom.stereo_care = util::flag_field::<u8>(text, 45, 48).map_err(|e| bad("stereo care", e))? != 0;
    atom.valence = util::flag_field(text, 48, 51).map_err(|e| bad("valence", e))?;
    atom.h0_designator = util::flag_field::<u8>(text, 51, 54).map_err(|e| bad("H0 designator", e))? != 0;
    atom.mapping = util::flag_field(text, 60, 63).map_err(|e| bad("atom-atom mapping", e))?;

    let inversion_code: u8 = util::flag_field(text, 63, 66).map_err(|e| bad("inversion flag", e))?;
    atom.inversion = util::inversion_from_ctfile(inversion_code);

    atom.exact_change = util::flag_field::<u8>(text, 66, 69).map_err(|e| bad("exact change", e))? != 0;

    Ok(atom)
}

pub fn decode_bond(line: &Line<'_>, atom_count: usize) -> Result<Bond, Error> {
    let ln = line.number;
    let text = line.text;
    let bad = |what: &str, e: FieldError| Error::bond_line(ln, format!("invalid {what}: {e}"));

    let index = |start, which: &str| -> Result<usize, Error> {
        let value = util::number_field::<i64>(text, start, start + 3)
            .map_err(|e| bad(which, e))?
            .ok_or_else(|| Error::bond_line(ln, format!("missing {which}")))?;
        if value <= 0 {
            return Err(Error::bond_line(ln, format!("{which} must be positive, got {value}")));
        }
        let value = value as usize;
        if value > atom_count {
            return Err(Error::DanglingBondReference {
                line: ln,
                index: value,
                atom_count,
            });
        }
        Ok(value)
    };
    let begin = index(0, "first atom index")?;
    let end = index(3, "second atom index")?;
    if begin == end {
        return Err(Error::bond_line(ln, format!("atom {begin} is bonded to itself")));
    }

    let type_code: u8 = util::flag_field(text, 6, 9).map_err(|e| bad("bond type", e))?;
    let mut bond = Bond::new(begin, end, util::bond_type_from_ctfile(type_code));

    let stereo_code: u8 = util::flag_field(text, 9, 12).map_err(|e| bad("bond stereo", e))?;
    bond.stereo = util::bond_stereo_from_ctfile(stereo_code);

    let topology_code: u8 = util::flag_field(text, 15, 18).map_err(|e| bad("bond topology", e))?;
    bond.topology = util::topology_from_ctfile(topology_code);

    bond.reacting_center = util::flag_field(text, 18, 21).map_err(|e| bad("reacting center", e))?;

    Ok(bond)
}

/// Whether a line has the shape of a bond line: three integer fields in
/// the first nine columns.
pub fn looks_like_bond(line: &Line<'_>) -> bool {
    (0..3).all(|i| {
        matches!(
            util::number_field::<i64>(line.text, i * 3, i * 3 + 3),
            Ok(Some(_))
        )
    })
}
