use crate::io::{error::Error, marker, util};
use crate::model::atom::Atom;
use crate::model::molecule::Molecule;
use crate::model::types::Radical;
use std::io::Write;

/// Writes a V2000 molecule block (header, counts, atoms, bonds, properties,
/// `M  END`) without a leading `$MOL` line.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "{}", molecule.name)?;
    writeln!(writer, "{}", molecule.program)?;
    writeln!(writer, "{}", molecule.comment)?;
    writeln!(
        writer,
        "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000",
        molecule.atom_count(),
        molecule.bond_count()
    )?;

    for atom in &molecule.atoms {
        writeln!(
            writer,
            "{:>10.4}{:>10.4}{:>10.4} {:<3}{:>2}{:>3}{:>3}{:>3}{:>3}{:>3}{:>3}  0  0{:>3}{:>3}{:>3}",
            atom.position[0],
            atom.position[1],
            atom.position[2],
            atom.symbol,
            atom.mass_difference,
            charge_code(atom),
            util::parity_to_ctfile(atom.parity),
            atom.hydrogen_count,
            u8::from(atom.stereo_care),
            atom.valence,
            u8::from(atom.h0_designator),
            atom.mapping,
            util::inversion_to_ctfile(atom.inversion),
            u8::from(atom.exact_change),
        )?;
    }

    for bond in &molecule.bonds {
        writeln!(
            writer,
            "{:>3}{:>3}{:>3}{:>3}  0{:>3}{:>3}",
            bond.begin,
            bond.end,
            util::bond_type_to_ctfile(bond.bond_type),
            util::bond_stereo_to_ctfile(bond.stereo),
            util::topology_to_ctfile(bond.topology),
            bond.reacting_center,
        )?;
    }

    let charges: Vec<(usize, i32)> = indexed(molecule, |a| (a.charge != 0).then_some(a.charge.into()));
    let radicals: Vec<(usize, i32)> = indexed(molecule, |a| {
        (a.radical != Radical::None).then_some(util::radical_to_ctfile(a.radical).into())
    });
    let isotopes: Vec<(usize, i32)> = indexed(molecule, |a| a.isotope.map(i32::from));

    write_property(&mut writer, "CHG", &charges)?;
    write_property(&mut writer, "RAD", &radicals)?;
    write_property(&mut writer, "ISO", &isotopes)?;

    writeln!(writer, "{}", marker::MOL_END)?;
    Ok(())
}

fn indexed(
    molecule: &Molecule,
    value: impl Fn(&Atom) -> Option<i32>,
) -> Vec<(usize, i32)> {
    molecule
        .atoms
        .iter()
        .enumerate()
        .filter_map(|(i, a)| value(a).map(|v| (i + 1, v)))
        .collect()
}

/// Property lines carry at most eight entries each.
fn write_property<W: Write>(writer: &mut W, tag: &str, entries: &[(usize, i32)]) -> Result<(), Error> {
    for chunk in entries.chunks(8) {
        write!(writer, "M  {tag}{:>3}", chunk.len())?;
        for (index, value) in chunk {
            write!(writer, " {index:>3} {value:>3}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// An atom-block code that was read but not understood is written back
/// unless a charge or radical has since been set.
fn charge_code(atom: &Atom) -> u8 {
    match atom.raw_charge_code {
        Some(code) if atom.charge == 0 && atom.radical == Radical::None => code,
        _ => util::charge_to_ctfile(atom.charge, atom.radical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mol::reader;
    use crate::io::options::ParseOptions;
    use crate::model::{
        atom::Atom,
        molecule::Bond,
        types::{BondStereo, BondType},
    };

    fn sample() -> Molecule {
        let mut nitrogen = Atom::new("N", [1.0, -2.5, 0.0]).with_charge(1).with_mapping(2);
        nitrogen.isotope = Some(15);
        let mut oxygen = Atom::new("O", [0.0, 1.0, 0.0]).with_charge(-4);
        oxygen.radical = Radical::Triplet;

        Molecule {
            name: "sample".into(),
            program: "  rdf-forge".into(),
            comment: String::new(),
            atoms: vec![Atom::new("C", [0.0, 0.0, 0.0]).with_mapping(1), nitrogen, oxygen],
            bonds: vec![
                Bond::new(1, 2, BondType::Single).with_stereo(BondStereo::Up),
                Bond::new(1, 3, BondType::Double),
            ],
        }
    }

    #[test]
    fn writes_fixed_columns() {
        let mut buf = Vec::new();
        write(&mut buf, &sample()).expect("write mol");
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[3], "  3  2  0  0  0  0  0  0  0  0999 V2000");
        assert_eq!(
            lines[4],
            "    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  1  0  0"
        );
        assert_eq!(&lines[5][31..39], "N   0  3");
        assert_eq!(lines[7], "  1  2  1  1  0  0  0");
        assert_eq!(lines[9], "M  CHG  2   2   1   3  -4");
        assert_eq!(lines[10], "M  RAD  1   3   3");
        assert_eq!(lines[11], "M  ISO  1   2  15");
        assert_eq!(lines.last(), Some(&"M  END"));
    }

    #[test]
    fn unknown_codes_are_written_back() {
        let mut carbon = Atom::new("C", [0.0, 0.0, 0.0]);
        carbon.raw_charge_code = Some(8);
        let molecule = Molecule {
            atoms: vec![carbon, Atom::new("N", [1.0, 0.0, 0.0])],
            bonds: vec![Bond::new(1, 2, BondType::Dative).with_stereo(BondStereo::Other(2))],
            ..Molecule::default()
        };

        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write mol");
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(&lines[4][31..39], "C   0  8");
        assert_eq!(&lines[6][..12], "  1  2  9  2");

        let parsed = reader::read(&text, &ParseOptions::strict()).expect("read mol");
        assert_eq!(parsed.atoms[0].raw_charge_code, Some(8));
        assert_eq!(parsed.bonds, molecule.bonds);
    }

    #[test]
    fn writes_and_reads_roundtrip() {
        let molecule = sample();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write mol");
        let text = String::from_utf8(buf).unwrap();
        let parsed = reader::read(&text, &ParseOptions::strict()).expect("read mol");

        assert_eq!(parsed.name, molecule.name);
        assert_eq!(parsed.bonds, molecule.bonds);
        for (a, b) in molecule.atoms.iter().zip(parsed.atoms.iter()) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.charge, b.charge);
            assert_eq!(a.radical, b.radical);
            assert_eq!(a.isotope, b.isotope);
            assert_eq!(a.mapping, b.mapping);
            for k in 0..3 {
                assert!((a.position[k] - b.position[k]).abs() < 1e-4);
            }
        }
    }
}
