use super::record::{self, Counts};
use crate::io::error::Error;
use crate::io::lines::{self, Cursor, Line};
use crate::io::marker;
use crate::io::options::ParseOptions;
use crate::io::util;
use crate::model::{atom::Atom, molecule::Molecule, types::Radical};
use tracing::{trace, warn};

/// A decoded molecule block and whether it was closed by `M  END`.
#[derive(Debug)]
pub(crate) struct Block {
    pub molecule: Molecule,
    pub terminated: bool,
}

/// Parses a standalone MOL block, with or without a leading `$MOL` line.
pub fn read(text: &str, options: &ParseOptions) -> Result<Molecule, Error> {
    let all: Vec<Line<'_>> = lines::lines(text).collect();
    let mut cursor = Cursor::new(&all);

    let first = all.iter().position(|l| !l.is_blank());
    let has_marker = first.is_some_and(|i| all[i].has_marker(marker::MOL));
    if has_marker {
        cursor.skip_blank();
    }

    let block = read_block(&mut cursor, options, has_marker)?;
    if !cursor.remaining().iter().all(|l| l.is_blank()) {
        trace!(
            lines = cursor.remaining().len(),
            "ignoring content after molecule block"
        );
    }
    Ok(block.molecule)
}

/// Reads one molecule block starting at the cursor.
///
/// `expect_marker` requires the block to open with a `$MOL` line, as it
/// does inside an RXN record.
pub(crate) fn read_block(
    cursor: &mut Cursor<'_, '_>,
    options: &ParseOptions,
    expect_marker: bool,
) -> Result<Block, Error> {
    if expect_marker {
        let line = cursor
            .next_line()
            .ok_or_else(|| Error::truncated(cursor.end_line(), "expected a $MOL block"))?;
        if !line.has_marker(marker::MOL) {
            return Err(Error::header(
                line.number,
                format!("expected $MOL marker, found '{}'", line.text.trim()),
            ));
        }
    }

    let mut title: Vec<&str> = Vec::with_capacity(3);
    let counts_line = loop {
        let line = cursor.next_line().ok_or_else(|| {
            Error::truncated(cursor.end_line(), "molecule header ended before the counts line")
        })?;
        if title.len() == 3 || record::is_counts_line(&line) {
            break line;
        }
        if is_structural(&line) {
            return Err(Error::header(
                line.number,
                format!("unexpected '{}' in molecule header", line.text.trim()),
            ));
        }
        title.push(line.text.trim());
    };
    let counts = record::decode_counts(&counts_line)?;

    let mut molecule = Molecule {
        name: title.first().copied().unwrap_or_default().to_string(),
        program: title.get(1).copied().unwrap_or_default().to_string(),
        comment: title.get(2).copied().unwrap_or_default().to_string(),
        atoms: Vec::with_capacity(counts.atoms),
        bonds: Vec::with_capacity(counts.bonds),
    };

    for found in 0..counts.atoms {
        let line = next_table_line(cursor, "atom lines", counts.atoms, found)?;
        molecule.atoms.push(record::decode_atom(&line)?);
    }

    for found in 0..counts.bonds {
        let line = next_table_line(cursor, "bond lines", counts.bonds, found)?;
        molecule.bonds.push(record::decode_bond(&line, counts.atoms)?);
    }

    let terminated = read_properties(cursor, &mut molecule.atoms, counts, options)?;

    Ok(Block {
        molecule,
        terminated,
    })
}

fn is_structural(line: &Line<'_>) -> bool {
    marker::STRUCTURAL.iter().any(|m| line.has_marker(m))
}

fn next_table_line<'a>(
    cursor: &mut Cursor<'_, 'a>,
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<Line<'a>, Error> {
    let line = cursor.next_line().ok_or_else(|| {
        Error::truncated(
            cursor.end_line(),
            format!("expected {expected} {what}, input ended after {found}"),
        )
    })?;
    if line.text.starts_with("M  ") || is_structural(&line) {
        return Err(Error::CountMismatch {
            line: line.number,
            what,
            expected,
            found,
        });
    }
    Ok(line)
}

/// Consumes the property block through `M  END`. Returns `false` when the
/// block ended without a terminator and permissive mode accepted it.
fn read_properties(
    cursor: &mut Cursor<'_, '_>,
    atoms: &mut [Atom],
    counts: Counts,
    options: &ParseOptions,
) -> Result<bool, Error> {
    let mut charges_reset = false;

    loop {
        let Some(line) = cursor.peek() else {
            return missing_terminator(cursor.end_line(), options);
        };
        if line.has_marker(marker::MOL_END) {
            cursor.next_line();
            return Ok(true);
        }
        if is_structural(&line) {
            return missing_terminator(line.number, options);
        }
        cursor.next_line();

        if record::looks_like_bond(&line) {
            return Err(Error::CountMismatch {
                line: line.number,
                what: "bond lines",
                expected: counts.bonds,
                found: counts.bonds + 1,
            });
        }

        if let Some(rest) = line.text.strip_prefix("M  CHG") {
            reset_charges(atoms, &mut charges_reset);
            for (index, value) in property_pairs(&line, rest, atoms.len())? {
                atoms[index - 1].charge = i8::try_from(value).map_err(|_| {
                    Error::atom_line(line.number, format!("charge {value} out of range"))
                })?;
            }
        } else if let Some(rest) = line.text.strip_prefix("M  RAD") {
            reset_charges(atoms, &mut charges_reset);
            for (index, value) in property_pairs(&line, rest, atoms.len())? {
                atoms[index - 1].radical = u8::try_from(value)
                    .ok()
                    .and_then(util::radical_from_ctfile)
                    .ok_or_else(|| {
                        Error::atom_line(line.number, format!("unknown radical code {value}"))
                    })?;
            }
        } else if let Some(rest) = line.text.strip_prefix("M  ISO") {
            for (index, value) in property_pairs(&line, rest, atoms.len())? {
                atoms[index - 1].isotope = Some(u16::try_from(value).map_err(|_| {
                    Error::atom_line(line.number, format!("isotope mass {value} out of range"))
                })?);
            }
        } else if line.text.starts_with("A  ") {
            // alias text sits on the following line
            if cursor
                .peek()
                .is_some_and(|l| !l.has_marker(marker::MOL_END) && !is_structural(&l))
            {
                cursor.next_line();
            }
        } else {
            trace!(line = line.number, text = line.text, "skipping property line");
        }
    }
}

fn missing_terminator(line: usize, options: &ParseOptions) -> Result<bool, Error> {
    if options.is_permissive() {
        warn!(line, "molecule block has no M  END terminator, accepting it");
        Ok(false)
    } else {
        Err(Error::truncated(line, "molecule block has no M  END terminator"))
    }
}

/// `M  CHG`/`M  RAD` replace every charge and radical given in the atom block.
fn reset_charges(atoms: &mut [Atom], done: &mut bool) {
    if !*done {
        for atom in atoms.iter_mut() {
            atom.charge = 0;
            atom.radical = Radical::None;
            atom.raw_charge_code = None;
        }
        *done = true;
    }
}

/// Parses `nn8 aaa vvv ...` entries following a property tag.
fn property_pairs(
    line: &Line<'_>,
    rest: &str,
    atom_count: usize,
) -> Result<Vec<(usize, i32)>, Error> {
    let bad = |details: String| Error::atom_line(line.number, details);

    let mut tokens = rest.split_whitespace();
    let count: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| bad("property line has no entry count".into()))?;

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let (Some(index), Some(value)) = (tokens.next(), tokens.next()) else {
            return Err(bad(format!("property line declares {count} entries")));
        };
        let index: usize = index
            .parse()
            .map_err(|_| bad(format!("invalid atom index '{index}' in property line")))?;
        let value: i32 = value
            .parse()
            .map_err(|_| bad(format!("invalid value '{value}' in property line")))?;
        if index == 0 || index > atom_count {
            return Err(bad(format!(
                "property references atom {index} outside 1..={atom_count}"
            )));
        }
        pairs.push((index, value));
    }
    Ok(pairs)
}
