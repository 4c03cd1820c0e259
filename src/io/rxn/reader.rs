use crate::io::error::Error;
use crate::io::lines::{self, Cursor, Line};
use crate::io::mol::reader::read_block;
use crate::io::options::ParseOptions;
use crate::io::{Format, marker, util};
use crate::model::molecule::Molecule;
use crate::model::reaction::{Reaction, ReactionHeader};
use crate::model::types::Role;
use tracing::trace;

/// Molecule counts declared on an RXN counts line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxnCounts {
    pub reactants: usize,
    pub products: usize,
    pub agents: usize,
}

impl RxnCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.reactants + self.products + self.agents
    }
}

/// A parsed record plus how many of its molecules lacked `M  END`.
#[derive(Debug)]
pub(crate) struct Record {
    pub reaction: Reaction,
    pub recovered_molecules: usize,
}

/// Parses a single `$RXN` block.
pub fn read(text: &str, options: &ParseOptions) -> Result<Reaction, Error> {
    let all: Vec<Line<'_>> = lines::lines(text).collect();
    let mut cursor = Cursor::new(&all);
    cursor.skip_blank();

    let record = read_record(&mut cursor, options)?;
    if !cursor.remaining().iter().all(|l| l.is_blank()) {
        trace!(
            lines = cursor.remaining().len(),
            "ignoring content after reaction block"
        );
    }
    Ok(record.reaction)
}

/// Reads `$RXN`, the three header lines, the counts line and every declared
/// molecule block. Any molecule failure fails the record.
pub(crate) fn read_record(
    cursor: &mut Cursor<'_, '_>,
    options: &ParseOptions,
) -> Result<Record, Error> {
    let marker_line = cursor
        .next_line()
        .ok_or_else(|| Error::truncated(cursor.end_line(), "expected a $RXN block"))?;
    let Some(version) = marker_line.marker_argument(marker::RXN) else {
        return Err(Error::header(
            marker_line.number,
            format!("expected $RXN marker, found '{}'", marker_line.text.trim()),
        ));
    };
    if !version.is_empty() && !version.eq_ignore_ascii_case("V2000") {
        return Err(Error::UnsupportedVersion {
            format: Format::Rxn,
            line: marker_line.number,
            version: version.to_string(),
        });
    }

    let mut header = ReactionHeader::default();
    for slot in [&mut header.name, &mut header.program, &mut header.comment] {
        let line = cursor.next_line().ok_or_else(|| {
            Error::truncated(cursor.end_line(), "reaction header ended before the counts line")
        })?;
        if line.has_marker(marker::MOL) {
            return Err(Error::header(
                line.number,
                "reaction header is missing its counts line",
            ));
        }
        *slot = line.text.trim().to_string();
    }

    let counts_line = cursor.next_line().ok_or_else(|| {
        Error::truncated(cursor.end_line(), "reaction header ended before the counts line")
    })?;
    let counts = decode_counts(&counts_line)?;
    if counts.agents > 0 && !options.accept_agents {
        return Err(Error::header(
            counts_line.number,
            format!("{} agent molecules declared but agents are not accepted", counts.agents),
        ));
    }

    let mut tally = Tally {
        expected: counts.total(),
        found: 0,
        recovered: 0,
    };
    let reactants = read_molecules(cursor, options, Role::Reactant, counts.reactants, &mut tally)?;
    let products = read_molecules(cursor, options, Role::Product, counts.products, &mut tally)?;
    let agents = read_molecules(cursor, options, Role::Agent, counts.agents, &mut tally)?;

    if let Some(extra) = cursor.remaining().iter().find(|l| !l.is_blank())
        && extra.has_marker(marker::MOL)
    {
        return Err(Error::CountMismatch {
            line: extra.number,
            what: "molecule blocks",
            expected: counts.total(),
            found: counts.total() + 1,
        });
    }

    Ok(Record {
        reaction: Reaction::assemble(header, reactants, products, agents),
        recovered_molecules: tally.recovered,
    })
}

struct Tally {
    expected: usize,
    found: usize,
    recovered: usize,
}

fn read_molecules(
    cursor: &mut Cursor<'_, '_>,
    options: &ParseOptions,
    role: Role,
    n: usize,
    tally: &mut Tally,
) -> Result<Vec<Molecule>, Error> {
    let mut molecules = Vec::with_capacity(n);
    for _ in 0..n {
        if let Some(next) = cursor.peek()
            && !next.has_marker(marker::MOL)
            && marker::STRUCTURAL.iter().any(|m| next.has_marker(m))
        {
            return Err(Error::CountMismatch {
                line: next.number,
                what: "molecule blocks",
                expected: tally.expected,
                found: tally.found,
            });
        }
        let block = read_block(cursor, options, true)?;
        if !block.terminated {
            tally.recovered += 1;
        }
        trace!(%role, atoms = block.molecule.atom_count(), "read molecule block");
        molecules.push(block.molecule);
        tally.found += 1;
    }
    Ok(molecules)
}

/// Decodes the `rrrppp[aaa]` counts line.
pub fn decode_counts(line: &Line<'_>) -> Result<RxnCounts, Error> {
    let field = |start: usize, what: &str| {
        util::number_field::<usize>(line.text, start, start + 3)
            .map_err(|e| Error::header(line.number, format!("invalid {what} count: {e}")))
    };

    let reactants = field(0, "reactant")?;
    let products = field(3, "product")?;
    let agents = field(6, "agent")?;

    match (reactants, products) {
        (Some(reactants), Some(products)) => Ok(RxnCounts {
            reactants,
            products,
            agents: agents.unwrap_or(0),
        }),
        _ => Err(Error::header(
            line.number,
            format!(
                "reaction counts line must declare reactant and product counts, found '{}'",
                line.text.trim()
            ),
        )),
    }
}
