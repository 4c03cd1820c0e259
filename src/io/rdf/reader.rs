use super::scan;
use crate::io::error::Error;
use crate::io::lines::{self, Cursor, Line, Lines};
use crate::io::marker;
use crate::io::options::ParseOptions;
use crate::io::rxn::reader::{Record, read_record};
use crate::model::reaction::{DataField, Reaction};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use tracing::{debug, trace, warn};

/// A reaction record dropped by permissive extraction.
#[derive(Debug)]
pub struct SkippedRecord {
    /// 0-based ordinal of the record's `$RXN` marker in the text.
    pub index: usize,
    /// Absolute line span of the record region.
    pub lines: RangeInclusive<usize>,
    pub error: Error,
}

/// What permissive extraction tolerated along the way.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub skipped: Vec<SkippedRecord>,
    /// Molecules accepted without an `M  END` terminator.
    pub recovered_molecules: usize,
}

impl Diagnostics {
    #[inline]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.recovered_molecules == 0
    }
}

/// Result of [`parse_reactions_from_block`].
#[derive(Debug, Default)]
pub struct RdfContainer {
    /// Outcome of [`scan::is_reaction_block`] on the same text.
    pub is_reaction: bool,
    /// `$DATM` text of the file header, uninterpreted.
    pub date_stamp: Option<String>,
    pub reactions: Vec<Reaction>,
    pub diagnostics: Diagnostics,
}

/// Lazily extracts the `$RXN` records of an RDF container.
///
/// Each record spans from its `$RXN` line to the next `$RFMT`, `$RXN`,
/// `$MFMT` or `$RDFILE` line. Only one record's lines are buffered at a time,
/// so callers can stop early on large files by dropping the reader.
///
/// In strict mode the first failing record is yielded as an error and the
/// iterator ends. In permissive mode failing records are skipped and listed
/// in [`RdfReader::diagnostics`].
#[derive(Debug)]
pub struct RdfReader<'a> {
    lines: Lines<'a>,
    pending: Option<Line<'a>>,
    options: ParseOptions,
    next_index: usize,
    parsed: usize,
    date_stamp: Option<String>,
    diagnostics: Diagnostics,
    done: bool,
}

impl<'a> RdfReader<'a> {
    pub fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            lines: lines::lines(text),
            pending: None,
            options: options.clone(),
            next_index: 0,
            parsed: 0,
            date_stamp: None,
            diagnostics: Diagnostics::default(),
            done: false,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// `$DATM` of the file header, once the reader has moved past it.
    pub fn date_stamp(&self) -> Option<&str> {
        self.date_stamp.as_deref()
    }

    pub fn into_parts(self) -> (Option<String>, Diagnostics) {
        (self.date_stamp, self.diagnostics)
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        self.pending.take().or_else(|| self.lines.next())
    }

    /// Collects the lines of the next `$RXN` record, skipping whatever sits
    /// between records.
    fn next_region(&mut self) -> Option<Vec<Line<'a>>> {
        let start = loop {
            let line = self.next_line()?;
            if line.has_marker(marker::RXN) {
                break line;
            }
            if let Some(stamp) = line.marker_argument(marker::DATM) {
                if self.next_index == 0 && self.date_stamp.is_none() {
                    self.date_stamp = Some(stamp.to_string());
                }
            } else if !line.is_blank() {
                trace!(line = line.number, text = line.text, "skipping line outside reaction records");
            }
        };

        let mut region = vec![start];
        for line in self.lines.by_ref() {
            if is_record_boundary(&line) {
                self.pending = Some(line);
                break;
            }
            region.push(line);
        }
        Some(region)
    }
}

impl Iterator for RdfReader<'_> {
    type Item = Result<Reaction, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(max) = self.options.max_records
                && self.parsed >= max
            {
                debug!(max, "record limit reached");
                self.done = true;
                return None;
            }

            let Some(region) = self.next_region() else {
                self.done = true;
                return None;
            };
            let index = self.next_index;
            self.next_index += 1;
            let first = region[0].number;
            let last = region.last().map_or(first, |l| l.number);

            match parse_region(&region, &self.options) {
                Ok(record) => {
                    self.parsed += 1;
                    self.diagnostics.recovered_molecules += record.recovered_molecules;
                    debug!(
                        index,
                        line = first,
                        reactants = record.reaction.num_reactant_templates(),
                        products = record.reaction.num_product_templates(),
                        "extracted reaction record"
                    );
                    return Some(Ok(record.reaction));
                }
                Err(error) if self.options.is_permissive() => {
                    warn!(index, line = first, %error, "skipping malformed reaction record");
                    self.diagnostics.skipped.push(SkippedRecord {
                        index,
                        lines: first..=last,
                        error,
                    });
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error.in_record(index, first)));
                }
            }
        }
    }
}

impl FusedIterator for RdfReader<'_> {}

/// Classifies `text` and extracts every reaction record it holds.
///
/// Text without any `$RXN` record gives an empty container rather than an
/// error; use [`RdfContainer::is_reaction`] or [`scan::is_reaction_block`] to
/// tell the two apart.
pub fn parse_reactions_from_block(
    text: &str,
    options: &ParseOptions,
) -> Result<RdfContainer, Error> {
    let is_reaction = scan::is_reaction_block(text);
    let mut reader = RdfReader::new(text, options);
    let reactions = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
    let (date_stamp, diagnostics) = reader.into_parts();

    debug!(
        reactions = reactions.len(),
        skipped = diagnostics.skipped_count(),
        "parsed RDF block"
    );

    Ok(RdfContainer {
        is_reaction,
        date_stamp,
        reactions,
        diagnostics,
    })
}

fn is_record_boundary(line: &Line<'_>) -> bool {
    [marker::RFMT, marker::RXN, marker::MFMT, marker::RDFILE]
        .iter()
        .any(|m| line.has_marker(m))
}

fn parse_region(region: &[Line<'_>], options: &ParseOptions) -> Result<Record, Error> {
    let mut cursor = Cursor::new(region);
    let mut record = read_record(&mut cursor, options)?;
    let declared = record.reaction.iter_templates().count();
    record.reaction.data = read_data_fields(&mut cursor, declared)?;
    Ok(record)
}

/// Reads the `$DTYPE`/`$DATUM` pairs trailing a record's molecules.
///
/// Lines following a `$DATUM` that do not start with `$` continue its value.
fn read_data_fields(cursor: &mut Cursor<'_, '_>, declared: usize) -> Result<Vec<DataField>, Error> {
    let mut fields: Vec<DataField> = Vec::new();
    let mut in_datum = false;

    while let Some(line) = cursor.next_line() {
        if let Some(name) = line.marker_argument(marker::DTYPE) {
            fields.push(DataField {
                name: name.to_string(),
                value: String::new(),
            });
            in_datum = false;
        } else if let Some(value) = line.marker_argument(marker::DATUM) {
            match fields.last_mut() {
                Some(field) if !in_datum => {
                    field.value.push_str(value);
                    in_datum = true;
                }
                _ => trace!(line = line.number, "ignoring $DATUM without $DTYPE"),
            }
        } else if line.has_marker(marker::MOL) {
            return Err(Error::CountMismatch {
                line: line.number,
                what: "molecule blocks",
                expected: declared,
                found: declared + 1,
            });
        } else if in_datum && !line.text.starts_with('$') {
            if let Some(field) = fields.last_mut() {
                field.value.push('\n');
                field.value.push_str(line.text);
            }
        } else if line.has_marker(marker::RIREG) || line.has_marker(marker::REREG) {
            in_datum = false;
        } else if !line.is_blank() {
            trace!(line = line.number, text = line.text, "ignoring line in record data");
            in_datum = false;
        }
    }

    for field in &mut fields {
        let kept = field.value.trim_end_matches('\n').len();
        field.value.truncate(kept);
    }
    Ok(fields)
}
