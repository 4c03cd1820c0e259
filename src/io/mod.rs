use crate::model::{molecule::Molecule, reaction::Reaction};
use std::fmt;

pub mod error;
pub mod lines;
pub mod marker;
pub mod mol;
pub mod options;
pub mod rdf;
pub mod rxn;
pub mod util;

pub use error::{Error, ErrorKind};
pub use options::{ParseOptions, Strictness};
pub use rdf::{
    Diagnostics, MAX_SCAN_BYTES, MAX_SCAN_LINES, RdfContainer, RdfReader, SkippedRecord, is_reaction_block,
    parse_reactions_from_block,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Mol,
    Rxn,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mol => write!(f, "MOL"),
            Format::Rxn => write!(f, "RXN"),
        }
    }
}

/// Parses a single `$RXN` block.
pub fn parse_reaction(text: &str, options: &ParseOptions) -> Result<Reaction, Error> {
    rxn::reader::read(text, options)
}

/// Parses a standalone MOL block with strict defaults.
pub fn parse_molecule(text: &str) -> Result<Molecule, Error> {
    mol::reader::read(text, &ParseOptions::default())
}

pub fn parse_molecule_with(text: &str, options: &ParseOptions) -> Result<Molecule, Error> {
    mol::reader::read(text, options)
}
