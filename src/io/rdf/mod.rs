//! RDF containers: classification and lazy extraction of `$RXN` records.

pub mod reader;
pub mod scan;
pub mod writer;

pub use reader::{Diagnostics, RdfContainer, RdfReader, SkippedRecord, parse_reactions_from_block};
pub use scan::{MAX_SCAN_BYTES, MAX_SCAN_LINES, is_reaction_block};
