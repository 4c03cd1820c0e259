//! A pure Rust decoder for chemical reaction interchange files: RDF containers
//! holding `$RXN` records, each embedding V2000 `$MOL` connection tables.
//! It turns the fixed-column text into owned reaction values with reactant,
//! product and agent templates, atoms and bonds.
//!
//! # Features
//!
//! - **Classification**: a cheap, bounded scan that tells reaction containers
//!   apart from anything else before any parsing happens
//! - **Lazy extraction**: [`RdfReader`] decodes one record at a time, so large
//!   files can be consumed incrementally or abandoned early
//! - **Strict or permissive**: malformed records either fail the call with
//!   the record index and line, or are skipped and reported in [`Diagnostics`]
//! - **Writers**: MOL, RXN and RDF emission in the fixed-column layout
//!
//! # Quick Start
//!
//! ```
//! use rdf_forge::{ParseOptions, is_reaction_block, parse_reactions_from_block};
//!
//! let text = "\
//! $RDFILE 1
//! $DATM 10/19/2026 09:30
//! $RFMT
//! $RXN
//!
//!       RDKit
//!
//!   1  1
//! $MOL
//!
//!      RDKit          2D
//!
//!   2  1  0  0  0  0  0  0  0  0999 V2000
//!     0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  1  0  0
//!     1.4300    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  2  0  0
//!   1  2  1  0
//! M  END
//! $MOL
//!
//!      RDKit          2D
//!
//!   2  1  0  0  0  0  0  0  0  0999 V2000
//!     0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  1  0  0
//!     1.2100    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  2  0  0
//!   1  2  2  0
//! M  END
//! ";
//!
//! assert!(is_reaction_block(text));
//! assert!(!is_reaction_block("not an RDF block"));
//!
//! let container = parse_reactions_from_block(text, &ParseOptions::default())?;
//! assert_eq!(container.date_stamp.as_deref(), Some("10/19/2026 09:30"));
//!
//! let reaction = &container.reactions[0];
//! assert_eq!(reaction.num_reactant_templates(), 1);
//! assert_eq!(reaction.num_product_templates(), 1);
//!
//! let product = &reaction.products[0];
//! assert_eq!(product.atom_count(), 2);
//! assert_eq!(product.bonds[0].bond_type, rdf_forge::BondType::Double);
//! assert_eq!(product.atoms[1].mapping, 2);
//! # Ok::<(), rdf_forge::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Decoders and encoders for MOL, RXN and RDF text
//! - [`ParseOptions`]: Strictness, record limit and agent handling
//!
//! # Data Types
//!
//! - [`Reaction`]: Header, role-grouped molecule templates and data fields
//! - [`Molecule`]: One `$MOL` block: header lines, atoms and bonds
//! - [`Atom`]: Coordinates, symbol, charge, radical and mapping flags
//! - [`Bond`]: 1-based atom indices with type, stereo and topology
//! - [`RdfContainer`]: Extraction result with classification and diagnostics

mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::reaction::{DataField, Reaction, ReactionHeader};
pub use model::types::{AtomParity, BondStereo, BondTopology, BondType, Inversion, Radical, Role};

pub use io::{
    Diagnostics, ParseOptions, RdfContainer, RdfReader, SkippedRecord, Strictness,
    is_reaction_block, parse_molecule, parse_molecule_with, parse_reaction,
    parse_reactions_from_block,
};
