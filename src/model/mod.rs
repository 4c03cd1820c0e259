//! Value types produced by the decoders.
//!
//! - [`atom`] – One atom-block line with coordinates, symbol and flags.
//! - [`types`] – Bond types, stereo flags and other small enumerations.
//! - [`molecule`] – Bonds and the molecule template built from a `$MOL` block.
//! - [`reaction`] – Reactions assembled from reactant, product and agent templates.
//!
//! Every value is constructed once by a parse call and owned by the caller
//! afterwards; a [`Reaction`](reaction::Reaction) owns its molecules, which
//! own their atoms and bonds.

pub mod atom;
pub mod molecule;
pub mod reaction;
pub mod types;
