//! Line markers of the RDF, RXN and MOL formats.

pub const RDFILE: &str = "$RDFILE";
pub const DATM: &str = "$DATM";
pub const RFMT: &str = "$RFMT";
pub const MFMT: &str = "$MFMT";
pub const RIREG: &str = "$RIREG";
pub const REREG: &str = "$REREG";
pub const RXN: &str = "$RXN";
pub const MOL: &str = "$MOL";
pub const DTYPE: &str = "$DTYPE";
pub const DATUM: &str = "$DATUM";
pub const SDF_DELIMITER: &str = "$$$$";
pub const MOL_END: &str = "M  END";

/// Markers that open or close a block and so can never appear inside a
/// connection table.
pub const STRUCTURAL: [&str; 8] = [RDFILE, RFMT, MFMT, RXN, MOL, DTYPE, DATUM, SDF_DELIMITER];
