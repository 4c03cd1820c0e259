use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse parse options: {0}")]
    Options(#[from] toml::de::Error),

    #[error("malformed header at line {line}: {details}")]
    MalformedHeader { line: usize, details: String },

    #[error("expected {expected} {what} but found {found} (at line {line})")]
    CountMismatch {
        line: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("malformed atom line {line}: {details}")]
    MalformedAtomLine { line: usize, details: String },

    #[error("malformed bond line {line}: {details}")]
    MalformedBondLine { line: usize, details: String },

    #[error("bond at line {line} references atom {index} but only {atom_count} atoms are declared")]
    DanglingBondReference {
        line: usize,
        index: usize,
        atom_count: usize,
    },

    #[error("block ended before it was complete (at line {line}): {details}")]
    TruncatedBlock { line: usize, details: String },

    #[error("unsupported {format} version '{version}' at line {line}")]
    UnsupportedVersion {
        format: Format,
        line: usize,
        version: String,
    },

    #[error("reaction record {index} starting at line {line} is invalid: {source}")]
    Record {
        index: usize,
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

/// Discriminant of [`Error`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Options,
    MalformedHeader,
    CountMismatch,
    MalformedAtomLine,
    MalformedBondLine,
    DanglingBondReference,
    TruncatedBlock,
    UnsupportedVersion,
}

impl Error {
    pub fn header(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            details: details.into(),
        }
    }

    pub fn atom_line(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedAtomLine {
            line,
            details: details.into(),
        }
    }

    pub fn bond_line(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedBondLine {
            line,
            details: details.into(),
        }
    }

    pub fn truncated(line: usize, details: impl Into<String>) -> Self {
        Self::TruncatedBlock {
            line,
            details: details.into(),
        }
    }

    pub fn in_record(self, index: usize, line: usize) -> Self {
        Self::Record {
            index,
            line,
            source: Box::new(self),
        }
    }

    /// Line the error points at, if it comes from decoding text.
    ///
    /// For a [`Error::Record`] this is the line of the offending content,
    /// not the record's first line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io { .. } | Error::Options(_) => None,
            Error::MalformedHeader { line, .. }
            | Error::CountMismatch { line, .. }
            | Error::MalformedAtomLine { line, .. }
            | Error::MalformedBondLine { line, .. }
            | Error::DanglingBondReference { line, .. }
            | Error::TruncatedBlock { line, .. }
            | Error::UnsupportedVersion { line, .. } => Some(*line),
            Error::Record { source, .. } => source.line(),
        }
    }

    /// Kind of the underlying failure, looking through record context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Options(_) => ErrorKind::Options,
            Error::MalformedHeader { .. } => ErrorKind::MalformedHeader,
            Error::CountMismatch { .. } => ErrorKind::CountMismatch,
            Error::MalformedAtomLine { .. } => ErrorKind::MalformedAtomLine,
            Error::MalformedBondLine { .. } => ErrorKind::MalformedBondLine,
            Error::DanglingBondReference { .. } => ErrorKind::DanglingBondReference,
            Error::TruncatedBlock { .. } => ErrorKind::TruncatedBlock,
            Error::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            Error::Record { source, .. } => source.kind(),
        }
    }

    /// Index of the offending reaction record, when known.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Error::Record { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_context_preserves_kind_and_line() {
        let err = Error::truncated(42, "missing bond lines").in_record(3, 17);
        assert_eq!(err.kind(), ErrorKind::TruncatedBlock);
        assert_eq!(err.line(), Some(42));
        assert_eq!(err.record_index(), Some(3));
        assert_eq!(
            err.to_string(),
            "reaction record 3 starting at line 17 is invalid: \
             block ended before it was complete (at line 42): missing bond lines"
        );
    }

    #[test]
    fn messages_name_the_line() {
        let err = Error::DanglingBondReference {
            line: 9,
            index: 12,
            atom_count: 10,
        };
        assert_eq!(
            err.to_string(),
            "bond at line 9 references atom 12 but only 10 atoms are declared"
        );

        let err = Error::UnsupportedVersion {
            format: Format::Mol,
            line: 4,
            version: "V3000".into(),
        };
        assert_eq!(err.to_string(), "unsupported MOL version 'V3000' at line 4");
    }

    #[test]
    fn io_errors_have_no_line() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.line(), None);
    }
}
