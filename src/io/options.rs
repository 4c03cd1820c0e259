use super::error::Error;
use serde::Deserialize;

/// How malformed records are handled during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// The first malformed record fails the whole call.
    #[default]
    Strict,
    /// Malformed records are skipped and reported in the diagnostics.
    Permissive,
}

/// Parser configuration, passed by reference through every layer.
///
/// Can be built in code or loaded from TOML:
///
/// ```
/// use rdf_forge::{ParseOptions, Strictness};
///
/// let options = ParseOptions::from_toml(
///     r#"
///     strictness = "permissive"
///     max_records = 100
///     "#,
/// )?;
/// assert_eq!(options.strictness, Strictness::Permissive);
/// assert_eq!(options.max_records, Some(100));
/// assert!(options.accept_agents);
/// # Ok::<(), rdf_forge::io::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub strictness: Strictness,
    /// Stop after this many reactions have been parsed.
    pub max_records: Option<usize>,
    /// Whether a non-zero agent count on an RXN counts line is accepted.
    pub accept_agents: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Strict,
            max_records: None,
            accept_agents: true,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        Self {
            strictness: Strictness::Permissive,
            ..Self::default()
        }
    }

    pub fn from_toml(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }

    pub fn with_agents(mut self, accept: bool) -> Self {
        self.accept_agents = accept;
        self
    }

    #[inline]
    pub fn is_permissive(&self) -> bool {
        self.strictness == Strictness::Permissive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::ErrorKind;

    #[test]
    fn defaults_are_strict_and_unbounded() {
        let options = ParseOptions::default();
        assert_eq!(options.strictness, Strictness::Strict);
        assert_eq!(options.max_records, None);
        assert!(options.accept_agents);
        assert!(!options.is_permissive());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let options = ParseOptions::from_toml("").expect("empty config");
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let options = ParseOptions::from_toml("accept_agents = false\nstrictness = \"strict\"")
            .expect("config");
        assert!(!options.accept_agents);
        assert_eq!(options.strictness, Strictness::Strict);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = ParseOptions::from_toml("strictness = \"lenient\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Options);
    }

    #[test]
    fn builders_compose() {
        let options = ParseOptions::permissive().with_max_records(2).with_agents(false);
        assert!(options.is_permissive());
        assert_eq!(options.max_records, Some(2));
        assert!(!options.accept_agents);
    }
}
