//! Configuration for the nampi-parse transformer.

use std::path::PathBuf;

use nampi_core::namespace::DEFAULT_DATA_BASE;
use nampi_core::DataNamespaces;
use nampi_graph::OutputFormat;
use serde::Deserialize;

use crate::error::{ParseError, Result};

/// Parser configuration.
///
/// Loaded from the `[parse]` section of `<prefix>.toml` or
/// `NAMPI__PARSE__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    /// Directory holding `births.csv` and the optional `persons.csv`.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// File the serialized graph is written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Output serialization: turtle or ntriples.
    #[serde(default)]
    pub format: OutputFormat,

    /// Base IRI for minted entity IRIs.
    #[serde(default = "default_data_base_iri")]
    pub data_base_iri: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("./tables")
}

fn default_output() -> PathBuf {
    PathBuf::from("./nampi.ttl")
}

fn default_data_base_iri() -> String {
    DEFAULT_DATA_BASE.to_string()
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output: default_output(),
            format: OutputFormat::default(),
            data_base_iri: default_data_base_iri(),
        }
    }
}

impl ParseConfig {
    /// Load from `<file_prefix>.toml` and the environment.
    ///
    /// A missing file or `[parse]` section yields the defaults. A present
    /// but invalid section is an error.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("NAMPI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ParseError::Config(e.to_string()))?;

        match cfg.get::<ParseConfig>("parse") {
            Ok(c) => Ok(c),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ParseError::Config(e.to_string())),
        }
    }

    pub fn namespaces(&self) -> DataNamespaces {
        DataNamespaces::new(self.data_base_iri.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ParseConfig::default();
        assert_eq!(c.input_dir, PathBuf::from("./tables"));
        assert_eq!(c.output, PathBuf::from("./nampi.ttl"));
        assert_eq!(c.format, OutputFormat::Turtle);
        assert_eq!(c.namespaces(), DataNamespaces::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let c = ParseConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(c.output, PathBuf::from("./nampi.ttl"));
    }

    #[test]
    fn file_section_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("nampi.toml"),
            "[parse]\noutput = \"out.nt\"\nformat = \"ntriples\"\ndata_base_iri = \"https://example.org/data\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("nampi");
        let c = ParseConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(c.input_dir, PathBuf::from("./tables"));
        assert_eq!(c.output, PathBuf::from("out.nt"));
        assert_eq!(c.format, OutputFormat::NTriples);
        assert_eq!(c.namespaces().person(), "https://example.org/data/person/");
    }

    #[test]
    fn invalid_section_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nampi.toml"), "[parse]\nformat = \"rdfxml\"\n").unwrap();

        let prefix = dir.path().join("nampi");
        let err = ParseConfig::load(prefix.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ParseError::Config(_)));
    }
}
