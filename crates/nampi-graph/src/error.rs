//! Error types for the nampi-graph crate.

use oxigraph::io::RdfParseError;
use oxigraph::model::{IriParseError, LanguageTagParseError};
use thiserror::Error;

/// Errors from building, serializing or reading graphs.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD ({source})")]
    DateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid language tag '{tag}': {source}")]
    LanguageTag {
        tag: String,
        #[source]
        source: LanguageTagParseError,
    },

    #[error("Invalid IRI '{iri}': {source}")]
    Iri {
        iri: String,
        #[source]
        source: IriParseError,
    },

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("RDF parse error: {0}")]
    Parse(#[from] RdfParseError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
