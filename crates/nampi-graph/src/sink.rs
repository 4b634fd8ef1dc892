//! The graph sink: owns the triples and prefix bindings of one parse.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use nampi_core::vocab::{CORE_NS, MONA_NS, RDFS_NS};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{Literal, NamedNode, Subject, Term, Triple};

use crate::error::{GraphError, Result};
use crate::graph::RdfGraph;

/// Input shape accepted by [`GraphSink::date_time_literal`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// Append-only triple store for a single transformation run.
///
/// Triples keep insertion order and duplicates are not removed. The sink
/// is not synchronized; it is meant to be threaded through builders as
/// `&mut GraphSink` from one thread of control.
#[derive(Debug, Clone)]
pub struct GraphSink {
    triples: Vec<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl GraphSink {
    /// Create an empty sink with the ontology prefixes bound.
    pub fn new() -> Self {
        let mut sink = Self {
            triples: Vec::new(),
            prefixes: BTreeMap::new(),
        };
        sink.bind("rdf", RDF_NS);
        sink.bind("rdfs", RDFS_NS);
        sink.bind("xsd", XSD_NS);
        sink.bind("core", CORE_NS);
        sink.bind("mona", MONA_NS);
        sink
    }

    /// Bind a prefix to a namespace IRI. Rebinding a prefix replaces it.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Append one triple.
    pub fn add(
        &mut self,
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) {
        self.triples.push(Triple::new(subject, predicate, object));
    }

    /// Build a plain or language-tagged string literal.
    pub fn string_literal(text: &str, lang: Option<&str>) -> Result<Literal> {
        match lang {
            None => Ok(Literal::new_simple_literal(text)),
            Some(tag) => Literal::new_language_tagged_literal(text, tag).map_err(|source| {
                GraphError::LanguageTag {
                    tag: tag.to_string(),
                    source,
                }
            }),
        }
    }

    /// Build an `xsd:dateTime` literal at midnight from a `YYYY-MM-DD` string.
    pub fn date_time_literal(value: &str) -> Result<Literal> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| {
            GraphError::DateFormat {
                value: value.to_string(),
                source,
            }
        })?;

        Ok(Literal::new_typed_literal(
            format!("{}T00:00:00", date.format(DATE_FORMAT)),
            xsd::DATE_TIME,
        ))
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    /// Hand over the accumulated graph.
    pub fn finish(self) -> RdfGraph {
        tracing::debug!(
            triples = self.triples.len(),
            prefixes = self.prefixes.len(),
            "Graph sink finished"
        );
        RdfGraph::new(self.triples, self.prefixes)
    }
}

impl Default for GraphSink {
    fn default() -> Self {
        Self::new()
    }
}
