//! The finished output graph.
//!
//! `RdfGraph` keeps triples in a `Vec` in emission order (bag semantics) along
//! with the prefix bindings collected by the sink. It is read-only: lookups
//! for inspection, plus Turtle / N-Triples serialization and parsing.

use std::collections::BTreeMap;

use oxigraph::io::{RdfParser, RdfSerializer};
use oxigraph::model::vocab::rdf;
use oxigraph::model::{NamedNodeRef, Subject, Term, Triple};

use crate::error::{GraphError, Result};
use crate::format::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    triples: Vec<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl RdfGraph {
    pub fn new(triples: Vec<Triple>, prefixes: BTreeMap<String, String>) -> Self {
        Self { triples, prefixes }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Objects of all triples `subject --predicate--> ?o`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate.as_ref() == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of all triples `?s --predicate--> object`.
    pub fn subjects<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Subject> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate.as_ref() == predicate && &t.object == object)
            .map(|t| &t.subject)
    }

    /// Distinct subjects typed `type_iri`, in first-seen order.
    pub fn subjects_of_type(&self, type_iri: NamedNodeRef<'_>) -> Vec<&Subject> {
        let mut found: Vec<&Subject> = Vec::new();
        for triple in &self.triples {
            let typed = triple.predicate.as_ref() == rdf::TYPE
                && matches!(&triple.object, Term::NamedNode(n) if n.as_ref() == type_iri);
            if typed && !found.contains(&&triple.subject) {
                found.push(&triple.subject);
            }
        }
        found
    }

    /// Every triple with `subject` as its subject.
    pub fn triples_about<'a>(&'a self, subject: &'a Subject) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| &t.subject == subject)
    }

    /// Serialize all triples. Turtle output carries the bound prefixes.
    pub fn serialize(&self, format: OutputFormat) -> Result<Vec<u8>> {
        let mut serializer = RdfSerializer::from_format(format.rdf_format());
        if format.supports_prefixes() {
            for (prefix, iri) in &self.prefixes {
                serializer = serializer
                    .with_prefix(prefix.as_str(), iri.as_str())
                    .map_err(|source| GraphError::Iri {
                        iri: iri.clone(),
                        source,
                    })?;
            }
        }

        let mut writer = serializer.for_writer(Vec::new());
        for triple in &self.triples {
            writer.serialize_triple(triple)?;
        }
        let bytes = writer.finish()?;

        tracing::debug!(
            triples = self.triples.len(),
            bytes = bytes.len(),
            %format,
            "Serialized graph"
        );
        Ok(bytes)
    }

    /// Read a serialized graph back. Prefix bindings are not recovered.
    pub fn parse(input: &[u8], format: OutputFormat) -> Result<Self> {
        let triples = RdfParser::from_format(format.rdf_format())
            .for_reader(input)
            .map(|quad| quad.map(Triple::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::new(triples, BTreeMap::new()))
    }
}

impl<'a> IntoIterator for &'a RdfGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Identity, Node};
    use crate::sink::GraphSink;
    use nampi_core::vocab::core;

    fn sample() -> (RdfGraph, Subject, Subject) {
        let mut sink = GraphSink::new();
        sink.bind("aspect", "http://example.org/aspect/");
        let identity = Identity::Minted {
            namespace: "http://example.org/aspect/",
            seed: "Anna",
            deterministic: true,
        };
        let name = Node::new(&mut sink, core::IDENTIFIER, identity).unwrap();
        name.add_relationship(
            &mut sink,
            core::HAS_TEXT,
            GraphSink::string_literal("Anna", Some("de")).unwrap(),
        );
        let date = Node::new(&mut sink, core::DATE, Identity::Blank).unwrap();
        date.add_relationship(
            &mut sink,
            core::HAS_DATE_TIME_REPRESENTATION,
            GraphSink::date_time_literal("1900-05-03").unwrap(),
        );
        (sink.finish(), name.subject(), date.subject())
    }

    #[test]
    fn lookups() {
        let (graph, name, date) = sample();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.subjects_of_type(core::IDENTIFIER), vec![&name]);
        assert_eq!(graph.subjects_of_type(core::DATE), vec![&date]);
        assert!(graph.subjects_of_type(core::UNCLEAR_DATE).is_empty());
        assert_eq!(graph.objects(&name, core::HAS_TEXT).count(), 1);
        assert_eq!(graph.triples_about(&date).count(), 2);
    }

    #[test]
    fn subjects_by_object() {
        let (graph, name, _) = sample();
        let type_term = Term::from(oxigraph::model::NamedNode::from(core::IDENTIFIER));
        let found: Vec<_> = graph.subjects(rdf::TYPE, &type_term).collect();
        assert_eq!(found, vec![&name]);
    }

    #[test]
    fn ntriples_round_trip_is_exact() {
        let (graph, _, _) = sample();
        let bytes = graph.serialize(OutputFormat::NTriples).unwrap();
        let back = RdfGraph::parse(&bytes, OutputFormat::NTriples).unwrap();
        assert_eq!(back.into_triples(), graph.into_triples());
    }

    #[test]
    fn turtle_uses_bound_prefixes() {
        let (graph, _, _) = sample();
        let text = String::from_utf8(graph.serialize(OutputFormat::Turtle).unwrap()).unwrap();
        assert!(text.contains("<https://purl.org/nampi/owl/core#>"));
        assert!(text.contains("core:hasText"));
        assert!(text.contains("\"Anna\"@de"));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = RdfGraph::parse(b"this is not turtle", OutputFormat::Turtle).unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }
}
