//! Appellations: names and identifiers with a text value.

use nampi_core::vocab::core;
use nampi_core::{AppellationType, DataNamespaces};
use nampi_graph::{GraphSink, Identity, Node};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Appellation {
    node: Node,
    appellation_type: AppellationType,
    text: String,
}

impl Appellation {
    /// Build an appellation node with a single `core:hasText` literal.
    ///
    /// `None` for the type means a given name. The node IRI is derived from
    /// the type, text and language, so equal appellations share one node.
    pub fn new(
        sink: &mut GraphSink,
        namespaces: &DataNamespaces,
        text: &str,
        appellation_type: Option<AppellationType>,
        lang: Option<&str>,
    ) -> Result<Self> {
        let appellation_type = appellation_type.unwrap_or_default();
        let literal = GraphSink::string_literal(text, lang)?;

        let namespace = namespaces.aspect();
        let seed = match lang {
            Some(tag) => format!("{text}@{tag}"),
            None => text.to_string(),
        };
        let node = Node::new(
            sink,
            appellation_type.type_iri(),
            Identity::Minted {
                namespace: &namespace,
                seed: &seed,
                deterministic: true,
            },
        )?;
        node.add_relationship(sink, core::HAS_TEXT, literal);

        Ok(Self {
            node,
            appellation_type,
            text: text.to_string(),
        })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn appellation_type(&self) -> AppellationType {
        self.appellation_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nampi_core::vocab::mona;
    use oxigraph::model::Term;

    fn has_text_literals(
        sink: &GraphSink,
        appellation: &Appellation,
    ) -> Vec<(String, Option<String>)> {
        let subject = appellation.node().subject();
        sink.triples()
            .iter()
            .filter(|t| t.subject == subject && t.predicate.as_ref() == core::HAS_TEXT)
            .map(|t| match &t.object {
                Term::Literal(l) => (l.value().to_string(), l.language().map(str::to_string)),
                other => panic!("expected literal, got {other}"),
            })
            .collect()
    }

    #[test]
    fn defaults_to_given_name() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let name = Appellation::new(&mut sink, &ns, "Maria", None, None).unwrap();

        assert_eq!(name.appellation_type(), AppellationType::GivenName);
        assert_eq!(name.node().type_iri(), mona::GIVEN_NAME);
    }

    #[test]
    fn maps_each_type_to_its_iri() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        for (kind, iri) in [
            (AppellationType::Identifier, core::IDENTIFIER),
            (AppellationType::FamilyName, mona::FAMILY_NAME),
            (AppellationType::GivenName, mona::GIVEN_NAME),
            (AppellationType::ReligiousName, mona::RELIGIOUS_NAME),
        ] {
            let a = Appellation::new(&mut sink, &ns, "x", Some(kind), None).unwrap();
            assert_eq!(a.node().type_iri(), iri);
        }
    }

    #[test]
    fn exactly_one_has_text_with_language() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let name = Appellation::new(
            &mut sink,
            &ns,
            "Scholastica",
            Some(AppellationType::ReligiousName),
            Some("la"),
        )
        .unwrap();

        assert_eq!(
            has_text_literals(&sink, &name),
            vec![("Scholastica".to_string(), Some("la".to_string()))]
        );
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn has_text_without_language() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let name =
            Appellation::new(&mut sink, &ns, "Huber", Some(AppellationType::FamilyName), None)
                .unwrap();

        assert_eq!(name.text(), "Huber");
        assert_eq!(
            has_text_literals(&sink, &name),
            vec![("Huber".to_string(), None)]
        );
    }

    #[test]
    fn node_is_minted_in_aspect_namespace() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let a = Appellation::new(&mut sink, &ns, "Maria", None, None).unwrap();
        let b = Appellation::new(&mut sink, &ns, "Maria", None, None).unwrap();
        let c = Appellation::new(&mut sink, &ns, "Maria", Some(AppellationType::FamilyName), None)
            .unwrap();

        let iri = a.node().id().as_named().unwrap().as_str();
        assert!(iri.starts_with(&ns.aspect()));
        assert_eq!(a.node().id(), b.node().id());
        assert_ne!(a.node().id(), c.node().id());
    }

    #[test]
    fn language_is_part_of_identity() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let de = Appellation::new(&mut sink, &ns, "Maria", None, Some("de")).unwrap();
        let la = Appellation::new(&mut sink, &ns, "Maria", None, Some("la")).unwrap();
        let plain = Appellation::new(&mut sink, &ns, "Maria", None, None).unwrap();

        assert_ne!(de.node().id(), la.node().id());
        assert_ne!(de.node().id(), plain.node().id());
    }

    #[test]
    fn invalid_language_tag_fails_before_writing() {
        let mut sink = GraphSink::new();
        let ns = DataNamespaces::default();
        let err = Appellation::new(&mut sink, &ns, "Maria", None, Some("??")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ParseError::Graph(nampi_graph::GraphError::LanguageTag { .. })
        ));
        assert!(sink.is_empty());
    }
}
