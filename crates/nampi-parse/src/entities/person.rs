//! Persons.

use nampi_core::vocab::{core, rdfs};
use nampi_core::DataNamespaces;
use nampi_graph::{GraphSink, Identity, Node};

use crate::entities::Appellation;
use crate::error::Result;

/// A person node, identified by the reference used in the input tables.
#[derive(Debug, Clone)]
pub struct Person {
    node: Node,
    reference: String,
}

impl Person {
    /// Build a `core:person` node labelled with `reference`.
    ///
    /// The IRI is derived from the reference, so every row mentioning the
    /// same person resolves to the same node.
    pub fn new(
        sink: &mut GraphSink,
        namespaces: &DataNamespaces,
        reference: &str,
    ) -> Result<Self> {
        let label = GraphSink::string_literal(reference, None)?;

        let namespace = namespaces.person();
        let node = Node::new(
            sink,
            core::PERSON,
            Identity::Minted {
                namespace: &namespace,
                seed: reference,
                deterministic: true,
            },
        )?;
        node.add_relationship(sink, rdfs::LABEL, label);

        Ok(Self {
            node,
            reference: reference.to_string(),
        })
    }

    /// Link an appellation to this person.
    pub fn add_appellation(&self, sink: &mut GraphSink, appellation: &Appellation) {
        self.node
            .add_relationship(sink, core::HAS_APPELLATION, appellation.node());
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}
