//! Typed graph nodes.
//!
//! A [`Node`] is allocated exactly once per entity: it gets an identifier,
//! writes its `rdf:type` triple to the sink and from then on only gains
//! outgoing relationships.

use oxigraph::model::vocab::rdf;
use oxigraph::model::{BlankNode, NamedNode, NamedNodeRef, Subject, Term};
use uuid::Uuid;

use crate::error::{GraphError, Result};
use crate::sink::GraphSink;

/// Identifier of a node in the output graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    Named(NamedNode),
    Blank(BlankNode),
}

impl NodeId {
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Blank(_) => None,
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Blank(b) => write!(f, "{b}"),
        }
    }
}

impl From<NodeId> for Subject {
    fn from(id: NodeId) -> Self {
        match id {
            NodeId::Named(n) => n.into(),
            NodeId::Blank(b) => b.into(),
        }
    }
}

impl From<NodeId> for Term {
    fn from(id: NodeId) -> Self {
        match id {
            NodeId::Named(n) => n.into(),
            NodeId::Blank(b) => b.into(),
        }
    }
}

/// How a new node's identifier is chosen.
#[derive(Debug, Clone, Copy)]
pub enum Identity<'a> {
    /// A fresh blank node.
    Blank,
    /// An IRI `{namespace}{uuid}`.
    ///
    /// With `deterministic` the UUID is a v5 hash of namespace, type and
    /// seed, so the same seed always yields the same IRI for a given type.
    /// Otherwise a random v4 UUID is used and the seed is ignored.
    Minted {
        namespace: &'a str,
        seed: &'a str,
        deterministic: bool,
    },
}

/// A typed node that has already been written to a [`GraphSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    type_iri: NamedNode,
}

impl Node {
    /// Allocate a node and emit its `rdf:type` triple.
    pub fn new(
        sink: &mut GraphSink,
        type_iri: NamedNodeRef<'_>,
        identity: Identity<'_>,
    ) -> Result<Self> {
        let id = match identity {
            Identity::Blank => NodeId::Blank(BlankNode::default()),
            Identity::Minted {
                namespace,
                seed,
                deterministic,
            } => NodeId::Named(mint_iri(namespace, type_iri, seed, deterministic)?),
        };

        let node = Self {
            id,
            type_iri: type_iri.into_owned(),
        };
        sink.add(&node, rdf::TYPE, node.type_iri.clone());
        Ok(node)
    }

    /// Emit `self --predicate--> object`.
    pub fn add_relationship(
        &self,
        sink: &mut GraphSink,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) {
        sink.add(self, predicate, object);
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn type_iri(&self) -> NamedNodeRef<'_> {
        self.type_iri.as_ref()
    }

    pub fn subject(&self) -> Subject {
        self.id.clone().into()
    }

    pub fn term(&self) -> Term {
        self.id.clone().into()
    }
}

impl From<&Node> for Subject {
    fn from(node: &Node) -> Self {
        node.subject()
    }
}

impl From<&Node> for Term {
    fn from(node: &Node) -> Self {
        node.term()
    }
}

fn mint_iri(
    namespace: &str,
    type_iri: NamedNodeRef<'_>,
    seed: &str,
    deterministic: bool,
) -> Result<NamedNode> {
    let uuid = if deterministic {
        Uuid::new_v5(
            &Uuid::NAMESPACE_URL,
            format!("{namespace}|{}|{seed}", type_iri.as_str()).as_bytes(),
        )
    } else {
        Uuid::new_v4()
    };

    let iri = format!("{namespace}{uuid}");
    NamedNode::new(iri.clone()).map_err(|source| GraphError::Iri { iri, source })
}
