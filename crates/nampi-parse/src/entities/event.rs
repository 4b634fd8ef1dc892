//! Events linking persons to dates.

use nampi_core::vocab::core;
use nampi_core::DataNamespaces;
use nampi_graph::{GraphSink, Identity, Node};

use crate::entities::{Date, Person};
use crate::error::Result;

/// The birth of a person, optionally on a known date.
#[derive(Debug, Clone)]
pub struct Birth {
    node: Node,
}

impl Birth {
    /// Build a `core:birth` event.
    ///
    /// Emits `core:startsLifeOf` to the person and, if a date is given,
    /// `core:takesPlaceOn` to the date. Every call mints a new event node.
    pub fn new(
        sink: &mut GraphSink,
        namespaces: &DataNamespaces,
        person: &Person,
        date: Option<&Date>,
    ) -> Result<Self> {
        let namespace = namespaces.event();
        let node = Node::new(
            sink,
            core::BIRTH,
            Identity::Minted {
                namespace: &namespace,
                seed: "birth",
                deterministic: false,
            },
        )?;

        node.add_relationship(sink, core::STARTS_LIFE_OF, person.node());
        if let Some(date) = date {
            node.add_relationship(sink, core::TAKES_PLACE_ON, date.node());
        }

        Ok(Self { node })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}
