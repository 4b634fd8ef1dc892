//! nampi-graph: The in-memory RDF graph every entity is written to.
//!
//! This crate is the single mutation point for the output graph. Entity
//! builders never touch triples directly: they allocate [`Node`]s and attach
//! relationships through a [`GraphSink`] passed to them explicitly. Once all
//! rows are processed the sink is turned into an [`RdfGraph`] for
//! inspection and serialization.

pub mod error;
pub mod format;
pub mod graph;
pub mod node;
pub mod sink;

pub use error::{GraphError, Result};
pub use format::OutputFormat;
pub use graph::RdfGraph;
pub use node::{Identity, Node, NodeId};
pub use sink::GraphSink;
