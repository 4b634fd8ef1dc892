//! Entity builders.
//!
//! Each builder allocates one ontology entity in a [`GraphSink`] passed in
//! by the caller and decides which relationships the entity gets from its
//! inputs.
//!
//! [`GraphSink`]: nampi_graph::GraphSink

pub mod appellation;
pub mod date;
pub mod event;
pub mod person;

pub use appellation::Appellation;
pub use date::{Date, DateKind};
pub use event::Birth;
pub use person::Person;
