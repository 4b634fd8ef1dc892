//! nampi-parse: Table-to-RDF transformer for NAMPI biographical records.
//!
//! Loads the input tables, maps every row to a cluster of ontology entities
//! (persons, dates, appellations, birth events) and returns the finished
//! graph. Each entity builder writes to a `GraphSink` handed to it
//! explicitly; nothing is global.

pub mod config;
pub mod entities;
pub mod error;
pub mod parser;
pub mod tables;

pub use error::ParseError;
pub use parser::{ParseSummary, Parser};
pub use tables::{Column, Table, TableName, Tables};
