//! nampi-core: Shared vocabulary and types for the NAMPI table transformer.
//!
//! This crate provides the fixed pieces every other crate agrees on:
//! - The NAMPI ontology type and predicate IRIs (`core` and `mona` vocabularies)
//! - The data namespaces new nodes are minted in
//! - The closed set of appellation kinds

pub mod namespace;
pub mod types;
pub mod vocab;

pub use namespace::DataNamespaces;
pub use types::AppellationType;
