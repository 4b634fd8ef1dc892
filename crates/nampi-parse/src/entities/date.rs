//! Date entities: an exact day or a range with optional bounds.

use nampi_core::vocab::core;
use nampi_graph::{GraphSink, Identity, Node};
use oxigraph::model::Literal;

use crate::error::Result;

/// Which kind of date the inputs describe, decided once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKind {
    /// A known day. Bounds supplied alongside it are ignored.
    Exact(String),
    /// A day somewhere between optional bounds.
    Range {
        earliest: Option<String>,
        latest: Option<String>,
    },
}

impl DateKind {
    /// Classify the three optional inputs. `None` when all are absent.
    pub fn classify(
        exact: Option<&str>,
        earliest: Option<&str>,
        latest: Option<&str>,
    ) -> Option<Self> {
        match (exact, earliest, latest) {
            (Some(exact), _, _) => Some(Self::Exact(exact.to_string())),
            (None, None, None) => None,
            (None, earliest, latest) => Some(Self::Range {
                earliest: earliest.map(str::to_string),
                latest: latest.map(str::to_string),
            }),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// A date node in the graph.
#[derive(Debug, Clone)]
pub struct Date {
    node: Node,
    kind: DateKind,
}

impl Date {
    /// Build a date node.
    ///
    /// An `exact` date yields a `core:date` with a single date-time
    /// representation. Otherwise the node is a `core:unclearDate` with an
    /// earliest and/or latest representation for each bound given, possibly
    /// none at all.
    ///
    /// Malformed date strings fail with `GraphError::DateFormat` before any
    /// triple is written.
    pub fn new(
        sink: &mut GraphSink,
        exact: Option<&str>,
        earliest: Option<&str>,
        latest: Option<&str>,
    ) -> Result<Self> {
        let kind = DateKind::classify(exact, earliest, latest).unwrap_or(DateKind::Range {
            earliest: None,
            latest: None,
        });
        Self::from_kind(sink, kind)
    }

    /// Build a date only if at least one input is present.
    pub fn optional(
        sink: &mut GraphSink,
        exact: Option<&str>,
        earliest: Option<&str>,
        latest: Option<&str>,
    ) -> Result<Option<Self>> {
        DateKind::classify(exact, earliest, latest)
            .map(|kind| Self::from_kind(sink, kind))
            .transpose()
    }

    fn from_kind(sink: &mut GraphSink, kind: DateKind) -> Result<Self> {
        let node = match &kind {
            DateKind::Exact(exact) => {
                let literal = GraphSink::date_time_literal(exact)?;
                let node = Node::new(sink, core::DATE, Identity::Blank)?;
                node.add_relationship(sink, core::HAS_DATE_TIME_REPRESENTATION, literal);
                node
            }
            DateKind::Range { earliest, latest } => {
                let earliest = parse_bound(earliest.as_deref())?;
                let latest = parse_bound(latest.as_deref())?;
                let node = Node::new(sink, core::UNCLEAR_DATE, Identity::Blank)?;
                if let Some(literal) = earliest {
                    node.add_relationship(
                        sink,
                        core::HAS_EARLIEST_POSSIBLE_DATE_TIME_REPRESENTATION,
                        literal,
                    );
                }
                if let Some(literal) = latest {
                    node.add_relationship(
                        sink,
                        core::HAS_LATEST_POSSIBLE_DATE_TIME_REPRESENTATION,
                        literal,
                    );
                }
                node
            }
        };

        Ok(Self { node, kind })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> &DateKind {
        &self.kind
    }

    pub fn is_exact(&self) -> bool {
        self.kind.is_exact()
    }
}

fn parse_bound(bound: Option<&str>) -> Result<Option<Literal>> {
    Ok(bound.map(GraphSink::date_time_literal).transpose()?)
}
