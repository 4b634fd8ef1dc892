//! Row mapper: turns the input tables into the output graph.
//!
//! Tables are processed one after another and rows in table order. Every
//! builder writes into the same `GraphSink`, created per parse call and
//! passed down explicitly. The first failing row aborts the whole parse.
//!
//! Persons and appellations that recur across rows or tables are built once
//! per parse and reused, so their triples are written a single time.

use std::collections::HashMap;

use nampi_core::{AppellationType, DataNamespaces};
use nampi_graph::{GraphSink, RdfGraph};
use serde::Serialize;

use crate::entities::{Appellation, Birth, Date, Person};
use crate::error::Result;
use crate::tables::{Column, Row, TableName, Tables};

/// Appellation columns of the persons table and the kind each one holds.
const APPELLATION_COLUMNS: [(Column, AppellationType); 4] = [
    (Column::Identifier, AppellationType::Identifier),
    (Column::FamilyName, AppellationType::FamilyName),
    (Column::GivenName, AppellationType::GivenName),
    (Column::ReligiousName, AppellationType::ReligiousName),
];

/// Counts of what one parse produced.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct ParseSummary {
    pub persons: usize,
    pub appellations: usize,
    pub births: usize,
    pub exact_dates: usize,
    pub unclear_dates: usize,
    pub undated_births: usize,
    pub triples: usize,
}

/// Key of an appellation node: kind, text and language.
type AppellationKey = (AppellationType, String, Option<String>);

/// Entities already written during the current parse.
#[derive(Debug, Default)]
struct Seen {
    persons: HashMap<String, Person>,
    appellations: HashMap<AppellationKey, Appellation>,
}

/// Parses NAMPI input tables into an RDF graph.
pub struct Parser<'a> {
    tables: &'a Tables,
    namespaces: &'a DataNamespaces,
}

impl<'a> Parser<'a> {
    pub fn new(tables: &'a Tables, namespaces: &'a DataNamespaces) -> Self {
        Self { tables, namespaces }
    }

    /// Parse all tables and return the resulting graph.
    pub fn parse(&self) -> Result<RdfGraph> {
        self.parse_with_summary().map(|(graph, _)| graph)
    }

    /// Parse all tables, returning the graph and a summary of its contents.
    pub fn parse_with_summary(&self) -> Result<(RdfGraph, ParseSummary)> {
        let mut sink = GraphSink::new();
        for (prefix, iri) in self.namespaces.prefixes() {
            sink.bind(prefix, iri);
        }

        let mut summary = ParseSummary::default();
        let mut seen = Seen::default();
        self.parse_persons(&mut sink, &mut seen, &mut summary)?;
        self.parse_births(&mut sink, &mut seen, &mut summary)?;
        summary.triples = sink.len();

        tracing::info!(
            persons = summary.persons,
            births = summary.births,
            triples = summary.triples,
            "Parse complete"
        );
        Ok((sink.finish(), summary))
    }

    /// Persons and their appellations. The persons table is optional.
    fn parse_persons(
        &self,
        sink: &mut GraphSink,
        seen: &mut Seen,
        summary: &mut ParseSummary,
    ) -> Result<()> {
        let Some(table) = self.tables.try_get(TableName::Persons) else {
            tracing::debug!("No persons table, skipping");
            return Ok(());
        };

        for row in table.rows() {
            summary.appellations += self.parse_person_row(sink, seen, &row)?;
            summary.persons += 1;
        }

        tracing::info!(rows = table.len(), "Parsed persons");
        Ok(())
    }

    fn parse_person_row(
        &self,
        sink: &mut GraphSink,
        seen: &mut Seen,
        row: &Row<'_>,
    ) -> Result<usize> {
        let person = self.person(sink, seen, row.require(Column::Id)?)?;
        let lang = row.get_optional(Column::Lang);

        let mut appellations = 0;
        for (column, kind) in APPELLATION_COLUMNS {
            let Some(text) = row.get_optional(column) else {
                continue;
            };
            // Identifiers are language-neutral.
            let lang = match kind {
                AppellationType::Identifier => None,
                _ => lang,
            };
            let appellation = self.appellation(sink, seen, text, kind, lang)?;
            person.add_appellation(sink, &appellation);
            appellations += 1;
        }

        tracing::debug!(
            row = row.index(),
            person = person.reference(),
            appellations,
            "Mapped person"
        );
        Ok(appellations)
    }

    /// Birth events: a person, an optional date and the event linking them.
    fn parse_births(
        &self,
        sink: &mut GraphSink,
        seen: &mut Seen,
        summary: &mut ParseSummary,
    ) -> Result<()> {
        let table = self.tables.get(TableName::Births)?;

        for row in table.rows() {
            let date = Date::optional(
                sink,
                row.get(Column::ExactDate)?,
                row.get(Column::EarliestDate)?,
                row.get(Column::LatestDate)?,
            )?;
            let person = self.person(sink, seen, row.require(Column::Person)?)?;
            Birth::new(sink, self.namespaces, &person, date.as_ref())?;

            match &date {
                Some(d) if d.is_exact() => summary.exact_dates += 1,
                Some(_) => summary.unclear_dates += 1,
                None => summary.undated_births += 1,
            }
            summary.births += 1;

            tracing::debug!(
                row = row.index(),
                person = person.reference(),
                dated = date.is_some(),
                "Mapped birth"
            );
        }

        tracing::info!(rows = table.len(), "Parsed births");
        Ok(())
    }

    /// The person for `reference`, built on first mention.
    fn person(&self, sink: &mut GraphSink, seen: &mut Seen, reference: &str) -> Result<Person> {
        if let Some(person) = seen.persons.get(reference) {
            return Ok(person.clone());
        }
        let person = Person::new(sink, self.namespaces, reference)?;
        seen.persons.insert(reference.to_string(), person.clone());
        Ok(person)
    }

    /// The appellation for `(kind, text, lang)`, built on first use.
    fn appellation(
        &self,
        sink: &mut GraphSink,
        seen: &mut Seen,
        text: &str,
        kind: AppellationType,
        lang: Option<&str>,
    ) -> Result<Appellation> {
        let key = (kind, text.to_string(), lang.map(str::to_string));
        if let Some(appellation) = seen.appellations.get(&key) {
            return Ok(appellation.clone());
        }
        let appellation = Appellation::new(sink, self.namespaces, text, Some(kind), lang)?;
        seen.appellations.insert(key, appellation.clone());
        Ok(appellation)
    }
}
