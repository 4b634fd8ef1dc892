//! Input tables.
//!
//! A [`Tables`] set holds one [`Table`] per known [`TableName`]. Cells are
//! `Option<String>`: an empty or whitespace-only CSV cell is an absent value,
//! never an empty string.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::error::{ParseError, Result};

/// The tables the parser knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Births,
    Persons,
}

impl TableName {
    pub const ALL: [TableName; 2] = [TableName::Persons, TableName::Births];

    /// File stem of the table's CSV file.
    pub fn stem(self) -> &'static str {
        match self {
            Self::Births => "births",
            Self::Persons => "persons",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Column names used by the row mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    // births
    Person,
    ExactDate,
    EarliestDate,
    LatestDate,
    // persons
    Id,
    Identifier,
    FamilyName,
    GivenName,
    ReligiousName,
    Lang,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::ExactDate => "exact_date",
            Self::EarliestDate => "earliest_date",
            Self::LatestDate => "latest_date",
            Self::Id => "id",
            Self::Identifier => "identifier",
            Self::FamilyName => "family_name",
            Self::GivenName => "given_name",
            Self::ReligiousName => "religious_name",
            Self::Lang => "lang",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named table with a header row and nullable string cells.
#[derive(Debug, Clone)]
pub struct Table {
    name: TableName,
    headers: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<S: Into<String>>(name: TableName, headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let column_index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Self {
            name,
            headers,
            column_index,
            rows: Vec::new(),
        }
    }

    /// Append a row. Its width must match the header.
    pub fn push_row(&mut self, values: Vec<Option<String>>) -> Result<()> {
        if values.len() != self.headers.len() {
            return Err(ParseError::RowWidth {
                table: self.name,
                row: self.rows.len(),
                expected: self.headers.len(),
                found: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Read a table from CSV with a header row.
    pub fn from_csv<R: Read>(name: TableName, reader: R) -> Result<Self> {
        let csv_err = |source| ParseError::Csv {
            table: name,
            source,
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(csv_err)?.clone();
        let mut table = Table::new(name, headers.iter());

        for record in csv_reader.records() {
            let record = record.map_err(csv_err)?;
            let values = record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect();
            table.push_row(values)?;
        }

        Ok(table)
    }

    pub fn name(&self) -> TableName {
        self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(index, values)| Row {
            table: self,
            index,
            values,
        })
    }
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
    values: &'a [Option<String>],
}

impl<'a> Row<'a> {
    /// Zero-based position of the row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cell for `column`, or `MissingColumn` if the table has no such column.
    pub fn get(&self, column: Column) -> Result<Option<&'a str>> {
        let position = self
            .table
            .column_index
            .get(column.name())
            .ok_or_else(|| ParseError::MissingColumn {
                table: self.table.name,
                column: column.name().to_string(),
            })?;
        Ok(self.values[*position].as_deref())
    }

    /// Like [`Row::get`], but an absent value is a `MissingValue` error.
    pub fn require(&self, column: Column) -> Result<&'a str> {
        self.get(column)?.ok_or_else(|| ParseError::MissingValue {
            table: self.table.name,
            row: self.index,
            column: column.name().to_string(),
        })
    }

    /// Like [`Row::get`], but a missing column reads as absent.
    pub fn get_optional(&self, column: Column) -> Option<&'a str> {
        self.table
            .column_index
            .get(column.name())
            .and_then(|&position| self.values[position].as_deref())
    }
}

/// The set of input tables for one parse.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    tables: HashMap<TableName, Table>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name(), table);
    }

    /// Load every known table that has a `<stem>.csv` file in `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut tables = Self::new();

        for name in TableName::ALL {
            let path = dir.join(format!("{}.csv", name.stem()));
            if !path.is_file() {
                tracing::debug!(table = %name, path = %path.display(), "Table file not present");
                continue;
            }
            let file = std::fs::File::open(&path)?;
            let table = Table::from_csv(name, file)?;
            tracing::info!(table = %name, rows = table.len(), "Loaded table");
            tables.insert(table);
        }

        Ok(tables)
    }

    /// The table called `name`, or `MissingTable`.
    pub fn get(&self, name: TableName) -> Result<&Table> {
        self.tables
            .get(&name)
            .ok_or(ParseError::MissingTable { table: name })
    }

    pub fn try_get(&self, name: TableName) -> Option<&Table> {
        self.tables.get(&name)
    }
}
