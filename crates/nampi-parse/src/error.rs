//! Error types for the nampi-parse crate.

use thiserror::Error;

use crate::tables::TableName;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Graph error: {0}")]
    Graph(#[from] nampi_graph::GraphError),

    #[error("Table not found: {table}")]
    MissingTable { table: TableName },

    #[error("Column '{column}' not found in table {table}")]
    MissingColumn { table: TableName, column: String },

    #[error("Row {row} of table {table} has no value for required column '{column}'")]
    MissingValue {
        table: TableName,
        row: usize,
        column: String,
    },

    #[error("Row {row} of table {table} has {found} values, expected {expected}")]
    RowWidth {
        table: TableName,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("CSV error in table {table}: {source}")]
    Csv {
        table: TableName,
        #[source]
        source: csv::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
