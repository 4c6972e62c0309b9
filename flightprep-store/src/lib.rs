//! Schema for performance table documents.
//!
//! A document lists the tables transcribed from one aircraft's flight manual.
//! Tables transcribed from the same chart at different masses are grouped into
//! one [`perf::PerformanceBook`] by [`PerformanceFile::books`].

#![cfg_attr(feature = "precommit-checks", deny(warnings, unused, clippy::pedantic))]
#![cfg_attr(feature = "precommit-checks", deny(clippy::dbg_macro))]

use std::io;

use serde::{Deserialize, Serialize};

mod doc;
pub use doc::*;

mod name;
pub use name::*;

mod group;
pub use group::*;


/// Root structure of a performance table document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PerformanceFile {
    /// The aircraft the tables belong to.
    #[serde(default)]
    pub aircraft: Aircraft,
    /// Tables in the order they appear in the manual.
    pub tables:   Vec<TableDoc>,
}

/// Identification of the aircraft a document describes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Aircraft {
    pub registration: String,
    pub model:        String,
}

impl PerformanceFile {
    /// Parses a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, Error> { Ok(serde_json::from_str(json)?) }

    /// Parses a document from a JSON stream.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(io::BufReader::new(reader))?)
    }

    /// Validates the tables and groups them into books.
    ///
    /// Books are ordered by name.
    pub fn books(&self) -> Result<Vec<perf::PerformanceBook>, Error> {
        group_books(&self.tables)
    }
}

/// Errors raised while loading a performance document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed performance document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid table {table:?}: {source}")]
    Table {
        table:  String,
        #[source]
        source: perf::TableError,
    },
    #[error("Row {row} of table {table:?} has no mass and the table name does not give one")]
    MissingMass { table: String, row: usize },
    #[error("No table group named {0:?}")]
    UnknownGroup(String),
    #[error("No table group has a {0} table")]
    NoTableOfKind(perf::TableKind),
}
