use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EngineConfig, Error, PerformanceQuery, PerformanceResult, PerformanceTable, TableKind};

/// The performance tables of one aircraft configuration, at most one per [`TableKind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BookDef", into = "BookDef")]
pub struct PerformanceBook {
    /// Display name of the configuration, e.g. "Landing Flaps LDG".
    pub name: String,
    tables:   BTreeMap<TableKind, PerformanceTable>,
}

/// Serialized form of a book, listing tables instead of keying them by kind.
#[derive(Serialize, Deserialize)]
struct BookDef {
    name:   String,
    tables: Vec<PerformanceTable>,
}

impl From<BookDef> for PerformanceBook {
    fn from(def: BookDef) -> Self {
        let mut book = Self::new(def.name);
        for table in def.tables {
            book.insert(table);
        }
        book
    }
}

impl From<PerformanceBook> for BookDef {
    fn from(book: PerformanceBook) -> Self {
        Self { name: book.name, tables: book.tables.into_values().collect() }
    }
}

impl PerformanceBook {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), tables: BTreeMap::new() }
    }

    /// Adds a table, returning the table of the same kind it replaces.
    pub fn insert(&mut self, table: PerformanceTable) -> Option<PerformanceTable> {
        self.tables.insert(table.kind(), table)
    }

    #[must_use]
    pub fn get(&self, kind: TableKind) -> Option<&PerformanceTable> { self.tables.get(&kind) }

    /// Kinds for which this book has a table, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = TableKind> + '_ { self.tables.keys().copied() }

    /// Resolves `query.kind` and estimates the distance from that table.
    pub fn query(
        &self,
        query: &PerformanceQuery,
        config: &EngineConfig,
    ) -> Result<PerformanceResult, Error> {
        let table = self.get(query.kind).ok_or(Error::MissingTable(query.kind))?;
        table.query(query.mass, query.altitude, query.temperature, config)
    }
}
