use std::collections::BTreeMap;

use bevy::log::{debug, warn};
use perf::{PerformanceBook, PerformancePoint, PerformanceTable, Phase, TableKind};

use crate::{Error, Row, TableDoc, base_name, mass_from_name};

/// Points collected for one book, keyed by kind.
#[derive(Default)]
struct GroupBuilder {
    points: BTreeMap<TableKind, Vec<PerformancePoint>>,
}

impl GroupBuilder {
    fn add_table(&mut self, doc: &TableDoc) -> Result<(), Error> {
        let phase = Phase::from(doc.table_type);
        let name_mass = mass_from_name(&doc.table_name);

        for (row_index, row) in doc.data.iter().enumerate() {
            let mass = row.mass.or(name_mass).ok_or_else(|| Error::MissingMass {
                table: doc.table_name.clone(),
                row:   row_index,
            })?;
            self.add_row(phase, mass, row);
        }
        Ok(())
    }

    fn add_row(&mut self, phase: Phase, mass: f32, row: &Row) {
        let altitude = row.altitude.feet();
        let columns = [
            (TableKind::ground_roll(phase), row.ground_roll),
            (TableKind::screen_height(phase), row.distance_15m),
        ];
        for (kind, value) in columns {
            if let Some(value) = value {
                self.points.entry(kind).or_default().push(PerformancePoint::new(
                    mass,
                    altitude,
                    row.temperature,
                    value,
                ));
            }
        }
    }

    fn build(self, name: &str) -> Result<PerformanceBook, Error> {
        let mut book = PerformanceBook::new(name);
        for (kind, points) in self.points {
            let table = PerformanceTable::new(name, kind, points)
                .map_err(|source| Error::Table { table: name.to_owned(), source })?;
            book.insert(table);
        }
        Ok(book)
    }
}

/// Groups tables by [base name](base_name) and validates each group into a book.
///
/// Tables without a base name are skipped.
/// Books are ordered by name.
pub fn group_books(tables: &[TableDoc]) -> Result<Vec<PerformanceBook>, Error> {
    let mut groups = BTreeMap::<&str, GroupBuilder>::new();

    for doc in tables {
        let base = base_name(&doc.table_name);
        if base.is_empty() {
            warn!("Skipping table {:?} without a base name", doc.table_name);
            continue;
        }
        groups.entry(base).or_default().add_table(doc)?;
    }

    groups
        .into_iter()
        .map(|(name, builder)| {
            let book = builder.build(name)?;
            debug!(
                "Grouped performance book {name:?} with kinds {:?}",
                book.kinds().collect::<Vec<_>>()
            );
            Ok(book)
        })
        .collect()
}

/// Selects the book to query for `kind`.
///
/// If `group` is given, the book with that name is selected.
/// Otherwise the first book with a table of `kind` is selected.
pub fn find_book(
    books: Vec<PerformanceBook>,
    group: Option<&str>,
    kind: TableKind,
) -> Result<PerformanceBook, Error> {
    let mut books = books.into_iter();
    match group {
        Some(group) => books
            .find(|book| book.name == group)
            .ok_or_else(|| Error::UnknownGroup(group.to_owned())),
        None => books.find(|book| book.get(kind).is_some()).ok_or(Error::NoTableOfKind(kind)),
    }
}
