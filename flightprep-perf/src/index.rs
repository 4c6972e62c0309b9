use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::Range;

use bevy::log::debug;
use itertools::Itertools;

use crate::{Bracket, Error, MassGrid, PerformancePoint, PerformanceTable, bracket_by};


/// Mass breakpoint index over a borrowed [`PerformanceTable`].
///
/// Building the index is a single pass over the sorted points of the table.
/// The index is cheap enough to rebuild per query,
/// but can be kept around for repeated queries against the same table.
#[derive(Debug, Clone)]
pub struct TableIndex<'t> {
    /// Sorted by breakpoint mass, altitude and temperature.
    ///
    /// Only owned if near-duplicate masses had to be merged.
    points: Cow<'t, [PerformancePoint]>,
    masses: Vec<MassEntry>,
}

#[derive(Debug, Clone)]
struct MassEntry {
    mass:   f32,
    points: Range<usize>,
}

impl<'t> TableIndex<'t> {
    /// Indexes the mass breakpoints of `table`.
    ///
    /// Masses within `tolerance` above the lowest mass of a run are merged into one breakpoint
    /// at that lowest mass.
    /// If both merged masses tabulate the same altitude and temperature,
    /// the point of the lower mass is kept.
    #[must_use]
    pub fn new(table: &'t PerformanceTable, tolerance: f32) -> Self {
        let tolerance = tolerance.max(0.0);
        let points = table.points();

        let has_near_duplicates = points
            .iter()
            .map(|point| point.mass)
            .dedup()
            .tuple_windows()
            .any(|(low, high)| high - low <= tolerance);
        let points = if has_near_duplicates {
            Cow::Owned(merge_near_masses(table, tolerance))
        } else {
            Cow::Borrowed(points)
        };

        let mut masses = Vec::new();
        let mut start = 0;
        for (mass, run) in &points.iter().chunk_by(|point| point.mass) {
            let end = start + run.count();
            masses.push(MassEntry { mass, points: start..end });
            start = end;
        }

        Self { points, masses }
    }

    /// Distinct mass breakpoints in ascending order.
    pub fn mass_breakpoints(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.masses.iter().map(|entry| entry.mass)
    }

    /// The points tabulated at the breakpoint `mass`.
    ///
    /// The grid is empty if `mass` is not a breakpoint of the table.
    #[must_use]
    pub fn grid_for(&self, mass: f32) -> MassGrid<'_> {
        let points = match self.masses.binary_search_by(|entry| entry.mass.total_cmp(&mass)) {
            Ok(position) => &self.points[self.masses[position].points.clone()],
            Err(_) => &[],
        };
        MassGrid::new(mass, points)
    }

    /// Selects the mass breakpoints required to estimate a value at `mass`.
    ///
    /// # Errors
    /// [`Error::TableEmpty`] if the table has no points.
    pub fn bracket(&self, mass: f32, tolerance: f32) -> Result<MassBracket, Error> {
        let masses = &self.masses;
        let bracket =
            bracket_by(masses, |entry| entry.mass, mass, tolerance).ok_or(Error::TableEmpty)?;

        Ok(match bracket {
            Bracket::Exact(index) => MassBracket::Exact(masses[index].mass),
            Bracket::Between(low, high) => {
                MassBracket::Between(masses[low].mass, masses[high].mass)
            }
            Bracket::Clamped(_) if masses.len() == 1 => MassBracket::Single(masses[0].mass),
            Bracket::Clamped(0) => MassBracket::Below(masses[0].mass, masses[1].mass),
            Bracket::Clamped(index) => {
                MassBracket::Above(masses[index - 1].mass, masses[index].mass)
            }
        })
    }
}

fn merge_near_masses(table: &PerformanceTable, tolerance: f32) -> Vec<PerformancePoint> {
    let mut breakpoint = None::<f32>;
    let mut merged: Vec<_> = table
        .points()
        .iter()
        .map(|point| {
            let mass = match breakpoint {
                Some(mass) if point.mass - mass <= tolerance => mass,
                _ => {
                    breakpoint = Some(point.mass);
                    point.mass
                }
            };
            PerformancePoint { mass, ..*point }
        })
        .collect();

    // stable, so the point of the lower original mass stays first
    merged.sort_by(compare_keys);
    let len = merged.len();
    merged.dedup_by(|later, earlier| compare_keys(later, earlier).is_eq());

    debug!(
        "{}: merged mass breakpoints within {tolerance} kg, dropping {} shadowed points",
        table.name(),
        len - merged.len(),
    );
    merged
}

fn compare_keys(left: &PerformancePoint, right: &PerformancePoint) -> Ordering {
    left.mass
        .total_cmp(&right.mass)
        .then(left.altitude.total_cmp(&right.altitude))
        .then(left.temperature.total_cmp(&right.temperature))
}

/// The mass breakpoints selected for a target mass.
///
/// Pairs are always in ascending order of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassBracket {
    /// The target mass is a breakpoint.
    Exact(f32),
    /// The target mass is strictly between two adjacent breakpoints.
    Between(f32, f32),
    /// The target mass is below all breakpoints; contains the two lowest.
    Below(f32, f32),
    /// The target mass is above all breakpoints; contains the two highest.
    Above(f32, f32),
    /// The table has a single breakpoint, which differs from the target mass.
    Single(f32),
}

impl MassBracket {
    /// Whether the target mass lies outside the tabulated mass range.
    #[must_use]
    pub fn is_extrapolated(self) -> bool {
        matches!(self, Self::Below(..) | Self::Above(..) | Self::Single(_))
    }
}
