//! Bilinear interpolation over the altitude/temperature grid of one mass breakpoint.

use bevy::log::debug;
use itertools::Itertools;

use crate::{Bracket, Error, PerformancePoint, bracket_by, lerp_between};

#[cfg(test)]
mod tests;

/// The points of a table at a single mass breakpoint.
///
/// The grid may be sparse:
/// each altitude row only needs to contain the temperatures tabulated at that altitude.
#[derive(Debug, Clone, Copy)]
pub struct MassGrid<'t> {
    mass:   f32,
    /// Sorted by altitude, then temperature.
    points: &'t [PerformancePoint],
}

/// The result of interpolating a [`MassGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridEstimate {
    /// Estimated distance, in m.
    pub value:               f32,
    /// Whether the target altitude was outside the tabulated altitudes
    /// and was clamped to the nearest one.
    pub clamped_altitude:    bool,
    /// Whether the target temperature was outside the temperatures tabulated
    /// in any of the altitude rows used.
    pub clamped_temperature: bool,
}

impl GridEstimate {
    /// Whether the estimate used a clamped axis.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool { self.clamped_altitude || self.clamped_temperature }
}

/// One altitude row of a grid.
#[derive(Debug, Clone, Copy)]
struct Row<'t> {
    altitude: f32,
    points:   &'t [PerformancePoint],
}

/// Linear estimate along the temperature axis of a single row.
struct RowEstimate {
    value:   f32,
    clamped: bool,
}

impl<'t> MassGrid<'t> {
    /// `points` must all be at `mass` and sorted by altitude and temperature,
    /// which is the case for slices of a [`crate::TableIndex`].
    pub(crate) fn new(mass: f32, points: &'t [PerformancePoint]) -> Self { Self { mass, points } }

    #[must_use]
    pub fn mass(&self) -> f32 { self.mass }

    #[must_use]
    pub fn points(&self) -> &'t [PerformancePoint] { self.points }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Distinct tabulated altitudes in ascending order.
    pub fn altitudes(&self) -> impl Iterator<Item = f32> + 't {
        self.points.iter().map(|point| point.altitude).dedup()
    }

    fn rows(&self) -> Vec<Row<'t>> {
        let mut rows = Vec::new();
        let mut rest = self.points;
        while let Some(first) = rest.first() {
            let len =
                rest.partition_point(|point| point.altitude.total_cmp(&first.altitude).is_eq());
            let (points, next) = rest.split_at(len);
            rows.push(Row { altitude: first.altitude, points });
            rest = next;
        }
        rows
    }

    /// Estimates the distance at `altitude` and `temperature` for the mass of this grid.
    ///
    /// Altitude is bracketed among the tabulated altitudes first.
    /// Temperature is then bracketed separately within each bracketing altitude row,
    /// so rows need not share the same temperature columns.
    /// Targets outside the tabulated range of an axis are clamped to the nearest breakpoint
    /// and reported in the returned flags; this function never extrapolates.
    ///
    /// # Errors
    /// [`Error::GridEmpty`] if the grid has no points.
    pub fn interpolate(
        &self,
        altitude: f32,
        temperature: f32,
        tolerance: f32,
    ) -> Result<GridEstimate, Error> {
        let rows = self.rows();
        let bracket = bracket_by(&rows, |row| row.altitude, altitude, tolerance)
            .ok_or(Error::GridEmpty { mass: self.mass })?;

        let estimate = match bracket {
            Bracket::Exact(index) | Bracket::Clamped(index) => {
                let row = rows[index].interpolate(temperature, tolerance, self.mass)?;
                GridEstimate {
                    value:               row.value,
                    clamped_altitude:    bracket.is_clamped(),
                    clamped_temperature: row.clamped,
                }
            }
            Bracket::Between(low, high) => {
                let (low, high) = (rows[low], rows[high]);
                let low_estimate = low.interpolate(temperature, tolerance, self.mass)?;
                let high_estimate = high.interpolate(temperature, tolerance, self.mass)?;
                GridEstimate {
                    value:               lerp_between(
                        low.altitude,
                        low_estimate.value,
                        high.altitude,
                        high_estimate.value,
                        altitude,
                    ),
                    clamped_altitude:    false,
                    clamped_temperature: low_estimate.clamped || high_estimate.clamped,
                }
            }
        };

        debug!(
            "grid at {} kg: {altitude} ft {temperature} °C -> {bracket:?} = {} m",
            self.mass, estimate.value,
        );
        Ok(estimate)
    }
}

impl Row<'_> {
    fn interpolate(
        &self,
        temperature: f32,
        tolerance: f32,
        mass: f32,
    ) -> Result<RowEstimate, Error> {
        let points = self.points;
        let bracket = bracket_by(points, |point| point.temperature, temperature, tolerance)
            .ok_or(Error::GridEmpty { mass })?;

        Ok(match bracket {
            Bracket::Exact(index) => RowEstimate { value: points[index].value, clamped: false },
            Bracket::Clamped(index) => RowEstimate { value: points[index].value, clamped: true },
            Bracket::Between(low, high) => RowEstimate {
                value:   lerp_between(
                    points[low].temperature,
                    points[low].value,
                    points[high].temperature,
                    points[high].value,
                    temperature,
                ),
                clamped: false,
            },
        })
    }
}
