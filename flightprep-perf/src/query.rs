use bevy::log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{EngineConfig, PerformanceTable, TableKind, blend_mass, isa};


/// Conditions to estimate a distance for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceQuery {
    /// Aircraft mass, in kg.
    pub mass:        f32,
    /// Pressure altitude, in ft.
    pub altitude:    f32,
    /// Outside air temperature, in °C.
    pub temperature: f32,
    /// The table to query.
    pub kind:        TableKind,
}

impl PerformanceQuery {
    #[must_use]
    pub const fn new(kind: TableKind, mass: f32, altitude: f32, temperature: f32) -> Self {
        Self { mass, altitude, temperature, kind }
    }

    /// A query at a temperature `isa_deviation` degrees above the ISA temperature
    /// at `altitude`.
    #[must_use]
    pub fn at_isa(kind: TableKind, mass: f32, altitude: f32, isa_deviation: f32) -> Self {
        Self::new(kind, mass, altitude, isa::isa_temperature(altitude) + isa_deviation)
    }

    fn validate(&self) -> Result<(), Error> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::InvalidQuery("mass must be a positive finite number"));
        }
        if !self.altitude.is_finite() {
            return Err(Error::InvalidQuery("altitude must be finite"));
        }
        if !self.temperature.is_finite() {
            return Err(Error::InvalidQuery("temperature must be finite"));
        }
        Ok(())
    }
}

/// An estimated distance with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Estimated distance, in m.
    pub value:                 f32,
    /// Mass breakpoints whose grids contributed to `value`, in ascending order.
    pub used_mass_breakpoints: SmallVec<[f32; 2]>,
    /// The mass `value` was computed for, in kg.
    ///
    /// Differs from the queried mass when extrapolation was clamped or limited
    /// by [`EngineConfig`].
    pub effective_mass:        f32,
    /// Whether the mass was outside the tabulated masses.
    pub extrapolated_mass:     bool,
    /// Whether altitude or temperature was outside the grid of a contributing mass
    /// and was clamped to its boundary.
    pub extrapolated_grid:     bool,
}

impl PerformanceResult {
    /// Whether any axis was outside the tabulated envelope.
    ///
    /// Extrapolated results carry materially higher uncertainty
    /// and should be presented with a warning.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool { self.extrapolated_mass || self.extrapolated_grid }
}

/// Estimates the distance in `table` at the given mass, pressure altitude and temperature.
///
/// The grid of each required mass breakpoint is interpolated bilinearly
/// over altitude and temperature, clamping at the grid boundary.
/// The per-breakpoint values are then interpolated or extrapolated linearly over mass.
/// Clamping and extrapolation never fail the query; they are reported in the result flags.
///
/// Linear extrapolation far below the lightest breakpoint can yield a negative distance.
/// Such a value is returned as computed, flagged like any other extrapolation.
///
/// # Errors
/// - [`Error::InvalidQuery`] if any input is not finite or the mass is not positive.
/// - [`Error::TableEmpty`] if the table has no points.
/// - [`Error::GridEmpty`] if a required mass breakpoint has no points.
pub fn query(
    table: &PerformanceTable,
    mass: f32,
    altitude: f32,
    temperature: f32,
    config: &EngineConfig,
) -> Result<PerformanceResult, Error> {
    PerformanceQuery::new(table.kind(), mass, altitude, temperature).validate()?;

    let tolerance = config.breakpoint_tolerance;
    let index = table.index(tolerance);
    let bracket = index.bracket(mass, tolerance)?;
    debug!("{} at {mass} kg: {bracket:?}", table.name());

    let mut extrapolated_grid = false;
    let blend = blend_mass(bracket, mass, config, |breakpoint| {
        let estimate = index.grid_for(breakpoint).interpolate(altitude, temperature, tolerance)?;
        extrapolated_grid |= estimate.is_extrapolated();
        Ok::<_, Error>(estimate.value)
    })?;

    Ok(PerformanceResult {
        value: blend.value,
        used_mass_breakpoints: blend.used,
        effective_mass: blend.effective_mass,
        extrapolated_mass: blend.extrapolated,
        extrapolated_grid,
    })
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("The performance table has no points")]
    TableEmpty,
    #[error("No points are tabulated at mass breakpoint {mass} kg")]
    GridEmpty { mass: f32 },
    #[error("Invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("No {0} table is available")]
    MissingTable(TableKind),
}
