use itertools::Itertools;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::{EngineConfig, Error, PerformanceResult, TableIndex};

#[cfg(test)]
mod tests;

/// One row of a performance table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Aircraft mass, in kg.
    pub mass:        f32,
    /// Pressure altitude, in ft.
    pub altitude:    f32,
    /// Outside air temperature, in °C.
    pub temperature: f32,
    /// Tabulated distance, in m.
    pub value:       f32,
}

type PointKey = [NotNan<f32>; 3];

impl PerformancePoint {
    #[must_use]
    pub const fn new(mass: f32, altitude: f32, temperature: f32, value: f32) -> Self {
        Self { mass, altitude, temperature, value }
    }

    /// Validates the point and returns its `(mass, altitude, temperature)` sort key.
    fn key(&self) -> Result<PointKey, TableError> {
        let finite = |field: &'static str, value: f32| {
            NotNan::new(value)
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(TableError::NonFinite { field, point: *self })
        };

        let key = [
            finite("mass", self.mass)?,
            finite("altitude", self.altitude)?,
            finite("temperature", self.temperature)?,
        ];
        finite("value", self.value)?;

        if self.mass <= 0.0 {
            return Err(TableError::NonPositiveMass(self.mass));
        }
        if self.value < 0.0 {
            return Err(TableError::NegativeValue(self.value));
        }

        Ok(key)
    }
}

/// The flight phase a table applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Takeoff,
    Landing,
}

/// The quantity tabulated in a [`PerformanceTable`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum TableKind {
    /// Takeoff distance from brake release to lift-off.
    #[serde(rename = "takeoff-ground-roll")]
    #[strum(serialize = "takeoff-ground-roll")]
    TakeoffGroundRoll,
    /// Takeoff distance from brake release to a height of 15 m (50 ft).
    #[serde(rename = "takeoff-15m")]
    #[strum(serialize = "takeoff-15m")]
    Takeoff15m,
    /// Landing distance from touchdown to full stop.
    #[serde(rename = "landing-ground-roll")]
    #[strum(serialize = "landing-ground-roll")]
    LandingGroundRoll,
    /// Landing distance from a height of 15 m (50 ft) to full stop.
    #[serde(rename = "landing-15m")]
    #[strum(serialize = "landing-15m")]
    Landing15m,
}

impl TableKind {
    /// The ground roll kind of `phase`.
    #[must_use]
    pub const fn ground_roll(phase: Phase) -> Self {
        match phase {
            Phase::Takeoff => Self::TakeoffGroundRoll,
            Phase::Landing => Self::LandingGroundRoll,
        }
    }

    /// The 15 m screen height kind of `phase`.
    #[must_use]
    pub const fn screen_height(phase: Phase) -> Self {
        match phase {
            Phase::Takeoff => Self::Takeoff15m,
            Phase::Landing => Self::Landing15m,
        }
    }

    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::TakeoffGroundRoll | Self::Takeoff15m => Phase::Takeoff,
            Self::LandingGroundRoll | Self::Landing15m => Phase::Landing,
        }
    }
}

/// A validated set of performance points of a single kind.
///
/// Points are kept sorted by mass, then altitude, then temperature.
/// The table is immutable after construction;
/// queries only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableDef")]
pub struct PerformanceTable {
    name:   String,
    kind:   TableKind,
    points: Vec<PerformancePoint>,
}

#[derive(Deserialize)]
struct TableDef {
    name:   String,
    kind:   TableKind,
    points: Vec<PerformancePoint>,
}

impl TryFrom<TableDef> for PerformanceTable {
    type Error = TableError;

    fn try_from(def: TableDef) -> Result<Self, TableError> {
        Self::new(def.name, def.kind, def.points)
    }
}

impl PerformanceTable {
    /// Creates a table from unordered points.
    ///
    /// An empty table is accepted here,
    /// but every query against it fails with [`Error::TableEmpty`].
    ///
    /// # Errors
    /// If a point has a non-finite field, a non-positive mass or a negative distance,
    /// or if two points share the same mass, altitude and temperature.
    pub fn new(
        name: impl Into<String>,
        kind: TableKind,
        points: impl IntoIterator<Item = PerformancePoint>,
    ) -> Result<Self, TableError> {
        let mut keyed = points
            .into_iter()
            .map(|point| Ok((point.key()?, point)))
            .collect::<Result<Vec<_>, TableError>>()?;
        keyed.sort_by_key(|&(key, _)| key);

        if let Some(((_, point), _)) =
            keyed.iter().tuple_windows().find(|((left, _), (right, _))| left == right)
        {
            return Err(TableError::DuplicatePoint {
                mass:        point.mass,
                altitude:    point.altitude,
                temperature: point.temperature,
            });
        }

        Ok(Self {
            name:   name.into(),
            kind,
            points: keyed.into_iter().map(|(_, point)| point).collect(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn kind(&self) -> TableKind { self.kind }

    /// All points, sorted by mass, altitude and temperature.
    #[must_use]
    pub fn points(&self) -> &[PerformancePoint] { &self.points }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Builds the mass breakpoint index of this table,
    /// merging masses within `tolerance` of each other.
    #[must_use]
    pub fn index(&self, tolerance: f32) -> TableIndex<'_> { TableIndex::new(self, tolerance) }

    /// Estimates the distance at the given conditions.
    ///
    /// See [`crate::query`].
    pub fn query(
        &self,
        mass: f32,
        altitude: f32,
        temperature: f32,
        config: &EngineConfig,
    ) -> Result<PerformanceResult, Error> {
        crate::query(self, mass, altitude, temperature, config)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("Non-finite {field} in point {point:?}")]
    NonFinite { field: &'static str, point: PerformancePoint },
    #[error("Mass must be positive, got {0} kg")]
    NonPositiveMass(f32),
    #[error("Distance must not be negative, got {0} m")]
    NegativeValue(f32),
    #[error(
        "Duplicate point at mass {mass} kg, altitude {altitude} ft, temperature {temperature} °C"
    )]
    DuplicatePoint { mass: f32, altitude: f32, temperature: f32 },
}
