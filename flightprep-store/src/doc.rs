use serde::{Deserialize, Serialize};

/// One table as transcribed from the manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TableDoc {
    /// Title of the table, optionally ending with the mass it was measured at,
    /// e.g. "Landing Flaps LDG - 1100 kg".
    pub table_name: String,
    /// Whether the table describes takeoff or landing.
    pub table_type: TableType,
    /// Measured rows.
    #[serde(default)]
    pub data:       Vec<Row>,
}

/// The flight phase of a transcribed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Takeoff,
    Landing,
}

impl From<TableType> for perf::Phase {
    fn from(ty: TableType) -> Self {
        match ty {
            TableType::Takeoff => perf::Phase::Takeoff,
            TableType::Landing => perf::Phase::Landing,
        }
    }
}

/// One measured row of a table.
///
/// Both distance columns are optional;
/// a row missing one contributes no point to the corresponding kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Row {
    /// Aircraft mass in kg.
    /// Taken from the table name if absent.
    #[serde(alias = "Masse", default, skip_serializing_if = "Option::is_none")]
    pub mass:         Option<f32>,
    /// Pressure altitude.
    #[serde(alias = "Altitude")]
    pub altitude:     Altitude,
    /// Outside air temperature in °C.
    #[serde(alias = "Temperature")]
    pub temperature:  f32,
    /// Ground roll distance in m.
    #[serde(alias = "Distance_roulement", default, skip_serializing_if = "Option::is_none")]
    pub ground_roll:  Option<f32>,
    /// Distance to or from a height of 15 m, in m.
    #[serde(alias = "Distance_passage_15m", default, skip_serializing_if = "Option::is_none")]
    pub distance_15m: Option<f32>,
}

/// A pressure altitude as written in a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Altitude {
    /// Altitude in ft.
    Feet(f32),
    /// A symbolic altitude.
    Named(NamedAltitude),
}

/// Symbolic altitudes used in manual tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum NamedAltitude {
    /// Sea level.
    #[serde(rename = "SL")]
    SeaLevel,
}

impl Altitude {
    /// The altitude in ft.
    #[must_use]
    pub fn feet(self) -> f32 {
        match self {
            Altitude::Feet(feet) => feet,
            Altitude::Named(NamedAltitude::SeaLevel) => 0.0,
        }
    }
}
