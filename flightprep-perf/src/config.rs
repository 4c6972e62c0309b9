use serde::{Deserialize, Serialize};

use crate::MassExtrapolation;

/// Tunables of the interpolation engine.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Targets within this distance of a breakpoint, in the unit of the axis,
    /// use the breakpoint directly.
    ///
    /// This absorbs representation noise such as `1099.9999` kg from unit conversions.
    pub breakpoint_tolerance:   f32,
    /// How to estimate values for a mass outside the tabulated masses.
    pub mass_extrapolation:     MassExtrapolation,
    /// The furthest distance, in kg, that linear extrapolation may reach
    /// beyond the nearest mass breakpoint.
    ///
    /// Masses further out are treated as if they were at this distance.
    /// `None` extrapolates without limit.
    pub max_mass_extrapolation: Option<f32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            breakpoint_tolerance:   1e-3,
            mass_extrapolation:     MassExtrapolation::Linear,
            max_mass_extrapolation: None,
        }
    }
}
