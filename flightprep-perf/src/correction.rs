//! Runway condition corrections applied on top of tabulated distances.
//!
//! Flight manual tables assume a dry, level, paved runway in calm wind.
//! The factors here are the conventional rule-of-thumb corrections for other conditions,
//! with separate values for takeoff and landing.

use serde::{Deserialize, Serialize};

use crate::Phase;


/// Recommended factor applied to a corrected distance before comparing it with the runway.
pub const SAFETY_MARGIN_FACTOR: f32 = 1.15;

/// Correction factors of one flight phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactors {
    /// Multiplier for a wet runway surface.
    pub wet:               f32,
    /// Multiplier for a grass runway surface.
    pub grass:             f32,
    /// Fractional increase per percent of runway slope.
    pub slope_per_percent: f32,
    /// Fractional decrease per knot of headwind component.
    pub headwind_per_knot: f32,
    /// Fractional increase per knot of tailwind component.
    pub tailwind_per_knot: f32,
}

impl CorrectionFactors {
    pub const TAKEOFF: Self = Self {
        wet:               1.15,
        grass:             1.25,
        slope_per_percent: 0.10,
        headwind_per_knot: 0.010,
        tailwind_per_knot: 0.015,
    };

    pub const LANDING: Self = Self {
        wet:               1.43,
        grass:             1.25,
        slope_per_percent: 0.05,
        headwind_per_knot: 0.008,
        tailwind_per_knot: 0.013,
    };

    /// The default factors of `phase`.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Takeoff => Self::TAKEOFF,
            Phase::Landing => Self::LANDING,
        }
    }
}

/// Runway surface, slope and wind at the time of the movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunwayConditions {
    /// The runway surface is wet.
    pub wet:      bool,
    /// The runway surface is grass.
    pub grass:    bool,
    /// Runway slope in percent.
    ///
    /// Only the magnitude is used:
    /// the slope is assumed to be adverse (upslope for takeoff, downslope for landing).
    pub slope:    f32,
    /// Wind component along the runway, in kt.
    /// Positive for headwind, negative for tailwind.
    pub headwind: f32,
}

impl RunwayConditions {
    /// The combined correction factor with the default factors of `phase`.
    #[must_use]
    pub fn factor(&self, phase: Phase) -> f32 {
        self.factor_with(&CorrectionFactors::for_phase(phase))
    }

    /// The combined multiplicative correction factor.
    ///
    /// The factor is never negative, even for headwinds exceeding the linear rule's range.
    #[must_use]
    pub fn factor_with(&self, factors: &CorrectionFactors) -> f32 {
        let mut factor = 1.0;
        if self.wet {
            factor *= factors.wet;
        }
        if self.grass {
            factor *= factors.grass;
        }
        factor *= 1.0 + factors.slope_per_percent * self.slope.abs();

        if self.headwind > 0.0 {
            factor *= 1.0 - factors.headwind_per_knot * self.headwind;
        } else if self.headwind < 0.0 {
            factor *= 1.0 + factors.tailwind_per_knot * -self.headwind;
        }

        factor.max(0.0)
    }

    /// Applies the correction factor of `phase` to a tabulated `distance`.
    #[must_use]
    pub fn apply(&self, phase: Phase, distance: f32) -> f32 { distance * self.factor(phase) }
}

/// Adds the recommended safety margin to a distance.
#[must_use]
pub fn with_safety_margin(distance: f32) -> f32 { distance * SAFETY_MARGIN_FACTOR }
