//! Combination of per-breakpoint estimates along the mass axis.

use bevy::log::warn;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::{EngineConfig, MassBracket, lerp_between};


/// Policy for masses outside the tabulated mass range.
///
/// Either way the result is flagged as extrapolated.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MassExtrapolation {
    /// Extend the line through the two breakpoints nearest to the target mass.
    ///
    /// The line is not bounded below,
    /// so a mass far below the lightest breakpoint may yield a negative distance.
    #[default]
    Linear,
    /// Use the value of the nearest breakpoint.
    Clamp,
}

/// The result of blending along the mass axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MassBlend {
    /// Estimated distance, in m.
    pub value:          f32,
    /// Mass breakpoints whose grids contributed to `value`, in ascending order.
    pub used:           SmallVec<[f32; 2]>,
    /// The mass `value` was actually computed for.
    ///
    /// Differs from the target mass when it was limited by
    /// [`EngineConfig::max_mass_extrapolation`] or clamped.
    pub effective_mass: f32,
    /// Whether the target mass is outside the tabulated mass range.
    pub extrapolated:   bool,
}

/// Estimates the value at `target` mass.
///
/// `value_at` computes the grid estimate at a mass breakpoint.
/// It is only called for the breakpoints that `bracket` actually requires,
/// at most twice.
///
/// # Errors
/// The first error returned by `value_at`.
pub fn blend_mass<E>(
    bracket: MassBracket,
    target: f32,
    config: &EngineConfig,
    mut value_at: impl FnMut(f32) -> Result<f32, E>,
) -> Result<MassBlend, E> {
    let blend = match bracket {
        MassBracket::Exact(mass) => MassBlend {
            value:          value_at(mass)?,
            used:           smallvec![mass],
            effective_mass: mass,
            extrapolated:   false,
        },
        MassBracket::Single(mass) => MassBlend {
            value:          value_at(mass)?,
            used:           smallvec![mass],
            effective_mass: mass,
            extrapolated:   true,
        },
        MassBracket::Between(low, high) => MassBlend {
            value:          lerp_between(low, value_at(low)?, high, value_at(high)?, target),
            used:           smallvec![low, high],
            effective_mass: target,
            extrapolated:   false,
        },
        MassBracket::Below(low, high) | MassBracket::Above(low, high) => {
            let below = matches!(bracket, MassBracket::Below(..));
            let boundary = if below { low } else { high };

            match config.mass_extrapolation {
                MassExtrapolation::Clamp => MassBlend {
                    value:          value_at(boundary)?,
                    used:           smallvec![boundary],
                    effective_mass: boundary,
                    extrapolated:   true,
                },
                MassExtrapolation::Linear => {
                    let effective_mass = match config.max_mass_extrapolation {
                        Some(limit) if below => target.max(boundary - limit.abs()),
                        Some(limit) => target.min(boundary + limit.abs()),
                        None => target,
                    };
                    MassBlend {
                        value: lerp_between(
                            low,
                            value_at(low)?,
                            high,
                            value_at(high)?,
                            effective_mass,
                        ),
                        used: smallvec![low, high],
                        effective_mass,
                        extrapolated: true,
                    }
                }
            }
        }
    };

    if blend.extrapolated {
        warn!(
            "mass {target} kg is outside the tabulated masses, extrapolated from {:?} at {} kg",
            blend.used, blend.effective_mass,
        );
    }

    Ok(blend)
}
