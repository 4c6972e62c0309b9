//! Interpolation of tabulated aircraft takeoff and landing performance.
//!
//! A [`PerformanceTable`] holds the distances published in a flight manual
//! as a function of mass, pressure altitude and outside air temperature.
//! [`query`] estimates the distance at an arbitrary off-grid combination of the three,
//! interpolating bilinearly over altitude and temperature at each mass breakpoint
//! and then linearly over mass.
//!
//! Units follow the manuals this data is usually taken from:
//! mass in kg, pressure altitude in ft, temperature in °C and distances in m.

#![cfg_attr(feature = "precommit-checks", deny(warnings, unused, clippy::pedantic))]
#![cfg_attr(feature = "precommit-checks", deny(clippy::dbg_macro))]

mod bracket;
pub use bracket::*;

mod table;
pub use table::*;

mod book;
pub use book::*;

mod index;
pub use index::*;

mod grid;
pub use grid::*;

mod blend;
pub use blend::*;

mod config;
pub use config::*;

mod query;
pub use query::*;

pub mod correction;
pub mod isa;


/// Evaluates the line through `(x1, y1)` and `(x2, y2)` at `x`.
///
/// This interpolates when `x` is between `x1` and `x2` and extrapolates otherwise.
/// Returns `y1` if `x1` and `x2` coincide.
#[must_use]
pub fn lerp_between(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let span = x2 - x1;
    if span == 0.0 {
        return y1;
    }
    y1 + (y2 - y1) * (x - x1) / span
}
