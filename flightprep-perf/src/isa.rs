//! International Standard Atmosphere temperatures for performance queries.
//!
//! Performance tables are often entered at "ISA + n" rather than at an absolute temperature.


/// Standard sea level temperature, in °C.
pub const ISA_SEA_LEVEL_TEMPERATURE: f32 = 15.0;

/// Standard temperature lapse rate, in K/m.
pub const ISA_LAPSE_RATE: f32 = 6.5e-3;

/// Converts feet to meters.
pub const METERS_PER_FOOT: f32 = 0.3048;

/// Pressure altitude of the tropopause, in ft.
///
/// The standard temperature is constant above it.
pub const TROPOPAUSE_ALTITUDE: f32 = 36089.24;

/// Standard temperature at `pressure_altitude` (in ft), in °C.
#[must_use]
pub fn isa_temperature(pressure_altitude: f32) -> f32 {
    let altitude = pressure_altitude.min(TROPOPAUSE_ALTITUDE);
    ISA_SEA_LEVEL_TEMPERATURE - ISA_LAPSE_RATE * altitude * METERS_PER_FOOT
}

/// Deviation of `temperature` (in °C) from the standard temperature at `pressure_altitude`.
#[must_use]
pub fn isa_deviation(pressure_altitude: f32, temperature: f32) -> f32 {
    temperature - isa_temperature(pressure_altitude)
}
