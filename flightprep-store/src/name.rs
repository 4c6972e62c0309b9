//! Parsing of the mass annotation at the end of table names.
//!
//! Manual tables are commonly titled like "Takeoff Flaps T/O - 1310 kg / 2888 lb".

/// Mass units recognized in table names.
const MASS_UNITS: [&str; 2] = ["kg", "lb"];

/// A run of ASCII digits in a table name followed by a mass unit.
struct MassMention<'a> {
    /// Byte offset of the first digit.
    start:  usize,
    digits: &'a str,
    unit:   &'static str,
}

/// Iterates over the digit runs of `name` that are followed by a mass unit.
fn mass_mentions(name: &str) -> impl Iterator<Item = MassMention<'_>> {
    let bytes = name.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() {
            if !bytes[pos].is_ascii_digit() {
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let digits = &name[start..pos];

            let rest = name[pos..].trim_start();
            let unit = MASS_UNITS.into_iter().find(|unit| {
                rest.get(..unit.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(unit))
            });
            if let Some(unit) = unit {
                return Some(MassMention { start, digits, unit });
            }
        }
        None
    })
}

/// The table name without its trailing mass annotation.
///
/// Tables measured from the same chart at different masses share a base name.
#[must_use]
pub fn base_name(table_name: &str) -> &str {
    let cut = mass_mentions(table_name).next().map_or(table_name.len(), |mention| mention.start);
    table_name[..cut].trim_end_matches(|c: char| c.is_whitespace() || c == '-' || c == '/').trim()
}

/// The mass in kg given in the table name, if any.
#[must_use]
pub fn mass_from_name(table_name: &str) -> Option<f32> {
    mass_mentions(table_name)
        .find(|mention| mention.unit == "kg")
        .and_then(|mention| mention.digits.parse().ok())
}
