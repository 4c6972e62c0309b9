use super::{Bracket, bracket_by};

const ALTITUDES: [f32; 4] = [0.0, 2000.0, 4000.0, 6000.0];

macro_rules! bracket_altitudes {
    ($($name:ident($target:expr, $tolerance:expr) => $expect:expr;)*) => {$(
        paste::paste! {
            #[test]
            fn [< bracket_altitudes_ $name >]() {
                assert_eq!(
                    bracket_by(&ALTITUDES, |&altitude| altitude, $target, $tolerance),
                    Some($expect),
                );
            }
        }
    )*}
}

bracket_altitudes! {
    on_first(0.0, 0.0) => Bracket::Exact(0);
    on_middle(2000.0, 0.0) => Bracket::Exact(1);
    on_last(6000.0, 0.0) => Bracket::Exact(3);
    between_first(500.0, 0.0) => Bracket::Between(0, 1);
    between_last(5999.0, 0.0) => Bracket::Between(2, 3);
    below(-200.0, 0.0) => Bracket::Clamped(0);
    above(8000.0, 0.0) => Bracket::Clamped(3);
    snap_below_breakpoint(3999.9995, 1e-3) => Bracket::Exact(2);
    snap_above_breakpoint(4000.0005, 1e-3) => Bracket::Exact(2);
    snap_outside_range(-0.0005, 1e-3) => Bracket::Exact(0);
    no_snap_beyond_tolerance(4000.5, 1e-3) => Bracket::Between(2, 3);
    negative_tolerance_is_zero(4000.5, -1.0) => Bracket::Between(2, 3);
}

#[test]
fn bracket_empty() {
    assert_eq!(bracket_by(&[] as &[f32], |&value| value, 1.0, 0.0), None);
}

#[test]
fn bracket_singleton() {
    let single = [15.0];
    assert_eq!(bracket_by(&single, |&value| value, 15.0, 0.0), Some(Bracket::Exact(0)));
    assert_eq!(bracket_by(&single, |&value| value, 30.0, 0.0), Some(Bracket::Clamped(0)));
    assert_eq!(bracket_by(&single, |&value| value, -10.0, 0.0), Some(Bracket::Clamped(0)));
}

#[test]
fn bracket_snaps_to_nearer_breakpoint() {
    let dense = [0.0, 1.0];
    assert_eq!(bracket_by(&dense, |&value| value, 0.7, 0.5), Some(Bracket::Exact(1)));
    assert_eq!(bracket_by(&dense, |&value| value, 0.3, 0.5), Some(Bracket::Exact(0)));
}

#[test]
fn bracket_by_key() {
    let rows = [(0.0, "sl"), (1000.0, "1000 ft")];
    let bracket = bracket_by(&rows, |&(altitude, _)| altitude, 250.0, 0.0);
    assert_eq!(bracket, Some(Bracket::Between(0, 1)));
    assert!(!bracket.is_some_and(Bracket::is_clamped));
}
