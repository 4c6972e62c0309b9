use super::GridEstimate;
use crate::{Error, PerformancePoint, PerformanceTable, TableKind};

const TOLERANCE: f32 = 1e-3;

/// A grid at 1100 kg with a full 2x2 block at 0 and 2000 ft
/// and a single temperature column at 4000 ft.
fn sparse_table() -> PerformanceTable {
    PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [
            PerformancePoint::new(1100.0, 0.0, 0.0, 250.0),
            PerformancePoint::new(1100.0, 0.0, 20.0, 290.0),
            PerformancePoint::new(1100.0, 2000.0, 0.0, 300.0),
            PerformancePoint::new(1100.0, 2000.0, 20.0, 350.0),
            PerformancePoint::new(1100.0, 4000.0, 10.0, 400.0),
        ],
    )
    .unwrap()
}

fn assert_estimate(actual: Result<GridEstimate, Error>, expect: GridEstimate) {
    let actual = actual.expect("grid should not be empty");
    assert!(
        (actual.value - expect.value).abs() < 1e-3,
        "expected value {}, got {}",
        expect.value,
        actual.value
    );
    assert_eq!(actual.clamped_altitude, expect.clamped_altitude, "clamped_altitude of {actual:?}");
    assert_eq!(
        actual.clamped_temperature, expect.clamped_temperature,
        "clamped_temperature of {actual:?}"
    );
}

fn unclamped(value: f32) -> GridEstimate {
    GridEstimate { value, clamped_altitude: false, clamped_temperature: false }
}

#[test]
fn altitudes_distinct() {
    let table = sparse_table();
    let index = table.index(TOLERANCE);
    let grid = index.grid_for(1100.0);
    assert_eq!(grid.altitudes().collect::<Vec<_>>(), vec![0.0, 2000.0, 4000.0]);
}

#[test]
fn interpolate_exact_corner() {
    let table = sparse_table();
    let index = table.index(TOLERANCE);
    let estimate = index.grid_for(1100.0).interpolate(2000.0, 20.0, TOLERANCE).unwrap();
    assert_eq!(estimate, unclamped(350.0));
}

#[test]
fn interpolate_center() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(1000.0, 10.0, TOLERANCE),
        unclamped(297.5),
    );
}

#[test]
fn interpolate_temperature_only() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(2000.0, 5.0, TOLERANCE),
        unclamped(312.5),
    );
}

#[test]
fn interpolate_sparse_row() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(3000.0, 10.0, TOLERANCE),
        unclamped(362.5),
    );
}

#[test]
fn interpolate_sparse_row_clamps_temperature() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(4000.0, 0.0, TOLERANCE),
        GridEstimate { value: 400.0, clamped_altitude: false, clamped_temperature: true },
    );
}

#[test]
fn interpolate_clamps_altitude_below() {
    let table = sparse_table();
    let index = table.index(TOLERANCE);
    let grid = index.grid_for(1100.0);
    assert_estimate(
        grid.interpolate(-500.0, 0.0, TOLERANCE),
        GridEstimate { value: 250.0, clamped_altitude: true, clamped_temperature: false },
    );
    assert!(grid.interpolate(-500.0, 0.0, TOLERANCE).unwrap().is_extrapolated());
}

#[test]
fn interpolate_clamps_altitude_above() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(6000.0, 10.0, TOLERANCE),
        GridEstimate { value: 400.0, clamped_altitude: true, clamped_temperature: false },
    );
}

#[test]
fn interpolate_clamps_temperature_above() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(2000.0, 35.0, TOLERANCE),
        GridEstimate { value: 350.0, clamped_altitude: false, clamped_temperature: true },
    );
}

#[test]
fn interpolate_within_tolerance_is_not_clamped() {
    let table = sparse_table();
    assert_estimate(
        table.index(TOLERANCE).grid_for(1100.0).interpolate(-0.0005, 20.0005, TOLERANCE),
        unclamped(290.0),
    );
}

#[test]
fn interpolate_single_altitude() {
    let table = PerformanceTable::new(
        "Landing",
        TableKind::LandingGroundRoll,
        [
            PerformancePoint::new(1000.0, 0.0, 0.0, 200.0),
            PerformancePoint::new(1000.0, 0.0, 30.0, 230.0),
        ],
    )
    .unwrap();
    let index = table.index(TOLERANCE);
    let grid = index.grid_for(1000.0);

    assert_estimate(grid.interpolate(0.0, 15.0, TOLERANCE), unclamped(215.0));
    assert_estimate(
        grid.interpolate(1500.0, 15.0, TOLERANCE),
        GridEstimate { value: 215.0, clamped_altitude: true, clamped_temperature: false },
    );
}

#[test]
fn interpolate_empty_grid() {
    let table = sparse_table();
    assert_eq!(
        table.index(TOLERANCE).grid_for(999.0).interpolate(0.0, 0.0, TOLERANCE),
        Err(Error::GridEmpty { mass: 999.0 })
    );
}

#[test]
fn interpolate_monotonic_between_altitudes() {
    let table = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [
            PerformancePoint::new(1100.0, 500.0, 0.0, 400.0),
            PerformancePoint::new(1100.0, 1000.0, 0.0, 450.0),
        ],
    )
    .unwrap();
    let index = table.index(TOLERANCE);
    let grid = index.grid_for(1100.0);

    let values: Vec<f32> = (0..=50)
        .map(|step| {
            let altitude = 500.0 + step as f32 * 10.0;
            grid.interpolate(altitude, 0.0, TOLERANCE).unwrap().value
        })
        .collect();

    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "not monotonic: {pair:?}");
    }
    assert!(values.iter().all(|&value| (400.0..=450.0).contains(&value)), "overshoot: {values:?}");
}
