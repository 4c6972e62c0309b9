use std::str::FromStr;

use strum::IntoEnumIterator;

use super::{PerformancePoint, PerformanceTable, Phase, TableError, TableKind};

fn point(mass: f32, altitude: f32, temperature: f32, value: f32) -> PerformancePoint {
    PerformancePoint::new(mass, altitude, temperature, value)
}

#[test]
fn new_sorts_points() {
    let table = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [
            point(1200.0, 0.0, 15.0, 300.0),
            point(1100.0, 2000.0, 0.0, 280.0),
            point(1100.0, 0.0, 15.0, 260.0),
            point(1100.0, 0.0, 0.0, 250.0),
        ],
    )
    .unwrap();

    assert_eq!(
        table.points(),
        &[
            point(1100.0, 0.0, 0.0, 250.0),
            point(1100.0, 0.0, 15.0, 260.0),
            point(1100.0, 2000.0, 0.0, 280.0),
            point(1200.0, 0.0, 15.0, 300.0),
        ]
    );
    assert_eq!(table.name(), "Takeoff");
    assert_eq!(table.kind(), TableKind::TakeoffGroundRoll);
}

#[test]
fn new_accepts_empty() {
    let table = PerformanceTable::new("Empty", TableKind::Landing15m, []).unwrap();
    assert!(table.is_empty());
}

#[test]
fn new_rejects_duplicate() {
    let err = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [point(1100.0, 0.0, 15.0, 260.0), point(1100.0, 0.0, 15.0, 265.0)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicatePoint { mass: 1100.0, altitude: 0.0, temperature: 15.0 }
    );
}

#[test]
fn new_rejects_nan() {
    let err = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [point(1100.0, f32::NAN, 15.0, 260.0)],
    )
    .unwrap_err();
    assert!(matches!(err, TableError::NonFinite { field: "altitude", .. }), "got {err:?}");
}

#[test]
fn new_rejects_infinite_value() {
    let err = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [point(1100.0, 0.0, 15.0, f32::INFINITY)],
    )
    .unwrap_err();
    assert!(matches!(err, TableError::NonFinite { field: "value", .. }), "got {err:?}");
}

#[test]
fn new_rejects_non_positive_mass() {
    let err =
        PerformanceTable::new("Takeoff", TableKind::TakeoffGroundRoll, [point(0.0, 0.0, 15.0, 1.0)])
            .unwrap_err();
    assert_eq!(err, TableError::NonPositiveMass(0.0));
}

#[test]
fn new_rejects_negative_distance() {
    let err = PerformanceTable::new(
        "Takeoff",
        TableKind::TakeoffGroundRoll,
        [point(1000.0, 0.0, 15.0, -1.0)],
    )
    .unwrap_err();
    assert_eq!(err, TableError::NegativeValue(-1.0));
}

#[test]
fn deserialize_validates() {
    let valid: PerformanceTable = serde_json::from_value(serde_json::json!({
        "name": "Landing",
        "kind": "landing-15m",
        "points": [
            { "mass": 1100.0, "altitude": 0.0, "temperature": 15.0, "value": 480.0 },
        ],
    }))
    .unwrap();
    assert_eq!(valid.kind(), TableKind::Landing15m);
    assert_eq!(valid.points(), &[point(1100.0, 0.0, 15.0, 480.0)]);

    let duplicate = serde_json::from_value::<PerformanceTable>(serde_json::json!({
        "name": "Landing",
        "kind": "landing-15m",
        "points": [
            { "mass": 1100.0, "altitude": 0.0, "temperature": 15.0, "value": 480.0 },
            { "mass": 1100.0, "altitude": 0.0, "temperature": 15.0, "value": 490.0 },
        ],
    }));
    assert!(duplicate.is_err());
}

#[test]
fn kind_names() {
    let names: Vec<_> = TableKind::iter().map(|kind| kind.to_string()).collect();
    assert_eq!(
        names,
        ["takeoff-ground-roll", "takeoff-15m", "landing-ground-roll", "landing-15m"]
    );

    for kind in TableKind::iter() {
        assert_eq!(TableKind::from_str(&kind.to_string()).unwrap(), kind);
        assert_eq!(
            serde_json::to_value(kind).unwrap(),
            serde_json::Value::String(kind.to_string())
        );
    }
}

#[test]
fn kind_phase() {
    for phase in Phase::iter() {
        assert_eq!(TableKind::ground_roll(phase).phase(), phase);
        assert_eq!(TableKind::screen_height(phase).phase(), phase);
    }
    assert_eq!(TableKind::screen_height(Phase::Landing), TableKind::Landing15m);
}
