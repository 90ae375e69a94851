#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use value_cell::{AtomicCell, PlainCell};

#[derive(Serialize, Deserialize)]
struct Stats {
    hits: AtomicCell<u64>,
    ratio: AtomicCell<f32>,
    enabled: PlainCell<bool>,
    grade: PlainCell<char>,
}

#[test]
fn cells_serialize_as_their_value() {
    let stats = Stats {
        hits: AtomicCell::new(3),
        ratio: AtomicCell::new(0.5),
        enabled: PlainCell::new(true),
        grade: PlainCell::new('B'),
    };
    stats.hits.increment();

    let json = serde_json::to_string(&stats).unwrap();
    assert_eq!(json, r#"{"hits":4,"ratio":0.5,"enabled":true,"grade":"B"}"#);

    let back: Stats = serde_json::from_str(&json).unwrap();
    assert_eq!(back.hits.get(), 4);
    assert_eq!(back.ratio.get(), 0.5);
    assert!(back.enabled.get());
    assert_eq!(back.grade.get(), 'B');
}

#[test]
fn reference_cells_serialize() {
    let name = String::from("cell");
    let some = AtomicCell::new(Some(&name));
    let none = AtomicCell::<Option<&String>>::default();
    assert_eq!(serde_json::to_string(&some).unwrap(), r#""cell""#);
    assert_eq!(serde_json::to_string(&none).unwrap(), "null");
}

#[test]
fn rejects_values_of_the_wrong_kind() {
    assert!(serde_json::from_str::<AtomicCell<i8>>("300").is_err());
    assert!(serde_json::from_str::<PlainCell<bool>>("1").is_err());
}
