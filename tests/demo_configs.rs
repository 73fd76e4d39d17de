//! Demo Config Integration Tests
//!
//! Every config under `demos/` must load, validate and fold.

use hyperfold::config::load_config;
use hyperfold::{Hyperspace, Kind, Transform};
use std::path::Path;

/// Load, validate and build a demo config
fn build_demo(filename: &str) -> Hyperspace {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(filename);
    let config = load_config(&path).unwrap_or_else(|e| panic!("Failed to load {filename}: {e}"));
    config.build().unwrap_or_else(|e| panic!("Failed to build {filename}: {e}"))
}

#[test]
fn demo_gradient_boosting() {
    let hs = build_demo("gradient_boosting.yaml");
    assert_eq!(hs.n_dims(), 5);
    assert_eq!(hs.len(), 32);
    let kinds: Vec<Kind> = hs.lows().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![Kind::Integer, Kind::Real, Kind::Integer, Kind::Integer, Kind::Integer]);
}

#[test]
fn demo_styblinski_tang() {
    let hs = build_demo("styblinski_tang.yaml");
    assert_eq!(hs.len(), 16);
    for space in hs.iter() {
        for (i, bounds) in space.bounds().into_iter().enumerate() {
            let expected = if space.uses_low(i) { (-5.0, 0.0) } else { (0.0, 5.0) };
            assert_eq!(bounds, Some(expected));
        }
        assert!(space.dimensions().iter().all(|d| d.transform() == Transform::Normalize));
    }
}

#[test]
fn demo_mixed_json() {
    let hs = build_demo("mixed.json");
    assert_eq!(hs.len(), 16);
    let transforms: Vec<Transform> = hs.highs().iter().map(|d| d.transform()).collect();
    assert_eq!(
        transforms,
        vec![Transform::Identity, Transform::Normalize, Transform::Onehot, Transform::Identity]
    );
    assert_eq!(hs.highs()[2].categories().map(<[_]>::len), Some(1));
}
