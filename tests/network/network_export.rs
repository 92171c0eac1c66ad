use approx::assert_abs_diff_eq;
use ndarray::array;
use optn::network::{ExportedNetwork, ordinal_pattern_network};

#[test]
fn export_uses_labels() {
    let series = array![1.0, 3.0, 2.0, 4.0, 2.0, 3.0, 1.0, 4.0];
    let exported = ordinal_pattern_network(&series, 2, 1).unwrap().export();
    assert_eq!(exported.vertices, vec!["(0, 1)", "(1, 0)"]);
    assert_eq!(exported.edges.len(), 2);
    assert_eq!(exported.edges[0].source, "(0, 1)");
    assert_eq!(exported.edges[0].target, "(1, 0)");
    assert_abs_diff_eq!(exported.edges[0].weight, 0.5, epsilon = 1e-12);
}

#[test]
fn export_survives_json() {
    let series = crate::test_helpers::generate_gaussian_noise(400, 0.0, 1.0, 1);
    let exported = ordinal_pattern_network(&series, 3, 1).unwrap().export();
    let json = serde_json::to_string(&exported).unwrap();
    let back: ExportedNetwork = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertices, exported.vertices);
    assert_eq!(back.edges.len(), exported.edges.len());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["vertices"].is_array());
    assert!(value["edges"][0]["weight"].is_number());
}
