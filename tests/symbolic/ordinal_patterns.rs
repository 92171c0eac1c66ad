use ndarray::{Array1, array};
use optn::error::OptnError;
use optn::symbolic::{OrdinalEncoder, Pattern, ordinal_patterns};
use optn::traits::Symbolizer;

fn pats(v: &[[usize; 2]]) -> Vec<Pattern> {
    v.iter().map(|p| Pattern::from(*p)).collect()
}

#[test]
fn alternating_series_order_two() {
    let series = array![1.0, 3.0, 2.0, 4.0, 2.0, 3.0, 1.0, 4.0];
    let patterns = ordinal_patterns(&series, 2, 1).unwrap();
    let expected = pats(&[[0, 1], [1, 0], [0, 1], [1, 0], [0, 1], [1, 0], [0, 1]]);
    assert_eq!(patterns, expected);
}

#[test]
fn delayed_windows_with_ties() {
    // Windows (τ=2): [4,3,2], [1,1,5], [3,2,0], [1,5,2]
    let series = array![4.0, 1.0, 3.0, 1.0, 2.0, 5.0, 0.0, 2.0];
    let patterns = ordinal_patterns(&series, 3, 2).unwrap();
    let expected: Vec<Pattern> = vec![
        Pattern::from([2, 1, 0]),
        Pattern::from([0, 1, 2]),
        Pattern::from([2, 1, 0]),
        Pattern::from([0, 2, 1]),
    ];
    assert_eq!(patterns, expected);
}

#[test]
fn dimension_one_is_trivial() {
    let series = array![3.0, -1.0, 2.5, 0.0];
    let patterns = ordinal_patterns(&series, 1, 3).unwrap();
    assert_eq!(patterns.len(), 4);
    assert!(patterns.iter().all(|p| *p == Pattern::from([0])));
    assert_eq!(patterns[0].to_string(), "(0,)");
}

#[test]
fn short_series_gives_empty_sequence() {
    let series = array![1.0, 2.0, 3.0];
    assert!(ordinal_patterns(&series, 4, 1).unwrap().is_empty());
    assert!(ordinal_patterns(&series, 2, 3).unwrap().is_empty());
    assert!(ordinal_patterns(&Array1::<f64>::zeros(0), 2, 1).unwrap().is_empty());
}

#[test]
fn zero_parameters_are_rejected() {
    let series = array![1.0, 2.0, 3.0];
    assert!(matches!(
        ordinal_patterns(&series, 0, 1),
        Err(OptnError::InvalidParameter { name: "embedding dimension", value: 0, .. })
    ));
    assert!(matches!(
        ordinal_patterns(&series, 2, 0),
        Err(OptnError::InvalidParameter { name: "embedding delay", value: 0, .. })
    ));
    assert!(OrdinalEncoder::new(0, 1).is_err());
    assert!(OrdinalEncoder::new(21, 1).is_ok());
}

#[test]
fn encoder_is_deterministic() {
    let series = crate::test_helpers::generate_gaussian_noise(500, 0.0, 1.0, 7);
    let encoder = OrdinalEncoder::new(4, 3).unwrap();
    let a = encoder.symbolize(&series).unwrap();
    let b = encoder.symbolize(&series).unwrap();
    assert_eq!(a.len(), 500 - 9);
    assert_eq!(a, b);
}

#[test]
fn dimension_above_twenty_is_supported() {
    let series = crate::test_helpers::generate_uniform_noise(30, 12);
    let patterns = ordinal_patterns(&series, 21, 1).unwrap();
    assert_eq!(patterns.len(), 10);
    assert!(patterns.iter().all(|p| p.len() == 21));
    let mut sorted = patterns[0].as_slice().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..21).collect::<Vec<_>>());
}
