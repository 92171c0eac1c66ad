use optn::symbolic::ordinal_utils::argsort;

#[test]
fn test_argsort_basic() {
    let window = [3.0, 1.0, 4.0, 2.0];
    let mut idx = [0usize; 4];
    argsort(&window, &mut idx);
    assert_eq!(idx, [1, 3, 0, 2]);
}

#[test]
fn test_argsort_stable_with_ties() {
    let window = [1.0, 2.0, 1.0, 0.0];
    let mut idx = [0usize; 4];
    // Indices of 1.0 are 0 and 2; a stable sort keeps them as 0 then 2.
    argsort(&window, &mut idx);
    assert_eq!(idx, [3, 0, 2, 1]);
}

#[test]
fn test_argsort_all_equal_is_identity() {
    let window = [7.0; 5];
    let mut idx = [0usize; 5];
    argsort(&window, &mut idx);
    assert_eq!(idx, [0, 1, 2, 3, 4]);
}

#[test]
fn test_argsort_empty() {
    let window: [f64; 0] = [];
    let mut idx: [usize; 0] = [];
    argsort(&window, &mut idx);
}

#[test]
fn test_argsort_nan() {
    let window = [1.0, f64::NAN, 0.0];
    let mut idx = [0usize; 3];
    // NaN sorts after everything
    argsort(&window, &mut idx);
    assert_eq!(idx, [2, 0, 1]);
}
