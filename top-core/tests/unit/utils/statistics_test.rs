use super::*;

parameterized_test! {can_get_sample_stdev, (values, expected), {
    can_get_sample_stdev_impl(values, expected);
}}

can_get_sample_stdev! {
    case01_empty: (vec![], 0.),
    case02_single: (vec![0.7], 0.),
    case03_same: (vec![0.5, 0.5, 0.5], 0.),
    case04_two: (vec![0.8, 1.], 0.1414213562373095),
    case05_many: (vec![2., 4., 4., 4., 5., 5., 7., 9.], 2.138089935299395),
}

fn can_get_sample_stdev_impl(values: Vec<Float>, expected: Float) {
    let result = get_sample_stdev(values.as_slice());

    assert!((result - expected).abs() < 1e-12, "{result} != {expected}");
}

#[test]
fn can_get_mean() {
    assert_eq!(get_mean_slice(&[]), 0.);
    assert_eq!(get_mean_slice(&[0.5, 1., 1.5]), 1.);
    assert_eq!(get_mean_iter(vec![1., 2., 3., 6.].into_iter()), 3.);
    assert_eq!(get_mean_iter(std::iter::empty()), 0.);
}

#[test]
fn can_get_min_max() {
    assert_eq!(get_min_max(&[]), None);
    assert_eq!(get_min_max(&[0.5]), Some((0.5, 0.5)));
    assert_eq!(get_min_max(&[0.9, 1.2, 0.3, 1.]), Some((0.3, 1.2)));
}
