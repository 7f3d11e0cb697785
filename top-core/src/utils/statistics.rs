#[cfg(test)]
#[path = "../../tests/unit/utils/statistics_test.rs"]
mod statistics_test;

use crate::utils::{compare_floats, Float};

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[Float]) -> Float {
    if values.is_empty() {
        0.
    } else {
        let sum: Float = values.iter().sum();
        sum / values.len() as Float
    }
}

/// Gets mean of values using given iterator.
pub fn get_mean_iter<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    let (sum, count) = values.fold((0., 0), |(sum, count), item| (sum + item, count + 1));

    if count == 0 {
        0.
    } else {
        sum / count as Float
    }
}

/// Returns sample standard deviation (with Bessel's correction).
/// A sample with less than two values has zero deviation.
pub fn get_sample_stdev(values: &[Float]) -> Float {
    if values.len() < 2 {
        return 0.;
    }

    let mean = get_mean_slice(values);
    let sum_squares: Float = values.iter().map(|v| (v - mean) * (v - mean)).sum();

    (sum_squares / (values.len() - 1) as Float).sqrt()
}

/// Returns min and max values of the slice or `None` when slice is empty.
pub fn get_min_max(values: &[Float]) -> Option<(Float, Float)> {
    let min = values.iter().copied().min_by(|a, b| compare_floats(*a, *b))?;
    let max = values.iter().copied().max_by(|a, b| compare_floats(*a, *b))?;

    Some((min, max))
}
