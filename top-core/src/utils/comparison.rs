use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is considered as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether `value` is considered equal to `target` within non-negative `tolerance`.
/// Zero tolerance means exact comparison.
#[inline]
pub fn is_within_tolerance(value: Float, target: Float, tolerance: Float) -> bool {
    if tolerance > 0. {
        (target - value).abs() <= tolerance
    } else {
        compare_floats(value, target) == Ordering::Equal
    }
}
