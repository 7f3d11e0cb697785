/// Alias to a scalar floating type used for profit ratios and statistics.
pub type Float = f64;

/// A tolerance above `1.0` which a profit ratio may reach before it is reported as an anomaly.
pub const RATIO_EPSILON: Float = 1e-9;
