//! The analysis module turns loaded results into per instance winners and corpus statistics.
//!
//! Data flows one way: each [`ResultRecord`](crate::models::ResultRecord) is normalized against
//! its instance baseline, normalized results of one instance are passed to the selector which
//! picks a winner using [`PriorityOrder`](crate::models::PriorityOrder), and all selections are
//! folded into algorithm statistics by the aggregator.

mod aggregator;
pub use self::aggregator::*;

mod gaps;
pub use self::gaps::*;

mod normalizer;
pub use self::normalizer::*;

mod selector;
pub use self::selector::*;
