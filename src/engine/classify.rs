//! Zone classification
//!
//! Pure mapping from a result point to a named zone. The tie-break is
//! fixed: a coordinate of exactly 0 takes the non-negative branch in the
//! four-quadrant convention, and fails the strictly-positive check in the
//! binary convention. The chart boundary and the narrative text use the
//! same rule.

use crate::{Convention, ResultPoint, Zone};

impl Convention {
    /// Classify a result point into this convention's zone.
    pub fn classify(&self, point: ResultPoint) -> &Zone {
        match self {
            Convention::FourQuadrant { zones } => match (point.x >= 0.0, point.y >= 0.0) {
                (true, true) => &zones.high_high,
                (false, true) => &zones.low_high,
                (true, false) => &zones.high_low,
                (false, false) => &zones.low_low,
            },
            Convention::BinaryOpportunity {
                opportunity,
                challenging,
            } => {
                if point.x > 0.0 && point.y > 0.0 {
                    opportunity
                } else {
                    challenging
                }
            }
        }
    }
}
