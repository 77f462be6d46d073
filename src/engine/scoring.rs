//! Result computation over the scoreable question set
//!
//! A missing rating contributes 0 to the score but its question still
//! counts toward the maximum, so a partial result is always defined.
//! Completion gating is the caller's job (`is_complete`); the two are
//! deliberately decoupled.

use super::state::Assessment;
use crate::{AssessmentReport, AxisTarget, CategoryScore, ResultPoint};

/// Maximum magnitude of a rating; `2 * weight` is a question's score range.
const MAX_MAGNITUDE: f64 = 2.0;

impl Assessment {
    /// Compute the result point from the current state.
    ///
    /// Each axis sums `rating * weight` over the scoreable questions whose
    /// category feeds that axis. `total_score` / `total_max` count every
    /// scoreable question exactly once, even when its category is folded
    /// into both axes.
    pub fn compute_result(&self) -> ResultPoint {
        let mut point = ResultPoint {
            x: 0.0,
            y: 0.0,
            total_score: 0.0,
            total_max: 0.0,
        };

        for question in &self.definition().questions {
            if !self.is_scoreable(question) {
                continue;
            }
            let target = self
                .definition()
                .category(&question.category_id)
                .map(|c| c.axis_target)
                .unwrap_or(AxisTarget::None);
            let contribution = self
                .rating(&question.id)
                .map(|r| f64::from(r.value()))
                .unwrap_or(0.0)
                * question.weight;

            if target.feeds_x() {
                point.x += contribution;
            }
            if target.feeds_y() {
                point.y += contribution;
            }
            point.total_score += contribution;
            point.total_max += MAX_MAGNITUDE * question.weight;
        }

        point
    }

    /// Per-category subtotals over the scoreable questions, in definition
    /// order.
    pub fn category_scores(&self) -> Vec<CategoryScore> {
        self.definition()
            .categories
            .iter()
            .map(|category| {
                let mut score = 0.0;
                let mut max = 0.0;
                for question in &self.definition().questions {
                    if question.category_id != category.id || !self.is_scoreable(question) {
                        continue;
                    }
                    score += self
                        .rating(&question.id)
                        .map(|r| f64::from(r.value()))
                        .unwrap_or(0.0)
                        * question.weight;
                    max += MAX_MAGNITUDE * question.weight;
                }
                CategoryScore {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    score,
                    max,
                }
            })
            .collect()
    }

    /// Build the full report consumed by the presentation layer.
    pub fn report(&self) -> AssessmentReport {
        let point = self.compute_result();
        let progress = self.progress();
        AssessmentReport {
            subject_name: self.subject_name().to_string(),
            definition: self.definition().name.clone(),
            zone: self.definition().convention.classify(point).clone(),
            categories: self.category_scores(),
            answered: progress.answered,
            total: progress.total,
            complete: self.is_complete(),
            point,
        }
    }
}
