//! Assessment state and mutating operations
//!
//! The respondent's in-progress answers live in an explicit
//! [`AssessmentState`] value owned by one session, with every mutation going
//! through the engine's operations. All operations are synchronous and
//! local; repeated ratings on the same question are last-write-wins.

use crate::{AssessmentDefinition, EngineError, Phase, Question, Rating};
use std::collections::{HashMap, HashSet};

/// The respondent's in-progress answers. Created empty, discarded on reset;
/// nothing persists across resets.
#[derive(Debug, Clone, Default)]
pub struct AssessmentState {
    /// Trimmed label for the thing being assessed
    pub subject_name: String,
    /// Question id -> rating; absence means unanswered
    pub ratings: HashMap<String, Rating>,
    /// Optional questions the respondent has toggled in
    pub enabled_optional: HashSet<String>,
}

/// Completion counter for the progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

/// One respondent session: a definition plus the state being filled in.
#[derive(Debug, Clone)]
pub struct Assessment {
    definition: AssessmentDefinition,
    state: AssessmentState,
}

impl Assessment {
    /// Start an empty assessment against a definition.
    pub fn new(definition: AssessmentDefinition) -> Self {
        Self {
            definition,
            state: AssessmentState::default(),
        }
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn subject_name(&self) -> &str {
        &self.state.subject_name
    }

    /// Store the subject name, trimmed. Scoring cannot begin while it is
    /// empty.
    pub fn set_subject_name(&mut self, name: &str) {
        self.state.subject_name = name.trim().to_string();
    }

    /// Upsert a rating. Last write wins; a respondent may change an answer
    /// before submitting.
    pub fn set_rating(&mut self, question_id: &str, rating: Rating) -> Result<(), EngineError> {
        if self.definition.question(question_id).is_none() {
            return Err(EngineError::UnknownQuestion(question_id.to_string()));
        }
        self.state.ratings.insert(question_id.to_string(), rating);
        Ok(())
    }

    /// Upsert a rating from a raw scale value, rejecting values outside the
    /// five-element set.
    pub fn set_rating_raw(&mut self, question_id: &str, value: i8) -> Result<(), EngineError> {
        let rating = Rating::try_from(value)?;
        self.set_rating(question_id, rating)
    }

    /// Toggle an optional question in or out of the scoreable set.
    ///
    /// Disabling removes any existing rating in the same step, so a
    /// disabled question can never leave an orphaned score entry behind.
    /// Enabling never auto-assigns a rating; the question becomes
    /// scoreable-but-unanswered and counts against completion.
    pub fn set_optional_enabled(
        &mut self,
        question_id: &str,
        enabled: bool,
    ) -> Result<(), EngineError> {
        let question = self
            .definition
            .question(question_id)
            .ok_or_else(|| EngineError::UnknownQuestion(question_id.to_string()))?;
        if !question.optional {
            return Err(EngineError::NotOptional(question_id.to_string()));
        }
        if enabled {
            self.state.enabled_optional.insert(question_id.to_string());
        } else {
            self.state.enabled_optional.remove(question_id);
            self.state.ratings.remove(question_id);
        }
        Ok(())
    }

    /// Unconditionally back to the empty state.
    pub fn reset(&mut self) {
        self.state = AssessmentState::default();
    }

    /// Whether a question currently counts toward scoring and completion.
    pub fn is_scoreable(&self, question: &Question) -> bool {
        !question.optional || self.state.enabled_optional.contains(&question.id)
    }

    /// Rating for a question, if answered.
    pub fn rating(&self, question_id: &str) -> Option<Rating> {
        self.state.ratings.get(question_id).copied()
    }

    /// True iff every required question and every currently-enabled
    /// optional question has a rating.
    pub fn is_complete(&self) -> bool {
        self.definition
            .questions
            .iter()
            .filter(|q| self.is_scoreable(q))
            .all(|q| self.state.ratings.contains_key(&q.id))
    }

    /// Answered / total over the scoreable questions.
    pub fn progress(&self) -> Progress {
        let scoreable: Vec<_> = self
            .definition
            .questions
            .iter()
            .filter(|q| self.is_scoreable(q))
            .collect();
        Progress {
            answered: scoreable
                .iter()
                .filter(|q| self.state.ratings.contains_key(&q.id))
                .count(),
            total: scoreable.len(),
        }
    }

    /// Lifecycle phase: `Empty` until a subject name is set, then
    /// `InProgress` until completion.
    pub fn phase(&self) -> Phase {
        if self.state.subject_name.is_empty() {
            Phase::Empty
        } else if self.is_complete() {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn pro() -> Assessment {
        Assessment::new(builtin::market_scout_pro())
    }

    #[test]
    fn set_rating_unknown_question_rejected() {
        let mut a = pro();
        assert_eq!(
            a.set_rating("zz", Rating::Neutral),
            Err(EngineError::UnknownQuestion("zz".to_string()))
        );
    }

    #[test]
    fn set_rating_last_write_wins() {
        let mut a = pro();
        a.set_rating("f1", Rating::StrongNegative).unwrap();
        a.set_rating("f1", Rating::Positive).unwrap();
        assert_eq!(a.rating("f1"), Some(Rating::Positive));
        assert_eq!(a.state().ratings.len(), 1);
    }

    #[test]
    fn set_rating_raw_rejects_out_of_range() {
        let mut a = pro();
        assert_eq!(
            a.set_rating_raw("f1", 7),
            Err(EngineError::InvalidRating(7))
        );
        assert_eq!(a.rating("f1"), None);
    }

    #[test]
    fn toggle_on_required_question_rejected() {
        let mut a = pro();
        assert_eq!(
            a.set_optional_enabled("f1", true),
            Err(EngineError::NotOptional("f1".to_string()))
        );
    }

    #[test]
    fn disabling_optional_removes_rating() {
        let mut a = pro();
        a.set_optional_enabled("o1", true).unwrap();
        a.set_rating("o1", Rating::StrongPositive).unwrap();
        assert_eq!(a.rating("o1"), Some(Rating::StrongPositive));

        a.set_optional_enabled("o1", false).unwrap();
        assert_eq!(a.rating("o1"), None);
        assert!(!a.state().enabled_optional.contains("o1"));
    }

    #[test]
    fn enabling_optional_does_not_auto_rate() {
        let mut a = pro();
        let definition = builtin::market_scout_pro();
        for q in definition.required_questions() {
            a.set_rating(&q.id, Rating::Neutral).unwrap();
        }
        assert!(a.is_complete());

        a.set_optional_enabled("o1", true).unwrap();
        assert!(!a.is_complete(), "enabled optional counts against completion");
        assert_eq!(a.rating("o1"), None);

        a.set_rating("o1", Rating::Neutral).unwrap();
        assert!(a.is_complete());
    }

    #[test]
    fn progress_tracks_scoreable_set() {
        let mut a = pro();
        assert_eq!(a.progress(), Progress { answered: 0, total: 10 });

        a.set_rating("f1", Rating::Positive).unwrap();
        assert_eq!(a.progress(), Progress { answered: 1, total: 10 });

        a.set_optional_enabled("o1", true).unwrap();
        assert_eq!(a.progress(), Progress { answered: 1, total: 11 });
    }

    #[test]
    fn phase_transitions() {
        let mut a = Assessment::new(builtin::market_scout());
        assert_eq!(a.phase(), Phase::Empty);

        a.set_subject_name("  Enterprise VR Headsets  ");
        assert_eq!(a.subject_name(), "Enterprise VR Headsets");
        assert_eq!(a.phase(), Phase::InProgress);

        for q in builtin::market_scout().questions {
            a.set_rating(&q.id, Rating::Positive).unwrap();
        }
        assert_eq!(a.phase(), Phase::Complete);

        a.reset();
        assert_eq!(a.phase(), Phase::Empty);
        assert!(a.state().ratings.is_empty());
        assert!(a.subject_name().is_empty());
    }

    #[test]
    fn whitespace_subject_name_stays_empty() {
        let mut a = Assessment::new(builtin::market_scout());
        a.set_subject_name("   ");
        assert_eq!(a.phase(), Phase::Empty);
    }
}
