//! Scout: quadrant-based assessment scoring engine
//!
//! This library scores a fixed catalog of five-point-scale questions grouped
//! into categories, aggregates them into a two-axis result point, and
//! classifies that point into a named zone with a narrative interpretation.
//! Question catalogs are data (an [`AssessmentDefinition`]), not code: the
//! same engine serves any catalog of axis and supplementary categories.

pub mod catalog;
pub mod engine;
pub mod reporter;
pub mod responses;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single answer on the five-point scale.
///
/// Exactly five discrete values are permitted; anything else is rejected at
/// the conversion boundary with [`EngineError::InvalidRating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Rating {
    StrongNegative,
    Negative,
    Neutral,
    Positive,
    StrongPositive,
}

impl Rating {
    /// All five ratings, lowest to highest.
    pub const ALL: [Rating; 5] = [
        Rating::StrongNegative,
        Rating::Negative,
        Rating::Neutral,
        Rating::Positive,
        Rating::StrongPositive,
    ];

    /// Signed magnitude of this rating (-2..=2).
    pub fn value(self) -> i8 {
        match self {
            Rating::StrongNegative => -2,
            Rating::Negative => -1,
            Rating::Neutral => 0,
            Rating::Positive => 1,
            Rating::StrongPositive => 2,
        }
    }

    /// Short scale label as shown on the rating buttons.
    pub fn label(self) -> &'static str {
        match self {
            Rating::StrongNegative => "--",
            Rating::Negative => "-",
            Rating::Neutral => "0",
            Rating::Positive => "+",
            Rating::StrongPositive => "++",
        }
    }
}

impl TryFrom<i8> for Rating {
    type Error = EngineError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Rating::StrongNegative),
            -1 => Ok(Rating::Negative),
            0 => Ok(Rating::Neutral),
            1 => Ok(Rating::Positive),
            2 => Ok(Rating::StrongPositive),
            other => Err(EngineError::InvalidRating(other)),
        }
    }
}

impl From<Rating> for i8 {
    fn from(rating: Rating) -> i8 {
        rating.value()
    }
}

/// Which chart axis a category's questions feed.
///
/// `Both` folds a supplementary category into both axes; `None` keeps it out
/// of the plotted point while it still counts toward the score totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisTarget {
    X,
    Y,
    Both,
    None,
}

impl AxisTarget {
    pub fn feeds_x(self) -> bool {
        matches!(self, AxisTarget::X | AxisTarget::Both)
    }

    pub fn feeds_y(self) -> bool {
        matches!(self, AxisTarget::Y | AxisTarget::Both)
    }
}

/// A named group of questions whose weighted sum becomes one coordinate of
/// the plotted result (or a supplementary contribution, per `axis_target`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier within the definition
    pub id: String,
    /// Display title (e.g. "Friction to Adopt")
    pub title: String,
    /// Axis this category's questions contribute to
    pub axis_target: AxisTarget,
}

/// One prompt in the catalog. Static per assessment definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier across the entire catalog
    pub id: String,
    /// Category this question is scored under
    pub category_id: String,
    /// Prompt label (display-only)
    pub text: String,
    /// Optional description of the scale's low end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    /// Optional description of the scale's high end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
    /// Multiplier applied to the raw rating when aggregating
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Optional questions are excluded from scoring and completion unless
    /// the respondent explicitly enables them
    #[serde(default)]
    pub optional: bool,
}

fn default_weight() -> f64 {
    1.0
}

/// Named interpretive bucket assigned to a computed result point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub title: String,
    pub description: String,
}

impl Zone {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The four zones of the quadrant convention, keyed by the sign of (x, y).
/// Zero counts as the non-negative branch on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantZones {
    /// x >= 0, y >= 0
    pub high_high: Zone,
    /// x < 0, y >= 0
    pub low_high: Zone,
    /// x >= 0, y < 0
    pub high_low: Zone,
    /// x < 0, y < 0
    pub low_low: Zone,
}

/// Classification convention for a definition. One per definition; the two
/// are never mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Convention {
    /// Sign of x and sign of y independently select one of four zones.
    FourQuadrant { zones: QuadrantZones },
    /// "Opportunity" iff both coordinates are strictly positive.
    BinaryOpportunity { opportunity: Zone, challenging: Zone },
}

/// A complete assessment catalog: categories, questions, and the
/// classification convention. Loaded once, never mutated while scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDefinition {
    /// Short machine name (e.g. "market-scout")
    pub name: String,
    /// Display title
    pub title: String,
    /// X axis label for chart output
    pub x_label: String,
    /// Y axis label for chart output
    pub y_label: String,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    pub convention: Convention,
}

impl AssessmentDefinition {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Questions that must be answered regardless of optional enablement.
    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| !q.optional)
    }

    /// Questions the respondent may toggle in.
    pub fn optional_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.optional)
    }
}

/// The computed result point: two axis coordinates plus the overall
/// score/maximum over every scoreable question (each counted once).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPoint {
    pub x: f64,
    pub y: f64,
    pub total_score: f64,
    pub total_max: f64,
}

/// Per-category subtotal for the breakdown display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub id: String,
    pub title: String,
    pub score: f64,
    pub max: f64,
}

/// Everything the presentation layer needs to display a finished (or
/// partial) assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// What was assessed
    pub subject_name: String,
    /// Definition machine name
    pub definition: String,
    pub point: ResultPoint,
    pub zone: Zone,
    pub categories: Vec<CategoryScore>,
    /// Answered scoreable questions
    pub answered: usize,
    /// Total scoreable questions (required + enabled optional)
    pub total: usize,
    pub complete: bool,
}

/// Engine lifecycle phase, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Empty,
    InProgress,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Empty => write!(f, "empty"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// Precondition violations the engine rejects. The presentation layer is
/// expected to prevent these through its input surface; the engine checks
/// anyway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Operation referenced a question id absent from the active catalog
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    /// Enablement toggled on a question that is not optional
    #[error("question is not optional: {0}")]
    NotOptional(String),
    /// Value outside the five-element discrete rating set
    #[error("invalid rating {0}: must be one of -2, -1, 0, 1, 2")]
    InvalidRating(i8),
}
