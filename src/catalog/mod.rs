//! Assessment definition loading and validation

pub mod builtin;

use crate::AssessmentDefinition;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Structural problems in an assessment definition. All are caught before
/// the engine ever sees the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("definition has no questions")]
    EmptyCatalog,
    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),
    #[error("duplicate category id: {0}")]
    DuplicateCategoryId(String),
    #[error("question {question} references unknown category: {category}")]
    UnknownCategory { question: String, category: String },
    #[error("question {0} has non-positive weight")]
    NonPositiveWeight(String),
    #[error("no required questions feed the {0} axis")]
    NoAxisQuestions(&'static str),
}

/// Resolve a definition spec: a built-in name first, then a JSON file path.
pub fn load_definition(spec: &str) -> Result<AssessmentDefinition> {
    if let Some(definition) = builtin::by_name(spec) {
        return Ok(definition);
    }
    let path = Path::new(spec);
    if path.exists() {
        return load_definition_file(path);
    }
    anyhow::bail!(
        "unknown definition '{}' (expected one of: {}, or a path to a JSON definition file)",
        spec,
        builtin::NAMES.join(", ")
    );
}

/// Load and validate a definition from a JSON file.
pub fn load_definition_file(path: &Path) -> Result<AssessmentDefinition> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition: {}", path.display()))?;
    let definition: AssessmentDefinition = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in definition: {}", path.display()))?;
    validate(&definition)
        .with_context(|| format!("Invalid definition: {}", path.display()))?;
    Ok(definition)
}

/// Check the structural invariants of a definition.
pub fn validate(definition: &AssessmentDefinition) -> Result<(), DefinitionError> {
    if definition.questions.is_empty() {
        return Err(DefinitionError::EmptyCatalog);
    }

    let mut category_ids = HashSet::new();
    for category in &definition.categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(DefinitionError::DuplicateCategoryId(category.id.clone()));
        }
    }

    let mut question_ids = HashSet::new();
    for question in &definition.questions {
        if !question_ids.insert(question.id.as_str()) {
            return Err(DefinitionError::DuplicateQuestionId(question.id.clone()));
        }
        if !category_ids.contains(question.category_id.as_str()) {
            return Err(DefinitionError::UnknownCategory {
                question: question.id.clone(),
                category: question.category_id.clone(),
            });
        }
        if !(question.weight > 0.0) {
            return Err(DefinitionError::NonPositiveWeight(question.id.clone()));
        }
    }

    // Every definition must be plottable without optional questions.
    let feeds = |axis_x: bool| {
        definition.required_questions().any(|q| {
            definition
                .category(&q.category_id)
                .map(|c| {
                    if axis_x {
                        c.axis_target.feeds_x()
                    } else {
                        c.axis_target.feeds_y()
                    }
                })
                .unwrap_or(false)
        })
    };
    if !feeds(true) {
        return Err(DefinitionError::NoAxisQuestions("x"));
    }
    if !feeds(false) {
        return Err(DefinitionError::NoAxisQuestions("y"));
    }

    Ok(())
}
