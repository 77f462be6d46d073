//! Response file loading
//!
//! A response file is the batch equivalent of a respondent session: subject
//! name, optional enablement, and raw ratings. It is replayed through the
//! engine's operations so the engine contract, not the deserializer, rejects
//! unknown questions and out-of-range values.

use crate::catalog;
use crate::engine::Assessment;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Definition used when neither the file nor the CLI names one.
pub const DEFAULT_DEFINITION: &str = "market-scout";

/// On-disk response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFile {
    /// What is being assessed; must be non-empty after trimming
    pub subject_name: String,
    /// Definition name or path; CLI `--definition` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Question id -> raw rating (-2..=2)
    #[serde(default)]
    pub ratings: BTreeMap<String, i8>,
    /// Optional question ids the respondent toggled in
    #[serde(default)]
    pub enabled_optional: Vec<String>,
}

/// Read and parse a response file.
pub fn load(path: &Path) -> Result<ResponseFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in responses: {}", path.display()))
}

/// Build a session from a response file, replaying every entry through the
/// engine's operations.
pub fn open_assessment(file: &ResponseFile, cli_definition: Option<&str>) -> Result<Assessment> {
    let spec = cli_definition
        .or(file.definition.as_deref())
        .unwrap_or(DEFAULT_DEFINITION);
    let definition = catalog::load_definition(spec)?;

    let mut assessment = Assessment::new(definition);
    assessment.set_subject_name(&file.subject_name);
    if assessment.subject_name().is_empty() {
        anyhow::bail!("subjectName must not be empty");
    }

    // Enablement first: ratings on optional questions are only meaningful
    // once the question is in the scoreable set.
    for id in &file.enabled_optional {
        assessment
            .set_optional_enabled(id, true)
            .with_context(|| format!("enabledOptional entry '{}'", id))?;
    }
    for (id, value) in &file.ratings {
        assessment
            .set_rating_raw(id, *value)
            .with_context(|| format!("rating for '{}'", id))?;
    }

    Ok(assessment)
}

/// Blank response template for a definition: every required question rated
/// 0, no optional questions enabled.
pub fn template(definition_name: &str) -> Result<String> {
    let definition = catalog::load_definition(definition_name)?;
    let file = ResponseFile {
        subject_name: String::new(),
        definition: Some(definition.name.clone()),
        ratings: definition
            .required_questions()
            .map(|q| (q.id.clone(), 0))
            .collect(),
        enabled_optional: Vec::new(),
    };
    serde_json::to_string_pretty(&file).context("Failed to serialize template")
}
