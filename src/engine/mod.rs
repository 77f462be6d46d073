//! Assessment engine: state, operations, scoring, classification

mod classify;
mod scoring;
mod state;

pub use state::{Assessment, AssessmentState, Progress};
