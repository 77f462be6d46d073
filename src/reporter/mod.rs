//! Output formatting for assessment reports

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
