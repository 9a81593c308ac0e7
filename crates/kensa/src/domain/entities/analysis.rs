//! Analysis - Heuristic signals computed from a prompt
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed-shape feature record for one prompt.
///
/// Every field is a pure function of the prompt text, so analysing the same
/// text twice yields equal records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Analysis {
    /// Character count
    pub length: usize,
    /// Whitespace-delimited token count
    pub word_count: usize,
    pub has_clear_task: bool,
    pub has_context: bool,
    pub has_examples: bool,
    pub has_constraints: bool,
    /// Number of `?` characters
    pub question_count: usize,
    pub needs_reasoning: bool,
    pub needs_examples: bool,
    pub needs_expertise: bool,
    pub needs_structure: bool,
    /// Share of tokens longer than three characters, in [0, 1]
    pub clarity_score: f64,
}
