//! Prompt Engine
//!
//! Two synchronous stages: the analyzer turns text into signals, the rule
//! pipeline rewrites the text from those signals and the requested rules.
//! Recommendations and the score are derived afterwards.
//!
//! Engineering is not idempotent: feeding an engineered prompt back in with
//! the same rules appends the boilerplate again.

mod advisor;
mod analyzer;
mod catalog;
mod pipeline;

pub use advisor::{assess_model_compatibility, optimization_score, recommend, suggest};
pub use analyzer::analyze;
pub use catalog::{expert_role, few_shot_examples, model_note, OPTIMIZATION_GUIDE};

use crate::domain::{EngineeringResult, RuleSet};

/// Target model label used when the caller names none.
pub const DEFAULT_TARGET_MODEL: &str = "general";

/// Analyze a prompt and rewrite it with the requested rules.
pub fn engineer(prompt: &str, rules: &RuleSet, target_model: &str) -> EngineeringResult {
    let analysis = analyze(prompt);
    let (engineered_prompt, rules_applied) = pipeline::run(prompt, &analysis, rules, target_model);
    let recommendations = recommend(&analysis, rules);
    let optimization_score = optimization_score(&analysis, rules_applied.len());

    tracing::debug!(
        "Engineered prompt for '{}' with {} rules applied",
        target_model,
        rules_applied.len()
    );

    EngineeringResult {
        engineered_prompt,
        original_prompt: prompt.to_string(),
        analysis,
        rules_applied,
        recommendations,
        optimization_score,
        target_model: target_model.to_string(),
    }
}
