//! Advisor - Recommendations, scoring and model fit
//!
//! Everything here reads an analysis (and the requested or applied rules)
//! and never touches the prompt text beyond that.

use super::analyzer::analyze;
use super::catalog;
use crate::domain::{Analysis, FocusArea, ModelCompatibility, RuleName, RuleSet};

const BASE_SCORE: f64 = 0.3;
const CLEAR_TASK_BONUS: f64 = 0.2;
const SIGNAL_BONUS: f64 = 0.1;
const PER_RULE_BONUS: f64 = 0.04;
const MAX_RULE_BONUS: f64 = 0.2;

const BASE_COMPATIBILITY: f64 = 0.8;
const GPT_LONG_PROMPT_CHARS: usize = 8000;
const CLAUDE_LONG_PROMPT_CHARS: usize = 10000;

/// Advisory notes for the caller, in a fixed order. Empty means the prompt
/// is considered adequate.
pub fn recommend(analysis: &Analysis, requested: &RuleSet) -> Vec<String> {
    let mut recommendations = Vec::new();

    if analysis.clarity_score < 0.5 {
        recommendations.push(
            "Consider adding more specific details and context to improve clarity".to_string(),
        );
    }

    if analysis.needs_examples && !analysis.has_examples {
        recommendations.push("Add concrete examples to illustrate your requirements".to_string());
    }

    if analysis.word_count > 20 && !analysis.has_constraints {
        recommendations
            .push("Define clear constraints or requirements for better results".to_string());
    }

    if analysis.needs_structure && !requested.is_requested(RuleName::StructuredOutput) {
        recommendations.push("Enable 'structured_output' rule for better organization".to_string());
    }

    if analysis.needs_reasoning && !requested.is_requested(RuleName::ChainOfThought) {
        recommendations
            .push("Enable 'chain_of_thought' rule for step-by-step reasoning".to_string());
    }

    recommendations
}

/// Score a prompt from its structure and how many rules were applied.
///
/// Never below the base score; clamped at 1.0.
pub fn optimization_score(analysis: &Analysis, rules_applied: usize) -> f64 {
    let mut score = BASE_SCORE;

    if analysis.has_clear_task {
        score += CLEAR_TASK_BONUS;
    }
    for signal in [
        analysis.has_context,
        analysis.has_examples,
        analysis.has_constraints,
    ] {
        if signal {
            score += SIGNAL_BONUS;
        }
    }

    score += (rules_applied as f64 * PER_RULE_BONUS).min(MAX_RULE_BONUS);
    score.min(1.0)
}

/// How well an engineered prompt suits the target model family.
pub fn assess_model_compatibility(prompt: &str, target_model: &str) -> ModelCompatibility {
    let model = target_model.to_lowercase();
    let length = prompt.chars().count();
    let mut compatibility = ModelCompatibility {
        score: BASE_COMPATIBILITY,
        notes: Vec::new(),
        optimizations: Vec::new(),
    };

    if model.contains("gpt") {
        if length > GPT_LONG_PROMPT_CHARS {
            compatibility
                .notes
                .push("Long prompt - consider breaking into smaller chunks".to_string());
            compatibility.score -= 0.1;
        }
        compatibility
            .optimizations
            .push("Well-suited for creative and analytical tasks".to_string());
    } else if model.contains("claude") {
        if length > CLAUDE_LONG_PROMPT_CHARS {
            compatibility
                .notes
                .push("Very long prompt - Claude handles this well".to_string());
        }
        compatibility
            .optimizations
            .push("Excellent for detailed analysis and reasoning".to_string());
    }

    compatibility
}

/// Targeted improvement suggestions for one focus area (or all of them).
pub fn suggest(prompt: &str, focus: FocusArea) -> Vec<String> {
    let analysis = analyze(prompt);
    let mut suggestions = Vec::new();

    if focus.covers(FocusArea::Clarity) && analysis.clarity_score < 0.7 {
        suggestions.push("**Clarity**: Add more specific details and concrete examples".to_string());
    }

    if focus.covers(FocusArea::Structure) && analysis.needs_structure {
        suggestions.push(
            "**Structure**: Use bullet points or numbered lists for complex requests".to_string(),
        );
    }

    if focus.covers(FocusArea::Examples) && analysis.needs_examples {
        suggestions.push(
            "**Examples**: Include sample inputs/outputs to clarify expectations".to_string(),
        );
    }

    if focus.covers(FocusArea::Reasoning) && analysis.needs_reasoning {
        suggestions.push(
            "**Reasoning**: Ask for step-by-step explanations or thought processes".to_string(),
        );
    }

    if focus.covers(FocusArea::Expertise) && analysis.needs_expertise {
        if let Some(role) = catalog::expert_role(prompt) {
            suggestions.push(format!(
                "**Expertise**: Specify that you want response from {}",
                role
            ));
        }
    }

    if suggestions.is_empty() {
        suggestions.push(
            "**Great!** Your prompt is well-structured. Consider using auto_optimize for minor enhancements."
                .to_string(),
        );
    }

    suggestions
}
