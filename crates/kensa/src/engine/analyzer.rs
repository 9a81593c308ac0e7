//! Analyzer - Prompt text to heuristic signals
//!
//! Keyword checks are plain substring matches against the lower-cased
//! prompt, so "however" counts as "how" and "codebase" as "code".

use crate::domain::Analysis;

const CLEAR_TASK_MARKERS: &[&str] = &["analyze", "create", "explain", "generate", "write", "help"];
const EXAMPLE_MARKERS: &[&str] = &["example", "for instance"];
const CONSTRAINT_MARKERS: &[&str] = &["must", "should", "requirement", "constraint", "limit"];
const REASONING_MARKERS: &[&str] = &["why", "how", "explain", "analyze", "compare"];
const EXPERTISE_MARKERS: &[&str] = &[
    "code",
    "technical",
    "programming",
    "engineering",
    "scientific",
    "medical",
    "legal",
];

/// Prompts with more words than this carry their own context.
const CONTEXT_MIN_WORDS: usize = 10;
/// Short questions (below this many words) benefit from examples.
const EXAMPLES_MAX_WORDS: usize = 20;
/// Prompts longer than this need a response structure.
const STRUCTURE_MIN_WORDS: usize = 30;
const STRUCTURE_MIN_QUESTIONS: usize = 2;
/// Tokens longer than this count towards clarity.
const CLEAR_WORD_MIN_CHARS: usize = 3;
/// Denominator floor for the clarity ratio.
const CLARITY_MIN_WORDS: usize = 10;

/// True when any marker occurs in the (already lower-cased) text.
pub(crate) fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}

/// Compute the analysis record for a prompt. Total on any input.
pub fn analyze(prompt: &str) -> Analysis {
    let lowered = prompt.to_lowercase();
    let words: Vec<&str> = prompt.split_whitespace().collect();
    let word_count = words.len();
    let question_count = prompt.matches('?').count();

    let clear_words = words
        .iter()
        .filter(|word| word.chars().count() > CLEAR_WORD_MIN_CHARS)
        .count();
    let clarity_score =
        (clear_words as f64 / word_count.max(CLARITY_MIN_WORDS) as f64).min(1.0);

    Analysis {
        length: prompt.chars().count(),
        word_count,
        has_clear_task: contains_any(&lowered, CLEAR_TASK_MARKERS),
        has_context: word_count > CONTEXT_MIN_WORDS,
        has_examples: contains_any(&lowered, EXAMPLE_MARKERS),
        has_constraints: contains_any(&lowered, CONSTRAINT_MARKERS),
        question_count,
        needs_reasoning: contains_any(&lowered, REASONING_MARKERS),
        needs_examples: question_count > 0 && word_count < EXAMPLES_MAX_WORDS,
        needs_expertise: contains_any(&lowered, EXPERTISE_MARKERS),
        needs_structure: word_count > STRUCTURE_MIN_WORDS
            || question_count > STRUCTURE_MIN_QUESTIONS,
        clarity_score,
    }
}
