//! Engine-wide properties checked over a small corpus of prompts.

use kensa::{analyze, engineer, optimization_score, RuleName, RuleSet};

const PROMPTS: &[&str] = &[
    "",
    "Hi",
    "How do I implement a binary search?",
    "Why does my code crash? How can I debug it?",
    "Write a product description for a standing desk, for example one that targets remote workers",
    "Analyze the quarterly sales data and compare regions; the report must be under two pages",
    "Design a clean onboarding interface for a budgeting app with three steps and a summary screen at the end",
    "   lots   of    whitespace   between   words   ",
    "¿Cómo se escribe código limpio en Rust? Explica por qué importa.",
];

fn position(rule: RuleName) -> usize {
    RuleName::ALL
        .iter()
        .position(|candidate| *candidate == rule)
        .unwrap()
}

#[test]
fn test_analysis_bounds_and_thresholds() {
    for prompt in PROMPTS {
        let analysis = analyze(prompt);
        assert!(
            (0.0..=1.0).contains(&analysis.clarity_score),
            "clarity out of range for {:?}",
            prompt
        );
        assert_eq!(analysis.has_context, analysis.word_count > 10, "{:?}", prompt);
        assert_eq!(
            analysis.needs_examples,
            analysis.question_count > 0 && analysis.word_count < 20,
            "{:?}",
            prompt
        );
        assert_eq!(analysis, analyze(prompt));
    }
    assert_eq!(analyze("").clarity_score, 0.0);
}

#[test]
fn test_no_rules_is_pass_through() {
    for prompt in PROMPTS {
        let result = engineer(prompt, &RuleSet::empty(), "gpt-4");
        assert!(result.rules_applied.is_empty());
        assert_eq!(result.engineered_prompt, *prompt);
        assert_eq!(result.original_prompt, *prompt);
    }
}

#[test]
fn test_rules_applied_follow_pipeline_order() {
    let everything: RuleSet = RuleName::ALL.into_iter().collect();
    for prompt in PROMPTS {
        for rules in [RuleSet::default(), everything.clone()] {
            let result = engineer(prompt, &rules, "claude");
            let positions: Vec<usize> = result.rules_applied.iter().map(|r| position(*r)).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(positions, sorted, "{:?}", prompt);
            assert!(!result.rules_applied.contains(&RuleName::AutoOptimize));
            assert!((0.0..=1.0).contains(&result.optimization_score));
        }
    }
}

#[test]
fn test_auto_optimize_never_implies_explicit_only_rules() {
    for prompt in PROMPTS {
        let result = engineer(prompt, &RuleSet::default(), "claude");
        assert!(!result.rules_applied.contains(&RuleName::ModelOptimize));
        assert!(!result.rules_applied.contains(&RuleName::AddTesting));
        assert_eq!(result.rules_applied.first(), Some(&RuleName::ExpertSystem));
    }
}

#[test]
fn test_score_monotonic_in_rule_count() {
    for prompt in PROMPTS {
        let analysis = analyze(prompt);
        let scores: Vec<f64> = (0..=10).map(|n| optimization_score(&analysis, n)).collect();
        assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]), "{:?}", prompt);
        assert!((scores[10] - scores[5]).abs() < 1e-9);
    }
}

#[test]
fn test_reengineering_grows_the_prompt() {
    let first = engineer("How do I implement a binary search?", &RuleSet::default(), "general");
    let second = engineer(&first.engineered_prompt, &RuleSet::default(), "general");
    assert!(second.engineered_prompt.len() > first.engineered_prompt.len());
}
