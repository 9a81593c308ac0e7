//! Markdown reports for human readers
//!
//! Used by the MCP tools and the CLI. Formatting only; no analysis happens here.

use crate::domain::{Analysis, EngineeringResult, FocusArea};

fn check(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "✅ Yes"
    } else {
        "❌ No"
    }
}

fn opportunity(flag: bool) -> &'static str {
    if flag {
        "⚡ Yes"
    } else {
        "✅ No"
    }
}

/// Overall grade from the clarity score.
pub fn assessment(clarity_score: f64) -> &'static str {
    if clarity_score > 0.8 {
        "🟢 Excellent"
    } else if clarity_score > 0.6 {
        "🟡 Good"
    } else {
        "🔴 Needs Improvement"
    }
}

/// Full report for one engine run.
pub fn render_validation_report(result: &EngineeringResult) -> String {
    let analysis = &result.analysis;

    let applied = if result.rules_applied.is_empty() {
        "None applied".to_string()
    } else {
        result
            .rules_applied
            .iter()
            .map(|rule| rule.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let recommendations = if result.recommendations.is_empty() {
        "• Prompt is well-optimized!".to_string()
    } else {
        result
            .recommendations
            .iter()
            .map(|rec| format!("• {}", rec))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"# 🚀 AI Validation Results

## 📋 Original Prompt
```
{original}
```

## ⚡ Optimized Prompt
```
{engineered}
```

## 📊 Analysis Summary
- **Length**: {length} characters ({words} words)
- **Clarity Score**: {clarity:.2}/1.0
- **Optimization Score**: {score:.2}/1.0
- **Has Clear Task**: {clear_task}
- **Has Context**: {context}
- **Has Examples**: {examples}

## 🛠️ Applied Optimizations
{applied}

## 💡 Recommendations
{recommendations}

## 🎯 Target Model
Optimized for: {model}

---
*Use the optimized prompt above for best results with your target AI model.*
"#,
        original = result.original_prompt,
        engineered = result.engineered_prompt,
        length = analysis.length,
        words = analysis.word_count,
        clarity = analysis.clarity_score,
        score = result.optimization_score,
        clear_task = check(analysis.has_clear_task),
        context = check(analysis.has_context),
        examples = check(analysis.has_examples),
        applied = applied,
        recommendations = recommendations,
        model = result.target_model,
    )
}

/// Read-only quality report for a prompt analysis.
pub fn render_quality_report(analysis: &Analysis) -> String {
    format!(
        r#"# 🔍 Prompt Quality Analysis

## 📊 Structure Metrics
- **Length**: {length} characters
- **Word Count**: {words} words
- **Clarity Score**: {clarity:.2}/1.0
- **Question Count**: {questions}

## ✅ Quality Indicators
- **Clear Task**: {clear_task}
- **Sufficient Context**: {context}
- **Includes Examples**: {examples}
- **Has Constraints**: {constraints}

## 🎯 Optimization Opportunities
- **Needs Reasoning**: {reasoning}
- **Needs Examples**: {needs_examples}
- **Needs Expertise**: {expertise}
- **Needs Structure**: {structure}

## 🎚️ Overall Assessment
{assessment}

---
*Use the validate_prompt tool to automatically optimize this prompt.*
"#,
        length = analysis.length,
        words = analysis.word_count,
        clarity = analysis.clarity_score,
        questions = analysis.question_count,
        clear_task = yes_no(analysis.has_clear_task),
        context = yes_no(analysis.has_context),
        examples = yes_no(analysis.has_examples),
        constraints = yes_no(analysis.has_constraints),
        reasoning = opportunity(analysis.needs_reasoning),
        needs_examples = opportunity(analysis.needs_examples),
        expertise = opportunity(analysis.needs_expertise),
        structure = opportunity(analysis.needs_structure),
        assessment = assessment(analysis.clarity_score),
    )
}

/// Numbered suggestions plus the fixed quick-fix checklist.
pub fn render_suggestions_report(focus: FocusArea, suggestions: &[String]) -> String {
    let numbered = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| format!("{}. {}", i + 1, suggestion))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# 💡 Optimization Suggestions

## 🎯 Focus Area: {focus}

## 📝 Recommendations
{numbered}

## 🛠️ Quick Fixes
- **Add constraints**: Use words like "must", "should", "requirement"
- **Improve specificity**: Replace vague terms with concrete descriptions
- **Set format**: Specify desired output format (list, table, code, etc.)
- **Define scope**: Clearly state what should and shouldn't be included

## ⚡ Auto-Optimization
Run `validate_prompt` with `auto_optimize` rule for automatic improvements.

---
*These suggestions are based on analysis of your prompt structure and content.*
"#,
        focus = focus.title(),
        numbered = numbered,
    )
}
