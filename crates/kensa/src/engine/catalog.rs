//! Catalog - Keyword lookup tables and the fixed text each rule inserts
//!
//! Tables are ordered: the first entry whose keywords match wins, so the
//! order below is part of the observable behavior.

use super::analyzer::contains_any;

/// Ordered keyword table mapping keyword sets to a value.
pub(crate) struct KeywordTable(&'static [(&'static [&'static str], &'static str)]);

impl KeywordTable {
    /// First value whose keywords occur in `text` (matched case-insensitively).
    pub(crate) fn lookup(&self, text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        self.0
            .iter()
            .find(|(keywords, _)| contains_any(&lowered, keywords))
            .map(|(_, value)| *value)
    }
}

pub(crate) const EXPERT_ROLES: KeywordTable = KeywordTable(&[
    (
        &["code", "programming", "software", "debug"],
        "a senior software engineer with 10+ years of experience in multiple programming languages and best practices",
    ),
    (
        &["write", "content", "marketing", "copy"],
        "an expert copywriter and content strategist with deep understanding of persuasive writing",
    ),
    (
        &["analyze", "data", "research"],
        "a data analyst and research expert skilled in systematic analysis and insight generation",
    ),
    (
        &["design", "ui", "ux", "interface"],
        "a senior UX/UI designer with expertise in user-centered design and interface optimization",
    ),
    (
        &["business", "strategy", "plan"],
        "a business strategy consultant with extensive experience in strategic planning and execution",
    ),
]);

pub(crate) const FEW_SHOT_EXAMPLES: KeywordTable = KeywordTable(&[
    (
        &["code", "programming"],
        r#"Example 1:
Q: "How do I implement a binary search?"
A: "Here's a clean Python implementation with explanation..."

Example 2:
Q: "Optimize this SQL query"
A: "I'll analyze your query and provide 3 specific optimizations..."
"#,
    ),
    (
        &["write", "content"],
        r#"Example 1:
Q: "Write a product description"
A: "I'll create a compelling description focusing on benefits, features, and emotional appeal..."

Example 2:
Q: "Improve this email"
A: "Here's the enhanced version with better structure and persuasive language..."
"#,
    ),
]);

pub(crate) const MODEL_NOTES: KeywordTable = KeywordTable(&[
    (
        &["gpt"],
        "Note: This prompt is optimized for GPT models. Consider using structured formatting and clear role definitions for best results.",
    ),
    (
        &["claude"],
        "Note: This prompt is optimized for Claude. Leverage its strength in detailed analysis and nuanced reasoning.",
    ),
    (
        &["gemini"],
        "Note: This prompt is optimized for Gemini. Take advantage of its multimodal capabilities and factual accuracy.",
    ),
]);

/// Expert persona description for a prompt, if any domain keyword matches.
pub fn expert_role(prompt: &str) -> Option<&'static str> {
    EXPERT_ROLES.lookup(prompt)
}

/// Domain-specific question/answer pairs for a prompt.
pub fn few_shot_examples(prompt: &str) -> Option<&'static str> {
    FEW_SHOT_EXAMPLES.lookup(prompt)
}

/// Model-specific note for a target model label.
pub fn model_note(target_model: &str) -> Option<&'static str> {
    MODEL_NOTES.lookup(target_model)
}

pub(crate) const EXPERT_PREAMBLE: &str = "You are a world-class prompt engineering expert with extensive knowledge in AI systems, language models, and optimization techniques. Your role is to help users create, analyze, and optimize prompts for maximum effectiveness across different AI models.

Your Core Identity:
- Act as a seasoned practitioner with deep understanding of LLM behavior and capabilities
- Communicate complex strategies with clarity and precision
- Approach optimization systematically and methodically
- Break down advanced techniques into actionable steps

Your communication style should be:
- Technical yet accessible, using industry terminology appropriately
- Evidence-based with references to proven techniques and methodologies
- Focused on iterative refinement and optimization
- Rich with concrete examples from various AI models and use cases

";

pub(crate) const CHAIN_OF_THOUGHT: &str = "\n\nThink through this step-by-step:
1. First, analyze the core challenge or opportunity
2. Consider which prompt engineering methods apply and why
3. Structure your response with clear reasoning
4. Provide concrete, testable examples
5. Explain the rationale behind your approach";

pub(crate) const FEW_SHOT_HEADER: &str = "Here are some examples of excellent responses:";

pub(crate) const RESPONSE_STRUCTURE: &str = "

Structure your response as follows:

🔍 Quick Assessment (1-2 sentences):
Identify the core challenge or opportunity

⚡ Technique Recommendation:
Explain which prompt engineering methods apply and why

💡 Improved Prompt Example:
Provide a concrete, testable prompt the user can copy immediately

🧠 Rationale:
Explain the reasoning behind your approach and technique choices

🔄 Variations & Testing:
Suggest alternative approaches and testing strategies
";

pub(crate) const CLARITY_DIRECTIVE: &str = "\n\nIMPORTANT: Be specific, actionable, and include concrete examples. Avoid vague language and provide step-by-step guidance where applicable.";

pub(crate) const TESTING_GUIDANCE: &str = "

Testing Recommendations:
- A/B test different prompt variations
- Measure response quality against specific success metrics
- Test with different temperature settings
- Validate across multiple model runs for consistency
- Document what works best for similar use cases
";

/// Markdown overview of the rewriting techniques, served to protocol clients.
pub const OPTIMIZATION_GUIDE: &str = "# Prompt Optimization Guide

This server automatically optimizes prompts using:

1. **Expert Identity Injection**: Adds professional expertise context
2. **Chain-of-Thought**: Adds reasoning structure for complex queries
3. **Structured Output**: Organizes responses with clear sections
4. **Domain Expertise**: Applies relevant expert personas
5. **Clarity Enhancement**: Improves specificity and actionability

Use the 'auto_optimize' prompt to automatically enhance any user input.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_priority_order() {
        // "code" and "write" both match; software engineer comes first
        let role = expert_role("Write code for a parser").unwrap();
        assert!(role.starts_with("a senior software engineer"));

        let role = expert_role("Write a blog post").unwrap();
        assert!(role.starts_with("an expert copywriter"));

        let role = expert_role("Research the market").unwrap();
        assert!(role.starts_with("a data analyst"));

        let role = expert_role("Improve the interface").unwrap();
        assert!(role.starts_with("a senior UX/UI designer"));

        let role = expert_role("Draft a business plan").unwrap();
        assert!(role.starts_with("a business strategy consultant"));
    }

    #[test]
    fn test_role_no_match() {
        assert_eq!(expert_role("How do I implement a binary search?"), None);
        assert_eq!(expert_role(""), None);
    }

    #[test]
    fn test_few_shot_lookup() {
        assert!(few_shot_examples("Review my CODE").unwrap().contains("binary search"));
        assert!(few_shot_examples("Some content please").unwrap().contains("product description"));
        assert_eq!(few_shot_examples("How do I implement a binary search?"), None);
    }

    #[test]
    fn test_model_note_lookup() {
        assert!(model_note("gpt-4o").unwrap().contains("GPT models"));
        assert!(model_note("Claude-3.5").unwrap().contains("Claude"));
        assert!(model_note("gemini-pro").unwrap().contains("Gemini"));
        assert_eq!(model_note("general"), None);
    }

    #[test]
    fn test_guide_names_the_auto_prompt() {
        assert!(OPTIMIZATION_GUIDE.starts_with("# Prompt Optimization Guide"));
        assert!(OPTIMIZATION_GUIDE.contains("'auto_optimize' prompt"));
    }
}
