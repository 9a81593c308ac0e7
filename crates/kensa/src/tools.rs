//! Tool Calls - Validated requests from a protocol boundary
//!
//! Protocol servers turn their wire arguments into a [`ToolCall`]; the
//! constructors reject calls that must never reach the engine.

use crate::domain::{FocusArea, RuleSet, ToolError};
use crate::engine::{self, DEFAULT_TARGET_MODEL};
use crate::report;

pub const VALIDATE_PROMPT: &str = "validate_prompt";
pub const ANALYZE_PROMPT_QUALITY: &str = "analyze_prompt_quality";
pub const GET_OPTIMIZATION_SUGGESTIONS: &str = "get_optimization_suggestions";

/// A tool invocation whose arguments have been checked.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    ValidatePrompt {
        prompt: String,
        rules: RuleSet,
        model: String,
    },
    AnalyzePromptQuality {
        prompt: String,
    },
    GetOptimizationSuggestions {
        prompt: String,
        focus: FocusArea,
    },
}

fn require_prompt(prompt: Option<String>) -> Result<String, ToolError> {
    match prompt {
        Some(prompt) if !prompt.is_empty() => Ok(prompt),
        _ => Err(ToolError::MissingPrompt),
    }
}

impl ToolCall {
    /// `validate_prompt`: rules default to `auto_optimize`, model to "general".
    pub fn validate(
        prompt: Option<String>,
        rules: Option<Vec<String>>,
        model: Option<String>,
    ) -> Result<Self, ToolError> {
        Ok(ToolCall::ValidatePrompt {
            prompt: require_prompt(prompt)?,
            rules: rules.map(RuleSet::parse).unwrap_or_default(),
            model: model.unwrap_or_else(|| DEFAULT_TARGET_MODEL.to_string()),
        })
    }

    /// `analyze_prompt_quality`
    pub fn analyze(prompt: Option<String>) -> Result<Self, ToolError> {
        Ok(ToolCall::AnalyzePromptQuality {
            prompt: require_prompt(prompt)?,
        })
    }

    /// `get_optimization_suggestions`: focus defaults to all areas.
    pub fn suggest(prompt: Option<String>, focus_area: Option<String>) -> Result<Self, ToolError> {
        let prompt = require_prompt(prompt)?;
        let focus = focus_area
            .map(|area| area.parse::<FocusArea>())
            .transpose()
            .map_err(ToolError::invalid_arguments)?
            .unwrap_or_default();
        Ok(ToolCall::GetOptimizationSuggestions { prompt, focus })
    }

    /// Wire name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::ValidatePrompt { .. } => VALIDATE_PROMPT,
            ToolCall::AnalyzePromptQuality { .. } => ANALYZE_PROMPT_QUALITY,
            ToolCall::GetOptimizationSuggestions { .. } => GET_OPTIMIZATION_SUGGESTIONS,
        }
    }

    /// Run the call and render its report.
    pub fn execute(&self) -> String {
        match self {
            ToolCall::ValidatePrompt {
                prompt,
                rules,
                model,
            } => {
                let result = engine::engineer(prompt, rules, model);
                tracing::info!(
                    "Validated prompt with {} rules applied",
                    result.rules_applied.len()
                );
                report::render_validation_report(&result)
            }
            ToolCall::AnalyzePromptQuality { prompt } => {
                let analysis = engine::analyze(prompt);
                tracing::info!(
                    "Analyzed prompt quality: {:.2} clarity score",
                    analysis.clarity_score
                );
                report::render_quality_report(&analysis)
            }
            ToolCall::GetOptimizationSuggestions { prompt, focus } => {
                let suggestions = engine::suggest(prompt, *focus);
                tracing::info!("Generated {} optimization suggestions", suggestions.len());
                report::render_suggestions_report(*focus, &suggestions)
            }
        }
    }
}
