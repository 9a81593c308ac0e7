//! RuleName - The closed set of rewriting rules

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named prompt transformation.
///
/// `AutoOptimize` is a sentinel: it never transforms text itself, it lets
/// the analysis decide which of the other rules fire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleName {
    ExpertSystem,
    ChainOfThought,
    FewShot,
    RolePlay,
    StructuredOutput,
    ModelOptimize,
    EnhanceClarity,
    AddTesting,
    AutoOptimize,
}

impl RuleName {
    /// Every rule, in pipeline order, followed by the sentinel.
    pub const ALL: [RuleName; 9] = [
        RuleName::ExpertSystem,
        RuleName::ChainOfThought,
        RuleName::FewShot,
        RuleName::RolePlay,
        RuleName::StructuredOutput,
        RuleName::ModelOptimize,
        RuleName::EnhanceClarity,
        RuleName::AddTesting,
        RuleName::AutoOptimize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::ExpertSystem => "expert_system",
            RuleName::ChainOfThought => "chain_of_thought",
            RuleName::FewShot => "few_shot",
            RuleName::RolePlay => "role_play",
            RuleName::StructuredOutput => "structured_output",
            RuleName::ModelOptimize => "model_optimize",
            RuleName::EnhanceClarity => "enhance_clarity",
            RuleName::AddTesting => "add_testing",
            RuleName::AutoOptimize => "auto_optimize",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| format!("Unknown rule: {}", s))
    }
}
