//! EngineeringResult - Output of one engine run

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Analysis;
use crate::domain::RuleName;

/// Rewritten prompt plus the bookkeeping that explains it.
///
/// Built fresh per call and handed back to the caller; nothing keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EngineeringResult {
    pub engineered_prompt: String,
    /// Input prompt, unchanged
    pub original_prompt: String,
    pub analysis: Analysis,
    /// Rules whose effect was applied, in pipeline order
    pub rules_applied: Vec<RuleName>,
    pub recommendations: Vec<String>,
    /// Overall score in [0, 1]
    pub optimization_score: f64,
    /// Echo of the requested target model
    pub target_model: String,
}
