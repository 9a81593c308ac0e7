//! ModelCompatibility - Advisory fit between a prompt and a target model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelCompatibility {
    /// Fit score in [0, 1]
    pub score: f64,
    pub notes: Vec<String>,
    pub optimizations: Vec<String>,
}
