//! Kensa Domain Library
//!
//! Rule-based prompt analysis and rewriting. Given a raw prompt, Kensa
//! computes heuristic signals about it and, driven by those signals and the
//! requested rules, emits an engineered prompt with recommendations and a
//! score.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types
//!   - `entities/`: Analysis, EngineeringResult, ModelCompatibility
//!   - `value_objects/`: RuleName, RuleSet, FocusArea
//!   - `errors/`: Tool boundary errors
//!
//! - **Engine** (`engine/`): Analyzer, rule pipeline, recommendations and scoring
//!
//! - **Report** (`report`): Markdown rendering for humans
//!
//! - **Tools** (`tools`): Validated tool calls for protocol servers
//!
//! Everything is synchronous and side-effect free; concurrent callers need
//! no coordination.
//!
//! # Usage
//!
//! ```rust
//! use kensa::{engineer, RuleName, RuleSet};
//!
//! let result = engineer("How do I implement a binary search?", &RuleSet::default(), "general");
//! assert_eq!(result.rules_applied[0], RuleName::ExpertSystem);
//! ```

pub mod domain;
pub mod engine;
pub mod report;
pub mod tools;

// Re-export commonly used types
pub use domain::{
    Analysis, EngineeringResult, FocusArea, ModelCompatibility, RuleName, RuleSet, ToolError,
};
pub use engine::{
    analyze, assess_model_compatibility, engineer, optimization_score, recommend, suggest,
    DEFAULT_TARGET_MODEL, OPTIMIZATION_GUIDE,
};
pub use tools::ToolCall;
