//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Analysis: heuristic signals about a prompt
//! - EngineeringResult: rewritten prompt with bookkeeping
//! - ModelCompatibility: advisory fit for a target model

mod analysis;
mod compatibility;
mod engineering_result;

pub use analysis::*;
pub use compatibility::*;
pub use engineering_result::*;
