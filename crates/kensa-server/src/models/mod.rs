//! Kensa API Models
//!
//! - Validation: request/response for prompt engineering
//! - Health: liveness and service info

mod health;
mod validation;

pub use health::*;
pub use validation::*;
