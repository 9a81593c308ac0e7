//! Kensa API Routes
//!
//! - / - Service info
//! - /health - Liveness check
//! - /validate-prompt - Prompt engineering

pub mod health;
pub mod swagger;
pub mod validate;
