//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod focus_area;
mod rule_name;
mod rule_set;

pub use focus_area::*;
pub use rule_name::*;
pub use rule_set::*;
