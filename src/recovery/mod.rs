//! Entity recovery: reconstructs declarations, scopes and access levels from
//! raw header lines.

mod patterns;
mod scanner;
mod types;

pub use patterns::{parameter_names, strip_code};
pub use scanner::EntityRecovery;
pub use types::{AccessLevel, Entity, EntityKind, MethodInfo};
