//! Ergonomic re-exports for consumers of the kernel.

pub use crate::assert::{InvariantError, InvariantErrorExt, invariant, require_some};
pub use crate::config::{ConfigError, ConfigErrorExt, load_config, load_rules};
pub use crate::id::{IdError, IdErrorExt, TaggedId};
pub use crate::safe_id;
pub use gate_domain::config::{IntakePolicy, RulesConfig};
pub use gate_domain::constants;
pub use gate_domain::rules::{CharClasses, LengthBounds};
