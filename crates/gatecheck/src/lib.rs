//! Facade crate for Gatecheck features and shared modules.
//! Re-exports domain/kernel primitives and aggregates the validation slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `gatecheck` as a dependency and pull validators from [`features`].
//! - Call [`admit`] for the full draft-to-admission pipeline with rules loaded
//!   from `gatecheck.toml`/`GATE__*` environment overrides.

pub use gate_domain as domain;
pub use gate_kernel as kernel;
pub use gate_logger as logger;

use gate_intake::{Admission, SignupDraft};
use gate_kernel::config::load_rules;
use std::path::Path;

/// Feature registry for runtime introspection.
pub mod features {
    pub use gate_conn as conn;
    pub use gate_credentials as credentials;
    pub use gate_intake as intake;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["credentials", "intake", "conn"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Runs the full admission pipeline with rules from the default config sources.
///
/// Looks for an optional `gatecheck.*` config file in the working directory and
/// applies `GATE__`-prefixed environment overrides, then delegates to
/// [`gate_intake::admit`].
///
/// # Errors
/// Returns an error if the rules cannot be loaded or if the draft fails
/// assembly or validation.
pub fn admit(draft: SignupDraft) -> Result<Admission, Box<dyn std::error::Error>> {
    let rules = load_rules(None::<&Path>)?;
    let admission = gate_intake::admit(draft, &rules)?;
    Ok(admission)
}

/// Like [`admit`], but with an explicit config file.
///
/// # Errors
/// Returns an error if the file is absent or malformed, or if the draft fails
/// assembly or validation.
pub fn admit_with_config(
    draft: SignupDraft,
    config_path: impl AsRef<Path>,
) -> Result<Admission, Box<dyn std::error::Error>> {
    let rules = load_rules(Some(config_path))?;
    let admission = gate_intake::admit(draft, &rules)?;
    Ok(admission)
}
