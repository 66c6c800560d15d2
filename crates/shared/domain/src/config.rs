use crate::rules::{CharClasses, LengthBounds};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level validation configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfigInner {
    pub username: UsernameRules,
    pub password: PasswordRules,
    pub intake: IntakeConfig,
    pub conn: ConnConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RulesConfig {
    #[serde(flatten, default)]
    inner: Arc<RulesConfigInner>,
}

impl Deref for RulesConfig {
    type Target = RulesConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RulesConfig {
    fn deref_mut(&mut self) -> &mut RulesConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Username acceptance rule: a length window, nothing more.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct UsernameRules {
    pub bounds: LengthBounds,
}

/// Password acceptance rule: a length window plus required character classes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PasswordRules {
    pub bounds: LengthBounds,
    pub required: CharClasses,
}

/// Required-field assembly behavior.
#[derive(Default, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub policy: IntakePolicy,
}

/// How the assembler reports absent required fields.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakePolicy {
    /// Stop at the first absent field, in declaration order.
    FailFast,
    /// Collect every absent field before failing.
    #[default]
    Aggregate,
}

/// Connection pool limits.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ConnConfig {
    pub max_open: usize,
}

// --- Default ---

impl Default for UsernameRules {
    fn default() -> Self {
        Self { bounds: LengthBounds { min_chars: 3, max_chars: 20 } }
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            bounds: LengthBounds { min_chars: 8, max_chars: 20 },
            required: CharClasses::ALL,
        }
    }
}

impl Default for ConnConfig {
    fn default() -> Self {
        Self { max_open: 32 }
    }
}
