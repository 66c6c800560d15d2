//! # Credential Validation
//!
//! This crate turns untrusted text into branded credential values. A brand is
//! a newtype wrapper whose field is private: the only constructors are the
//! validating ones, so holding a [`Username`], [`Password`], or
//! [`EmailAddress`] *is* the proof that the category's rule passed. Downstream
//! code (see [`login`]) accepts the branded types and never re-checks.
//!
//! ## Architecture
//!
//! Each category ships a predicate/constructor pair:
//!
//! 1. **Predicate** (`is_username`, `is_password`, `is_email`): pure, total,
//!    deterministic; never panics, including on empty or non-ASCII input.
//! 2. **Constructor** (`Username::parse`, …): applies the predicate's rule and
//!    returns either the branded value or a [`ValidationError`] naming the
//!    category and the violated constraint.
//!
//! Failures are ordinary values. Nothing in this crate panics or throws
//! control-flow errors; callers branch on the `Result` discriminant.

mod email;
mod error;
mod login;
mod password;
mod username;

pub use crate::email::{EmailAddress, is_email};
pub use crate::error::{ValidationError, ValidationErrorExt};
pub use crate::login::login;
pub use crate::password::{Password, is_password};
pub use crate::username::{Username, is_username};
