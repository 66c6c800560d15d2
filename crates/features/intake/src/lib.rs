//! # Intake
//!
//! This crate is the boundary where untrusted signup submissions become
//! trusted values. It runs in two stages:
//!
//! 1. **Assembly** ([`assemble`]): a presence check. A [`SignupDraft`] with
//!    every required field populated becomes a [`SignupRecord`]; anything
//!    absent is reported by field name, either fail-fast or aggregated
//!    depending on [`IntakePolicy`](gate_domain::config::IntakePolicy).
//! 2. **Admission** ([`admit`]): branding. The record's text runs through the
//!    credential validators, per-field failures are aggregated, and a
//!    successful admission carries the branded values plus a fresh session ID.
//!
//! Every failure is returned as a value; this crate never panics on bad input.

mod admission;
mod assembler;
mod draft;
mod error;

pub use crate::admission::{Admission, admit};
pub use crate::assembler::assemble;
pub use crate::draft::{FIELD_CREATED_AT, FIELD_PASSWORD, FIELD_USERNAME, SignupDraft, SignupRecord};
pub use crate::error::{IntakeError, IntakeErrorExt};
