//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, config loading, and
//! invariant checks.
//!
//! ## ID generation
//! Use `safe_id!` for URL-safe, unambiguous ID bodies:
//! ```rust
//! # use gate_kernel::safe_id;
//! let body = safe_id!();
//! assert_eq!(body.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use gate_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("gatecheck")).unwrap();
//! ```
pub mod assert;
pub mod config;
pub mod id;
pub mod prelude;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use gate_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` body (no visually confusing characters).
#[macro_export]
macro_rules! safe_id {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
