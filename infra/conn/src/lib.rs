//! # Connections
//!
//! Scoped, connection-like resource handles. A [`Conn`] is acquired from a
//! [`ConnPool`] and released **exactly once, on every exit path** — explicit
//! [`Conn::close`], end of scope, early return, `?`-propagated error, or
//! unwind — because release lives in `Drop`. Stack-held guards release in
//! reverse order of acquisition; that is the documented order and the one the
//! language guarantees.
//!
//! There is no way to leak a release by forgetting a call, and no way to
//! double-release: `close` consumes the guard and `Drop` checks the handoff.
//!
//! ## Example
//!
//! ```rust
//! use gate_conn::ConnPool;
//!
//! let pool = ConnPool::default();
//! {
//!     let a = pool.acquire().unwrap();
//!     let b = pool.acquire().unwrap();
//!     assert_eq!(pool.open_count(), 2);
//!     // `b` releases first, then `a`.
//! }
//! assert_eq!(pool.open_count(), 0);
//! ```

mod error;
mod pool;

pub use crate::error::{ConnError, ConnErrorExt};
pub use crate::pool::{Conn, ConnPool, ReleaseLog};
