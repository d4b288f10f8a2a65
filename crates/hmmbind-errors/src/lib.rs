//! Status codes and error types for native Easel/HMMER bindings.
//!
//! Native calls report failure either through an integer status code or a
//! null pointer. This crate turns both into a single [`BindingError`] type.
//!
//! ## Modules
//!
//! - [`status`]: Status code table and lookup
//! - [`error`]: The [`BindingError`] taxonomy
//! - [`check`]: Helpers to validate native return values at call sites

pub mod check;
pub mod error;
pub mod status;

// Re-export key types for convenience
pub use check::{check, check_alloc};
pub use error::{BindingError, ErrorKind, Result};
pub use status::{lookup, table, Status, StatusEntry, STATUS_TABLE, UNKNOWN_STATUS};
