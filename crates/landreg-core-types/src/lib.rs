//! Core types shared across the land registry crates
//!
//! Foundational types used by both the error and logging facilities:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use sensitive::Sensitive;
