//! Canonical schema constants for structured logging
//!
//! The logging macros emit `op` and `event` on every operation event; the
//! test capture layer reads them back by these names.

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
