//! Sensitive data marker for automatic redaction
//!
//! Bank account numbers and identity document numbers pass through logs
//! wrapped in `Sensitive<T>` so they never reach the output verbatim.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use landreg_core_types::Sensitive;
///
/// let account = Sensitive::new("00112233445566");
/// assert_eq!(format!("{}", account), "***REDACTED***");
/// assert_eq!(account.expose(), &"00112233445566");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
