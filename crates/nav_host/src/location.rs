//! Location service contract and baseline adapters.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced when a location adapter cannot complete a write.
pub enum LocationError {
    /// The host has no navigable location (no window, no history object).
    #[error("navigation location unavailable: {0}")]
    Unavailable(String),
    /// The host refused the write.
    #[error("navigation location rejected write: {0}")]
    Rejected(String),
}

/// Host service for reading and replacing named query parameters of the current location.
///
/// Implementations only need to support one operation per direction: reading a parameter and
/// replacing it in place. History management beyond "replace the current entry" is left to the
/// host.
pub trait NavigationLocation {
    /// Returns the decoded value of the first `name` parameter in the current location.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Sets `name=value` on the current location without pushing a new history entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the host has no location or refuses the write.
    fn replace_query_param(&self, name: &str, value: &str) -> Result<(), LocationError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Location adapter for hosts without a navigable location.
pub struct NoopLocation;

impl NavigationLocation for NoopLocation {
    fn query_param(&self, _name: &str) -> Option<String> {
        None
    }

    fn replace_query_param(&self, _name: &str, _value: &str) -> Result<(), LocationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn noop_location_is_empty_and_accepts_writes() {
        let location: &dyn NavigationLocation = &NoopLocation;
        location
            .replace_query_param("tab", "b")
            .expect("noop write");
        assert_eq!(location.query_param("tab"), None);
    }

    #[test]
    fn location_errors_render_their_cause() {
        assert_eq!(
            LocationError::Unavailable("window".to_string()).to_string(),
            "navigation location unavailable: window"
        );
        assert_eq!(
            LocationError::Rejected("SecurityError".to_string()).to_string(),
            "navigation location rejected write: SecurityError"
        );
    }
}
