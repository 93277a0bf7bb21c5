//! Service configuration
//!
//! The configuration collaborator supplies one value today: the default
//! public access level stamped onto new travelers.

use serde::{Deserialize, Serialize};
use traveler_core::AccessLevel;

/// Service configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Default `public_access` for new travelers
    pub default_public_access: AccessLevel,
}

impl ServiceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default public access level
    #[inline]
    #[must_use]
    pub fn with_default_public_access(mut self, access: AccessLevel) -> Self {
        self.default_public_access = access;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_no_public_access() {
        assert_eq!(ServiceConfig::new().default_public_access, AccessLevel::None);
    }

    #[test]
    fn builder_overrides_default() {
        let config = ServiceConfig::new().with_default_public_access(AccessLevel::Read);
        assert_eq!(config.default_public_access, AccessLevel::Read);
    }

    #[test]
    fn loads_from_json() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"default_public_access": 1}"#).unwrap();
        assert_eq!(config.default_public_access, AccessLevel::Write);
    }
}
