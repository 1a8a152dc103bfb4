//! Signing profile declarations
//!
//! Profiles are names only at this layer. Credential material and the actual
//! artifact signing are owned by the host build tool.

use std::collections::BTreeSet;

/// The signing profile every project declares implicitly.
pub const DEBUG_PROFILE: &str = "debug";

/// The set of signing profiles declared for a build invocation.
///
/// `signingConfig` references in the document must resolve against this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningProfiles {
    names: BTreeSet<String>,
}

impl Default for SigningProfiles {
    fn default() -> Self {
        let mut names = BTreeSet::new();
        names.insert(DEBUG_PROFILE.to_string());
        Self { names }
    }
}

impl SigningProfiles {
    /// Create the default profile set (the implicit debug profile)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an additional named profile
    #[must_use]
    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Check whether a profile name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate the declared profile names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_declares_debug() {
        let profiles = SigningProfiles::new();
        assert!(profiles.contains(DEBUG_PROFILE));
        assert_eq!(profiles.names().collect::<Vec<_>>(), vec!["debug"]);
    }

    #[test]
    fn test_with_profile() {
        let profiles = SigningProfiles::new().with_profile("release");
        assert!(profiles.contains("debug"));
        assert!(profiles.contains("release"));
        assert!(!profiles.contains("upload"));
    }
}
