//! Access gate and session flag

use crate::config::SiteConfig;

/// Session-scoped access flag
///
/// Lives only in memory; a new session always starts locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    granted: bool,
}

impl Session {
    /// Locked session
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { granted: false }
    }

    /// Whether the gate has been passed
    #[inline]
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        self.granted
    }

    /// Mark the gate as passed
    #[inline]
    pub fn grant(&mut self) {
        self.granted = true;
    }
}

/// Result of an access attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Key accepted; continue to `redirect`
    Granted {
        /// Page to open next
        redirect: String,
    },
    /// Key rejected; session unchanged
    Denied,
}

impl AccessOutcome {
    /// Whether access was granted
    #[inline]
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}

/// Checks typed keys against the configured one
#[derive(Debug, Clone)]
pub struct AccessGate {
    key: String,
    home_page: String,
}

impl AccessGate {
    /// Gate accepting `key` and landing on `home_page`
    #[must_use]
    pub fn new(key: &str, home_page: impl Into<String>) -> Self {
        Self {
            key: normalize_key(key),
            home_page: home_page.into(),
        }
    }

    /// Gate built from site settings
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.access_key, config.home_page.clone())
    }

    /// Check `input`; trimmed and case-insensitive
    pub fn check(&self, input: &str, session: &mut Session) -> AccessOutcome {
        if normalize_key(input) == self.key {
            session.grant();
            tracing::info!("Access granted");
            AccessOutcome::Granted {
                redirect: self.home_page.clone(),
            }
        } else {
            tracing::warn!("Access denied");
            AccessOutcome::Denied
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_lowercase_key() {
        let gate = AccessGate::default();
        let mut session = Session::new();

        let outcome = gate.check("  trask ", &mut session);

        assert_eq!(
            outcome,
            AccessOutcome::Granted {
                redirect: "home.html".to_string()
            }
        );
        assert!(session.is_granted());
    }

    #[test]
    fn wrong_key_leaves_session_locked() {
        let gate = AccessGate::default();
        let mut session = Session::new();

        assert_eq!(gate.check("MAGNETO", &mut session), AccessOutcome::Denied);
        assert_eq!(gate.check("", &mut session), AccessOutcome::Denied);
        assert!(!session.is_granted());
    }

    #[test]
    fn denial_does_not_revoke_existing_access() {
        let gate = AccessGate::default();
        let mut session = Session::new();
        gate.check("TRASK", &mut session);

        gate.check("nope", &mut session);

        assert!(session.is_granted());
    }

    #[test]
    fn configured_key_is_normalized_too() {
        let gate = AccessGate::new(" sentinel ", "start.html");
        let mut session = Session::new();

        let outcome = gate.check("Sentinel", &mut session);

        assert!(outcome.is_granted());
    }
}
