//! Repository locators and the SSH → HTTPS rewrite.
//!
//! A locator is whatever `git clone` accepts as a source. The only
//! transformation applied is a literal prefix swap of `git@<host>:` for
//! `https://<host>/`, used on machines without SSH keys for the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string identifying a remote repository, in SSH or HTTPS form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Rewrites SSH locators for one host into their HTTPS equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorTransform {
    prefer_https: bool,
    ssh_prefix: String,
    https_prefix: String,
}

impl LocatorTransform {
    pub fn new(host: &str, prefer_https: bool) -> Self {
        Self {
            prefer_https,
            ssh_prefix: format!("git@{}:", host),
            https_prefix: format!("https://{}/", host),
        }
    }

    /// A transform that passes every locator through unchanged.
    pub fn identity() -> Self {
        Self::new(crate::defaults::DEFAULT_SSH_HOST, false)
    }

    pub fn prefer_https(&self) -> bool {
        self.prefer_https
    }

    /// Applies the rewrite when HTTPS is preferred. Only a leading
    /// `git@<host>:` is replaced; everything else is returned as-is.
    pub fn apply(&self, locator: &Locator) -> Locator {
        if !self.prefer_https {
            return locator.clone();
        }
        match locator.as_str().strip_prefix(&self.ssh_prefix) {
            Some(rest) => Locator(format!("{}{}", self.https_prefix, rest)),
            None => locator.clone(),
        }
    }
}
