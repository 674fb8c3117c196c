//! Join code - short shared secret enabling self-service workspace join
//!
//! Codes are 6 characters from a 36-symbol alphabet (digits and lowercase
//! letters), generated independently per call. No global uniqueness check is
//! performed: a join always names the workspace id as well, so a collision
//! between two workspaces grants nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const CODE_LEN: usize = 6;

/// Workspace join code, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    /// Generate a fresh random code
    #[must_use]
    pub fn generate() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let code = (0..CODE_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Wrap a stored code, normalizing to lowercase
    pub fn from_stored(code: impl Into<String>) -> Self {
        Self(code.into().to_lowercase())
    }

    /// Compare against a user-submitted code, case-insensitively
    #[must_use]
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted.to_lowercase()
    }

    /// View the code as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
