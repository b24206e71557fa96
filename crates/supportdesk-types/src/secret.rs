use serde::{Deserialize, Serialize};

use std::fmt;

/// A credential name (e.g., "OPENAI_API_KEY").
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretKey(pub String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(\"{}\")", self.0)
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    /// Process environment variable.
    Environment,
    /// Local `.env` file.
    DotEnv,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::Environment => write!(f, "environment"),
            SecretSource::DotEnv => write!(f, ".env file"),
        }
    }
}

/// Number of leading characters left visible by [`Redacted::masked`].
pub const MASK_VISIBLE_PREFIX: usize = 8;
/// Number of trailing characters left visible by [`Redacted::masked`].
pub const MASK_VISIBLE_SUFFIX: usize = 4;

/// A wrapper that redacts secret values in Debug and Display output.
///
/// The actual value is accessible via `.expose()`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redacted(String);

impl Redacted {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masked representation for display.
    ///
    /// For a value of `L >= 12` characters the first 8 and last 4 stay
    /// visible and exactly `L - 12` asterisks replace the middle. Shorter
    /// values are masked entirely so no part of them leaks.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let visible = MASK_VISIBLE_PREFIX + MASK_VISIBLE_SUFFIX;
        if chars.len() < visible {
            return "*".repeat(chars.len());
        }

        let head: String = chars[..MASK_VISIBLE_PREFIX].iter().collect();
        let tail: String = chars[chars.len() - MASK_VISIBLE_SUFFIX..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(chars.len() - visible))
    }
}

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redacted(\"***\")")
    }
}

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}
