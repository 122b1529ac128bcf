//! Status enums and record kinds for finapp.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `SessionState` documents its state machine through `allowed_next_states()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// IncomeKind
// ---------------------------------------------------------------------------

/// Category of an income entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IncomeKind {
    Salary,
    Investment,
    Business,
}

impl IncomeKind {
    pub const ALL: [Self; 3] = [Self::Salary, Self::Investment, Self::Business];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Local authentication state of the application session.
///
/// ```text
/// anonymous → authenticated   (set_auth_data)
/// authenticated → authenticated (set_auth_data, silent overwrite)
/// authenticated → anonymous   (destroy)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl SessionState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Anonymous => &[Self::Authenticated],
            Self::Authenticated => &[Self::Authenticated, Self::Anonymous],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionSync
// ---------------------------------------------------------------------------

/// Who is allowed to write the local session.
///
/// `Explicit` keeps the session under the sole control of the façade call
/// paths; provider connection changes are only logged. `ProviderAuthoritative`
/// additionally mirrors every provider-side change (including out-of-band
/// expiry) into the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionSync {
    #[default]
    Explicit,
    ProviderAuthoritative,
}

impl SessionSync {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::ProviderAuthoritative => "provider_authoritative",
        }
    }
}

impl fmt::Display for SessionSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
