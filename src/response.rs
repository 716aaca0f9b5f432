//! Response body helpers.

use serde::Serialize;

/// Message-only body used for deletions and errors, e.g.
/// `{"detail": "User deleted"}`.
#[derive(Serialize)]
pub struct Detail {
    pub detail: String,
}

pub fn detail(message: impl Into<String>) -> Detail {
    Detail {
        detail: message.into(),
    }
}
