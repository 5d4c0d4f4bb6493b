//! Credential validity deadline policy.

use chrono::{DateTime, Utc};

/// Check whether a credential has expired.
///
/// An absent deadline never expires. A deadline at or before `now` is
/// expired; only a strictly later deadline still verifies.
pub fn is_expired(valid_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match valid_until {
        None => false,
        Some(deadline) => deadline <= now,
    }
}
