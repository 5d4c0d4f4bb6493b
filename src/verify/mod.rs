//! Credential verification.
//!
//! The matcher decides whether a client response proves knowledge of a
//! stored secret, the expiry policy enforces the validity deadline, and
//! the verifier orchestrates both into a single decision per attempt.

mod clock;
mod expiry;
mod matcher;
mod outcome;
mod verifier;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expiry::is_expired;
pub use matcher::response_matches;
pub use outcome::{FailureReason, Verification};
pub use verifier::{verify_credential, Verifier};
