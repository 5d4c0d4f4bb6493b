//! Verification orchestration.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::credential::{Challenge, CredentialRecord};
use crate::directory::CredentialDirectory;
use crate::error::{GateError, GateResult};

use super::clock::{Clock, SystemClock};
use super::expiry::is_expired;
use super::matcher::response_matches;
use super::outcome::{FailureReason, Verification};

/// Verify a client response against a resolved credential record.
///
/// This is the pure decision function: the record comes from whatever
/// directory the caller consulted (`None` when the subject is unknown),
/// and `now` is the instant expiry is judged against. Each rejection
/// carries exactly one reason and an operator-facing detail; the expiry
/// check runs only after the response has matched.
///
/// # Errors
///
/// Returns an encoding error if a digest cannot be computed. No
/// verification outcome exists in that case and nothing about the
/// attempt may be reported to the remote party beyond a generic
/// failure.
pub fn verify_credential(
    record: Option<&CredentialRecord>,
    subject: &str,
    response: &str,
    challenge: Option<&Challenge>,
    now: DateTime<Utc>,
) -> GateResult<Verification> {
    let record = match record {
        Some(record) => record,
        None => {
            return Ok(Verification::rejected(
                FailureReason::NoSuchSubject,
                format!("subject \"{}\" does not exist", subject),
            ));
        }
    };

    let secret = match record.secret.as_deref() {
        Some(secret) => secret,
        None => {
            return Ok(Verification::rejected(
                FailureReason::NoCredential,
                format!("subject \"{}\" has no credential assigned", subject),
            ));
        }
    };

    if secret.is_empty() {
        return Ok(Verification::rejected(
            FailureReason::EmptyCredential,
            format!("subject \"{}\" has an empty credential", subject),
        ));
    }

    if !response_matches(secret, subject, response, challenge)? {
        return Ok(Verification::rejected(
            FailureReason::Mismatch,
            format!("response does not match for subject \"{}\"", subject),
        ));
    }

    if let Some(deadline) = record.valid_until {
        if is_expired(Some(deadline), now) {
            return Ok(Verification::rejected(
                FailureReason::Expired,
                format!(
                    "credential for subject \"{}\" expired at {}",
                    subject,
                    deadline.to_rfc3339()
                ),
            ));
        }
    }

    Ok(Verification::verified())
}

/// Verification front door.
///
/// Owns the injected collaborator seams: a credential directory for the
/// subject lookup and a clock for the expiry judgment. Stateless beyond
/// those; safe to share across threads when the directory and clock
/// are.
pub struct Verifier<D, C = SystemClock> {
    directory: D,
    clock: C,
}

impl<D: CredentialDirectory> Verifier<D> {
    /// Create a verifier judging expiry against the system clock.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            clock: SystemClock,
        }
    }
}

impl<D: CredentialDirectory, C: Clock> Verifier<D, C> {
    /// Create a verifier with an explicit clock.
    pub fn with_clock(directory: D, clock: C) -> Self {
        Self { directory, clock }
    }

    /// Look up the subject's credential and verify the response.
    ///
    /// Emits the rejection detail to the operator log; the returned
    /// [`Verification`] exposes it only through
    /// [`log_detail`](Verification::log_detail). Secrets and responses
    /// are never logged.
    ///
    /// # Errors
    ///
    /// Returns a directory error if the lookup fails and an encoding
    /// error if a digest cannot be computed.
    pub fn authenticate(
        &self,
        subject: &str,
        response: &str,
        challenge: Option<&Challenge>,
    ) -> GateResult<Verification> {
        let attempt_id = Uuid::new_v4();

        let record = self
            .directory
            .find_credential(subject)
            .map_err(|e| GateError::Directory {
                message: e.to_string(),
            })?;

        let verification =
            verify_credential(record.as_ref(), subject, response, challenge, self.clock.now())?;

        match (verification.reason(), verification.log_detail()) {
            (Some(reason), Some(detail)) => warn!(
                attempt_id = %attempt_id,
                subject = %subject,
                reason = %reason,
                detail = %detail,
                "Credential verification rejected"
            ),
            _ => debug!(
                attempt_id = %attempt_id,
                subject = %subject,
                "Credential verified"
            ),
        }

        Ok(verification)
    }
}
