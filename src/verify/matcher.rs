//! Credential matching.
//!
//! Decides whether a client response proves knowledge of the secret in
//! a stored credential, under either authentication mode. The verifier
//! guarantees the stored secret is non-empty before matching, and the
//! [`Challenge`] type guarantees a non-empty salt.

use crate::codec::{digest_body, hash_with_identity, hash_with_salt, DIGEST_TAG};
use crate::credential::Challenge;
use crate::error::GateResult;

/// Check whether `response` proves knowledge of the stored secret.
///
/// With a challenge present the stored secret is brought into salted
/// form and compared against the response; without one the response is
/// compared against the stored secret, hashing the response first when
/// the secret is stored hashed. Comparison is ordinary string equality.
///
/// # Errors
///
/// Returns an encoding error if a digest cannot be computed.
pub fn response_matches(
    stored_secret: &str,
    subject: &str,
    response: &str,
    challenge: Option<&Challenge>,
) -> GateResult<bool> {
    match challenge {
        Some(challenge) => {
            let expected = match digest_body(stored_secret) {
                // Stored secret is already hashed, only apply the salt.
                Some(body) => hash_with_salt(body, challenge.salt())?,
                // Plaintext at rest: hash as if stored hashed, then
                // apply the salt, matching what the client sends.
                None => {
                    let intermediate = hash_with_identity(stored_secret, subject)?;
                    hash_with_salt(&intermediate[DIGEST_TAG.len()..], challenge.salt())?
                }
            };
            Ok(expected == response)
        }
        None => match digest_body(stored_secret) {
            // Hash the plaintext response to match the stored digest.
            Some(_) => Ok(hash_with_identity(response, subject)? == stored_secret),
            None => Ok(response == stored_secret),
        },
    }
}
