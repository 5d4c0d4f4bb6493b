//! Tagged SHA-256 digest derivation and recognition.
//!
//! A hashed credential is stored as the algorithm tag immediately
//! followed by the lowercase hex digest body. Anything that does not
//! carry the tag with the exact body length is treated as plaintext.

use ring::digest::{Context, SHA256};

use crate::error::{GateError, GateResult};

/// Algorithm tag carried by every hashed credential.
pub const DIGEST_TAG: &str = "sha256";

/// Length of the hex-encoded digest body.
pub const DIGEST_BODY_LEN: usize = 64;

/// Total length of a tagged digest string.
pub const TAGGED_DIGEST_LEN: usize = DIGEST_TAG.len() + DIGEST_BODY_LEN;

/// Check whether a stored secret is in hashed form.
///
/// Returns `true` iff the string starts with the algorithm tag and the
/// remainder has exactly the digest body length. Malformed input is
/// classified as plaintext, never an error.
pub fn is_hashed(secret: &str) -> bool {
    secret.len() == TAGGED_DIGEST_LEN && secret.starts_with(DIGEST_TAG)
}

/// The digest body of a hashed secret, without the algorithm tag.
///
/// Returns `None` when the secret is not in hashed form.
pub fn digest_body(secret: &str) -> Option<&str> {
    if is_hashed(secret) {
        Some(&secret[DIGEST_TAG.len()..])
    } else {
        None
    }
}

/// Derive a tagged digest binding a secret to a subject identity.
///
/// This is the at-rest form of a credential: the digest of the secret
/// concatenated with the identity, so equal secrets held by different
/// subjects do not hash alike.
///
/// # Errors
///
/// Returns [`GateError::Encoding`] if the digest cannot be computed.
pub fn hash_with_identity(secret: &str, identity: &str) -> GateResult<String> {
    tagged_digest(&[secret.as_bytes(), identity.as_bytes()])
}

/// Derive a tagged challenge digest from a digest body and a session salt.
///
/// The input is the body of an at-rest digest (see [`digest_body`]);
/// the output is what a client holding the same secret sends in
/// response to the challenge.
///
/// # Errors
///
/// Returns [`GateError::Encoding`] if the digest cannot be computed.
pub fn hash_with_salt(digest_body: &str, salt: &[u8]) -> GateResult<String> {
    tagged_digest(&[digest_body.as_bytes(), salt])
}

/// Digest the concatenation of the given parts and prepend the tag.
fn tagged_digest(parts: &[&[u8]]) -> GateResult<String> {
    let mut context = Context::new(&SHA256);
    for part in parts {
        context.update(part);
    }
    let digest = context.finish();

    let body = hex::encode(digest.as_ref());
    if body.len() != DIGEST_BODY_LEN {
        return Err(GateError::Encoding {
            message: format!(
                "digest body has length {}, expected {}",
                body.len(),
                DIGEST_BODY_LEN
            ),
        });
    }

    let mut out = String::with_capacity(TAGGED_DIGEST_LEN);
    out.push_str(DIGEST_TAG);
    out.push_str(&body);
    Ok(out)
}
