//! Stored-credential digest codec.
//!
//! Classifies stored secrets as tagged digests or plaintext and derives
//! the tagged digests used by both authentication modes.

mod digest;

pub use digest::{
    digest_body, hash_with_identity, hash_with_salt, is_hashed, DIGEST_BODY_LEN, DIGEST_TAG,
    TAGGED_DIGEST_LEN,
};
