//! PKCE verifier/challenge pairs and OAuth state tokens

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use rand::rngs::OsRng;
use ring::digest::{SHA256, digest};

/// Random bytes behind a code verifier (86 characters once encoded)
const VERIFIER_BYTES: usize = 64;

/// Random bytes behind a state token
const STATE_BYTES: usize = 16;

/// A code verifier and the S256 challenge derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkcePair {
    /// Secret kept server-side until the code exchange
    pub verifier: String,
    /// Sent with the authorization request
    pub challenge: String,
}

impl PkcePair {
    /// A fresh pair from the OS random source
    #[must_use]
    pub fn generate() -> Self {
        Self::from_verifier(random_token(VERIFIER_BYTES))
    }

    /// Derive the pair for an existing verifier
    #[must_use]
    pub fn from_verifier(verifier: String) -> Self {
        let challenge = Self::challenge_for(&verifier);
        Self {
            verifier,
            challenge,
        }
    }

    /// base64url (no padding) of the SHA-256 of `verifier`
    #[must_use]
    pub fn challenge_for(verifier: &str) -> String {
        URL_SAFE_NO_PAD.encode(digest(&SHA256, verifier.as_bytes()))
    }
}

/// Opaque value tying a callback to the login that started it
#[must_use]
pub fn state_token() -> String {
    random_token(STATE_BYTES)
}

fn random_token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
