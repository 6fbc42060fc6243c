use sha2::{Digest, Sha256};
use uuid::Uuid;

// =============================================================================
// PKCE (RFC 7636) for the OAuth redirect flow
// =============================================================================

/// Verifier/challenge pair for one authorization request
#[derive(Debug, Clone)]
pub struct PkcePair {
    /// Secret kept server-side until the code exchange
    pub verifier: String,
    /// `BASE64URL(SHA256(verifier))`, sent with the authorize redirect
    pub challenge: String,
}

impl PkcePair {
    /// Generate a fresh pair from 32 random bytes (64 hex characters)
    pub fn generate() -> Self {
        let mut bytes = Vec::with_capacity(32);
        bytes.extend_from_slice(Uuid::new_v4().as_bytes());
        bytes.extend_from_slice(Uuid::new_v4().as_bytes());
        let verifier = hex::encode(bytes);
        let challenge = code_challenge(&verifier);
        Self {
            verifier,
            challenge,
        }
    }
}

/// S256 code challenge for a verifier
pub fn code_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    base64url_encode(&digest)
}

/// Unpadded URL-safe base64 (with - and _)
pub fn base64url_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
    let mut result = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as usize;
        let b1 = chunk.get(1).copied().unwrap_or(0) as usize;
        let b2 = chunk.get(2).copied().unwrap_or(0) as usize;

        result.push(ALPHABET[b0 >> 2] as char);
        result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        }
        if chunk.len() > 2 {
            result.push(ALPHABET[b2 & 0x3f] as char);
        }
    }

    result
}
