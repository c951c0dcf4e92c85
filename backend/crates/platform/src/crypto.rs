//! Cryptographic Utilities
//!
//! Random secrets and HMAC-signed opaque tokens of the form
//! `<payload>.<base64url(HMAC-SHA256(payload))>`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a 32-byte secret from the OS RNG
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Decode a standard base64 secret
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(encoded.trim())
}

fn mac_for(secret: &[u8], payload: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

/// Sign `payload`, producing `payload.signature`
///
/// The payload must not contain `.`.
pub fn sign_token(secret: &[u8], payload: &str) -> String {
    let signature = mac_for(secret, payload).finalize().into_bytes();
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a token produced by [`sign_token`] and return its payload
pub fn verify_token<'a>(secret: &[u8], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    // verify_slice compares in constant time
    mac_for(secret, payload).verify_slice(&signature).ok()?;
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret() {
        let a = random_secret();
        let b = random_secret();
        assert!(a.iter().any(|&x| x != 0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sign_and_verify() {
        let secret = [7u8; 32];
        let token = sign_token(&secret, "session-1");
        assert!(token.starts_with("session-1."));
        assert_eq!(verify_token(&secret, &token), Some("session-1"));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = sign_token(&[1u8; 32], "session-1");
        assert_eq!(verify_token(&[2u8; 32], &token), None);
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let secret = [9u8; 32];
        let token = sign_token(&secret, "session-1");
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("session-2.{sig}");
        assert_eq!(verify_token(&secret, &forged), None);
    }

    #[test]
    fn test_verify_rejects_malformed() {
        let secret = [9u8; 32];
        assert_eq!(verify_token(&secret, "no-signature"), None);
        assert_eq!(verify_token(&secret, "a.b.c"), None);
        assert_eq!(verify_token(&secret, "a.!!!"), None);
    }

    #[test]
    fn test_decode_secret() {
        let encoded = general_purpose::STANDARD.encode([3u8; 32]);
        assert_eq!(decode_secret(&encoded).unwrap(), vec![3u8; 32]);
        assert!(decode_secret("%%%").is_err());
    }
}
