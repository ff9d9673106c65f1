//! HMAC signature generation over canonical payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use super::canonical::canonicalize;
use crate::config::{HmacAlgorithm, SignatureEncoding};
use crate::error::GatewayError;
use crate::models::Payload;

fn keyed_hash<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> Result<Vec<u8>, GatewayError> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| GatewayError::configuration(format!("Invalid secret key: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Raw HMAC bytes of `message` keyed with `secret`
pub fn compute_mac(
    algo: HmacAlgorithm,
    secret: &str,
    message: &str,
) -> Result<Vec<u8>, GatewayError> {
    let (key, msg) = (secret.as_bytes(), message.as_bytes());
    match algo {
        HmacAlgorithm::Md5 => keyed_hash::<Hmac<Md5>>(key, msg),
        HmacAlgorithm::Sha1 => keyed_hash::<Hmac<Sha1>>(key, msg),
        HmacAlgorithm::Sha224 => keyed_hash::<Hmac<Sha224>>(key, msg),
        HmacAlgorithm::Sha256 => keyed_hash::<Hmac<Sha256>>(key, msg),
        HmacAlgorithm::Sha384 => keyed_hash::<Hmac<Sha384>>(key, msg),
        HmacAlgorithm::Sha512 => keyed_hash::<Hmac<Sha512>>(key, msg),
    }
}

/// Sign a payload: canonicalize, HMAC with `secret`, then encode.
///
/// An empty secret is rejected before any hashing happens.
pub fn generate_signature(
    payload: &Payload,
    secret: &str,
    algo: HmacAlgorithm,
    encoding: SignatureEncoding,
) -> Result<String, GatewayError> {
    if secret.is_empty() {
        return Err(GatewayError::configuration("HMAC secret must not be empty"));
    }

    let raw = compute_mac(algo, secret, &canonicalize(payload))?;

    Ok(match encoding {
        SignatureEncoding::Hex => hex::encode(raw),
        SignatureEncoding::Base64 => BASE64.encode(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction() -> Payload {
        Payload::from([
            ("transaction_id", "12345"),
            ("amount", "99.99"),
            ("currency", "USD"),
        ])
    }

    #[test]
    fn test_known_sha256_vector() {
        let signature = generate_signature(
            &transaction(),
            "top-secret",
            HmacAlgorithm::Sha256,
            SignatureEncoding::Hex,
        )
        .unwrap();

        assert_eq!(
            signature,
            "a208219bd988aee4827485e3be7dfb97e23ed04c19e437a533d455eaaaa9fe34"
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = generate_signature(
            &transaction(),
            "",
            HmacAlgorithm::Sha256,
            SignatureEncoding::Hex,
        )
        .unwrap_err();

        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "HMAC secret must not be empty");
    }

    #[test]
    fn test_raw_lengths_per_algorithm() {
        for algo in HmacAlgorithm::ALL {
            let raw = compute_mac(algo, "test-secret", "test=data").unwrap();
            assert_eq!(raw.len(), algo.output_len(), "{algo}");
        }
    }

    #[test]
    fn test_base64_matches_hex_bytes() {
        let payload = Payload::from([("test", "data")]);
        let hex_sig =
            generate_signature(&payload, "test-secret", HmacAlgorithm::Sha256, SignatureEncoding::Hex)
                .unwrap();
        let b64_sig = generate_signature(
            &payload,
            "test-secret",
            HmacAlgorithm::Sha256,
            SignatureEncoding::Base64,
        )
        .unwrap();

        assert_ne!(hex_sig, b64_sig);
        assert_eq!(BASE64.encode(hex::decode(&hex_sig).unwrap()), b64_sig);
    }
}
