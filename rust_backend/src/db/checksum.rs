//! Content checksums for report snapshots.

use sha2::{Digest, Sha256};

/// SHA-256 over a serialized report payload, hex-encoded.
///
/// Two reports built from identical configuration over an unchanged record
/// set hash identically, which is what makes descriptor idempotence
/// checkable and lets the store recognize a re-saved duplicate.
pub fn report_checksum(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_deterministic() {
        let payload = r#"{"period":{"start":"2025-03-01","end":"2025-03-31"}}"#;
        assert_eq!(report_checksum(payload), report_checksum(payload));
    }

    #[test]
    fn test_checksum_distinguishes_payloads() {
        assert_ne!(
            report_checksum(r#"{"total":1}"#),
            report_checksum(r#"{"total":2}"#)
        );
    }

    #[test]
    fn test_checksum_is_hex_encoded_sha256() {
        let checksum = report_checksum("");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
