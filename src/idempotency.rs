use sha2::{Digest, Sha256};

/// Hex SHA-256 of the serialized document.
///
/// Identical input yields identical output bytes, so two runs can be
/// compared by digest alone.
pub fn output_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_of_empty_document() {
        assert_eq!(
            output_digest(b"[]"),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }

    #[test]
    fn test_digest_is_stable_and_content_sensitive() {
        assert_eq!(output_digest(b"abc"), output_digest(b"abc"));
        assert_ne!(output_digest(b"abc"), output_digest(b"abd"));
        assert_eq!(output_digest(b"abc").len(), 64);
    }
}
