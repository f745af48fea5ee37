//! Synthetic-identifier helpers shared by domain id constructors.

use uuid::Uuid;

/// Returns `len` uppercase hexadecimal characters of fresh UUID entropy.
pub(crate) fn short_token(len: usize) -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(len)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::short_token;

    #[test]
    fn short_token_has_requested_length() {
        assert_eq!(short_token(8).len(), 8);
    }

    #[test]
    fn short_token_is_uppercase_hex() {
        let token = short_token(12);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!token.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn short_token_values_differ() {
        assert_ne!(short_token(16), short_token(16));
    }
}
