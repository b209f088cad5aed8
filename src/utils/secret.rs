use subtle::ConstantTimeEq;

/// Compares the token received in the header with the configured one.
///
/// An unset expected token never matches, so a deployment without
/// `TOKEN_VALIDACAO` rejects every delivery.
pub fn token_matches(expected: Option<&str>, received: Option<&str>) -> bool {
    match (expected, received) {
        (Some(expected), Some(received)) if !expected.is_empty() => {
            expected.as_bytes().ct_eq(received.as_bytes()).into()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_token() {
        assert!(token_matches(Some("secret123"), Some("secret123")));
    }

    #[test]
    fn test_mismatched_token() {
        assert!(!token_matches(Some("secret123"), Some("secret124")));
        assert!(!token_matches(Some("secret123"), Some("secret")));
        assert!(!token_matches(Some("secret123"), Some("")));
    }

    #[test]
    fn test_missing_header() {
        assert!(!token_matches(Some("secret123"), None));
    }

    #[test]
    fn test_unconfigured_token_rejects_everything() {
        assert!(!token_matches(None, None));
        assert!(!token_matches(None, Some("anything")));
        assert!(!token_matches(Some(""), Some("")));
    }
}
