//! Normalization of user-supplied domains.

use crate::error::{Error, Result};

/// Normalize a domain before it is written to the managed block.
///
/// The input is trimmed and lowercased. Empty input, embedded whitespace and
/// `#` are rejected because such a value would not read back as the same
/// single domain. No DNS validation is performed.
pub fn normalize_domain(input: &str) -> Result<String> {
    let invalid = |reason| Error::InvalidDomain {
        input: input.to_string(),
        reason,
    };

    let domain = input.trim().to_lowercase();
    if domain.is_empty() {
        return Err(invalid("domain is empty"));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(invalid("domain contains whitespace"));
    }
    if domain.contains('#') {
        return Err(invalid("domain contains '#'"));
    }
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_domain("  WWW.YouTube.com ").unwrap(), "www.youtube.com");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_domain("   ").is_err());
    }

    #[test]
    fn test_normalize_rejects_inner_whitespace_and_hash() {
        assert!(normalize_domain("a.com b.com").is_err());
        assert!(normalize_domain("a.com#x").is_err());
    }
}
