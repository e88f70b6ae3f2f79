use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed mailbox pattern approximating RFC 5322 syntax: a dot-atom local
/// part, `@`, one or more domain labels, and an alphabetic TLD-like final
/// label. Labels may not start or end with a hyphen.
static MAILBOX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Classify a candidate address as syntactically valid or invalid.
///
/// Pure and total: any string is accepted and the result is a strict boolean,
/// with no "likely valid" tier. Consecutive dots are rejected anywhere in the
/// address; the `regex` crate has no lookahead, so the classic `(?!.*\.{2})`
/// guard lives in a separate check.
pub fn validate(address: &str) -> bool {
    !address.contains("..") && MAILBOX_REGEX.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(validate("user@example.com"));
        assert!(validate("first.last@example.com"));
        assert!(validate("user+tag@sub.example.co.uk"));
        assert!(validate("o'brien@example.ie"));
    }

    #[test]
    fn test_rejects_non_addresses() {
        assert!(!validate("not-an-email"));
        assert!(!validate(""));
        assert!(!validate("@example.com"));
        assert!(!validate("user@"));
        assert!(!validate("user@localhost"));
        assert!(!validate("user@@example.com"));
        assert!(!validate("us er@example.com"));
    }

    #[test]
    fn test_rejects_consecutive_dots() {
        assert!(!validate("a..b@example.com"));
        assert!(!validate("a@example..com"));
    }

    #[test]
    fn test_rejects_malformed_domain_labels() {
        assert!(!validate("user@-example.com"));
        assert!(!validate("user@example-.com"));
        assert!(!validate("user@example.c0m"));
    }
}
