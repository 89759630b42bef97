use std::collections::HashSet;

use crate::validation::normalize::normalize_domain;
use crate::validation::syntax::is_valid_domain_syntax;
use crate::validation::tables::{disposable_domains, free_domains};

/// Checks whether the domain, or any parent obtained by dropping leading
/// labels, is present in the table.
///
/// For `a.b.temp-mail.com` the candidates are, in order:
/// `a.b.temp-mail.com`, `b.temp-mail.com`, `temp-mail.com`, `com`.
/// The bare TLD is deliberately included in the walk: a table entry of
/// `com` would match every `.com` domain. The shipped lists contain no
/// bare TLDs, so this only surfaces with hand-built tables.
///
/// Expects the domain to be already normalized (trimmed, lowercase).
/// Empty input never matches.
fn is_member_or_ancestor(domain: &str, table: &HashSet<String>) -> bool {
    if domain.is_empty() {
        return false;
    }

    if table.contains(domain) {
        return true;
    }

    let mut suffix = domain;
    while let Some(dot) = suffix.find('.') {
        suffix = &suffix[dot + 1..];
        if table.contains(suffix) {
            return true;
        }
    }

    false
}

/// Checks if the given domain is a disposable/temporary email domain.
///
/// # Examples
/// ```
/// use work_email_validator::validation::classify::is_disposable_domain;
///
/// assert!(is_disposable_domain("temp-mail.com"));
/// assert!(is_disposable_domain("mail.10minutemail.com"));
/// assert!(!is_disposable_domain("example.com"));
/// ```
pub fn is_disposable_domain(domain: &str) -> bool {
    is_member_or_ancestor(&normalize_domain(domain), disposable_domains())
}

/// Checks if the given domain is a free email provider domain.
///
/// # Examples
/// ```
/// use work_email_validator::validation::classify::is_free_domain;
///
/// assert!(is_free_domain("gmail.com"));
/// assert!(!is_free_domain("mycompany.com"));
/// ```
pub fn is_free_domain(domain: &str) -> bool {
    is_member_or_ancestor(&normalize_domain(domain), free_domains())
}

/// Checks if the given domain is either disposable or free.
pub fn is_disposable_or_free_domain(domain: &str) -> bool {
    let normalized = normalize_domain(domain);
    is_member_or_ancestor(&normalized, disposable_domains())
        || is_member_or_ancestor(&normalized, free_domains())
}

/// Checks if the given domain is a business domain: syntactically valid
/// and neither disposable nor free.
///
/// # Examples
/// ```
/// use work_email_validator::validation::classify::is_business_domain;
///
/// assert!(is_business_domain("mycompany.com"));
/// assert!(!is_business_domain("gmail.com"));
/// assert!(!is_business_domain("not a domain"));
/// ```
pub fn is_business_domain(domain: &str) -> bool {
    let normalized = normalize_domain(domain);

    if !is_valid_domain_syntax(&normalized) {
        return false;
    }

    !is_member_or_ancestor(&normalized, disposable_domains())
        && !is_member_or_ancestor(&normalized, free_domains())
}

/// Checks if the given email address is from a business domain.
///
/// The domain is everything after the last `@`; an address with no `@`,
/// an empty local part, or an empty domain part is never a work email.
///
/// # Examples
/// ```
/// use work_email_validator::validation::classify::is_work_email;
///
/// assert!(is_work_email("contact@mycompany.com"));
/// assert!(!is_work_email("user@gmail.com"));
/// assert!(!is_work_email("not-an-email"));
/// ```
pub fn is_work_email(email: &str) -> bool {
    match email.rfind('@') {
        Some(at) if at > 0 && at < email.len() - 1 => is_business_domain(&email[at + 1..]),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_disposable_domain() {
        assert!(is_disposable_domain("temp-mail.com"));
        assert!(is_disposable_domain("10minutemail.com"));
        assert!(is_disposable_domain("guerrillamail.com"));
        assert!(is_disposable_domain("TEMP-MAIL.COM"));
        assert!(is_disposable_domain("  temp-mail.org  "));
        assert!(!is_disposable_domain("gmail.com"));
        assert!(!is_disposable_domain("example.com"));
    }

    #[test]
    fn test_is_free_domain() {
        assert!(is_free_domain("gmail.com"));
        assert!(is_free_domain("outlook.com"));
        assert!(is_free_domain("yahoo.com"));
        assert!(is_free_domain("hotmail.com"));
        assert!(is_free_domain("icloud.com"));
        assert!(is_free_domain("protonmail.com"));
        assert!(is_free_domain("GMAIL.COM"));
        assert!(is_free_domain("  outlook.com  "));
        assert!(!is_free_domain("example.com"));
        assert!(!is_free_domain("temp-mail.com"));
    }

    #[test]
    fn test_is_disposable_or_free_domain() {
        assert!(is_disposable_or_free_domain("gmail.com"));
        assert!(is_disposable_or_free_domain("temp-mail.com"));
        assert!(!is_disposable_or_free_domain("example.com"));
        assert!(!is_disposable_or_free_domain("mycompany.com"));
    }

    #[test]
    fn test_disposable_or_free_matches_composition() {
        for domain in [
            "gmail.com",
            "temp-mail.com",
            "example.com",
            "sub.yopmail.com",
            "",
            "not a domain",
        ] {
            assert_eq!(
                is_disposable_or_free_domain(domain),
                is_disposable_domain(domain) || is_free_domain(domain),
                "composition mismatch for {:?}",
                domain
            );
        }
    }

    #[test]
    fn test_is_business_domain() {
        assert!(is_business_domain("example.com"));
        assert!(is_business_domain("mycompany.com"));
        assert!(!is_business_domain("gmail.com"));
        assert!(!is_business_domain("temp-mail.com"));
        assert!(!is_business_domain("outlook.com"));
    }

    #[test]
    fn test_business_requires_valid_syntax() {
        assert!(!is_business_domain(""));
        assert!(!is_business_domain("   "));
        assert!(!is_business_domain("nodots"));
        assert!(!is_business_domain("domain.a"));
        assert!(!is_business_domain("example.com."));
        // Only the last dot's position matters to the syntax check, so a
        // leading dot is accepted; ".example.com" is in neither table.
        assert!(is_business_domain(".example.com"));
    }

    #[test]
    fn test_hierarchical_matching() {
        assert!(is_disposable_domain("a.b.temp-mail.com"));
        assert!(is_disposable_domain("sub.10minutemail.com"));
        assert!(is_free_domain("mail.gmail.com"));
        assert!(is_free_domain("deep.sub.yahoo.com"));
        // Parent listing never taints unrelated siblings.
        assert!(!is_free_domain("notgmail.com"));
        assert!(is_business_domain("corp.google.com"));
    }

    #[test]
    fn test_bare_tld_table_entry_matches_everything_under_it() {
        // Literal suffix-walk behavior: a single-label entry acts as a
        // wildcard for its TLD. The shipped lists never contain one.
        let table: std::collections::HashSet<String> = ["com".to_string()].into();
        assert!(is_member_or_ancestor("anything.com", &table));
        assert!(is_member_or_ancestor("a.b.c.com", &table));
        assert!(!is_member_or_ancestor("anything.org", &table));
    }

    #[test]
    fn test_member_or_ancestor_edge_inputs() {
        let table: std::collections::HashSet<String> =
            ["temp-mail.com".to_string()].into();
        assert!(!is_member_or_ancestor("", &table));
        assert!(!is_member_or_ancestor("com", &table));
        assert!(!is_member_or_ancestor(".", &table));
        assert!(!is_member_or_ancestor("...", &table));
        assert!(is_member_or_ancestor("temp-mail.com", &table));
        assert!(is_member_or_ancestor("x.temp-mail.com", &table));
        // A leading dot drops to "temp-mail.com" on the first step of the
        // suffix walk, so it still matches.
        assert!(is_member_or_ancestor(".temp-mail.com", &table));
        // Trailing dot changes the suffix set; "temp-mail.com." is not a member.
        assert!(!is_member_or_ancestor("temp-mail.com.", &table));
    }

    #[test]
    fn test_is_work_email() {
        assert!(is_work_email("contact@mycompany.com"));
        assert!(is_work_email("contact@example.com"));
        assert!(is_work_email("user@corp.google.com"));
        assert!(!is_work_email("user@gmail.com"));
        assert!(!is_work_email("user@outlook.com"));
        assert!(!is_work_email("user@temp-mail.com"));
        assert!(!is_work_email("user@sub.gmail.com"));
        assert!(!is_work_email("user@sub.temp-mail.com"));
        assert!(!is_work_email("invalid-email"));
    }

    #[test]
    fn test_work_email_uses_last_at() {
        assert!(is_work_email("user@host@mycompany.com"));
        assert!(!is_work_email("user@host@gmail.com"));
    }

    #[test]
    fn test_work_email_at_boundaries() {
        assert!(!is_work_email("@domain.com"));
        assert!(!is_work_email("user@"));
        assert!(!is_work_email("@"));
        assert!(!is_work_email(""));
    }

    #[test]
    fn test_idn_domains_classify_like_their_ascii_form() {
        assert!(is_business_domain("münchen.de"));
        assert!(is_business_domain("xn--mnchen-3ya.de"));
        assert_eq!(
            is_business_domain("münchen.de"),
            is_business_domain("xn--mnchen-3ya.de")
        );
        assert!(!is_free_domain("münchen.de"));
        assert!(!is_disposable_domain("münchen.de"));
        assert!(is_work_email("kontakt@münchen.de"));
    }

    #[test]
    fn test_case_insensitivity() {
        for domain in ["gmail.com", "TEMP-MAIL.COM", "MyCompany.Com"] {
            assert_eq!(
                is_disposable_domain(&domain.to_uppercase()),
                is_disposable_domain(&domain.to_lowercase())
            );
            assert_eq!(
                is_free_domain(&domain.to_uppercase()),
                is_free_domain(&domain.to_lowercase())
            );
            assert_eq!(
                is_business_domain(&domain.to_uppercase()),
                is_business_domain(&domain.to_lowercase())
            );
        }
    }

    #[test]
    fn test_adversarial_inputs_do_not_panic() {
        let long = "a".repeat(5000);
        let inputs = [
            "",
            " ",
            ".",
            "..",
            "...",
            "@",
            "@@@",
            ".com",
            "com.",
            "a@b@c@d",
            "\u{0}\u{0}\u{0}",
            "exa\u{7f}mple.com",
            "\u{FFFD}.com",
            long.as_str(),
        ];
        for input in inputs {
            let _ = is_disposable_domain(input);
            let _ = is_free_domain(input);
            let _ = is_disposable_or_free_domain(input);
            let _ = is_business_domain(input);
            let _ = is_work_email(input);
        }
    }

    #[test]
    fn test_predicates_are_deterministic() {
        for input in ["gmail.com", "temp-mail.com", "mycompany.com", ""] {
            assert_eq!(is_business_domain(input), is_business_domain(input));
            assert_eq!(is_work_email(input), is_work_email(input));
        }
    }
}
