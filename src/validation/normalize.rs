/// Prepares a raw domain for table lookup.
///
/// The pipeline is: trim surrounding whitespace (ASCII and Unicode),
/// convert internationalized labels to their ASCII form (Punycode, per
/// UTS #46), then lowercase. If the IDNA conversion fails (malformed
/// label, disallowed code points) the trimmed input is used unchanged;
/// normalization never fails.
///
/// Pure and deterministic: the same input always yields the same output.
///
/// # Examples
/// ```
/// use work_email_validator::validation::normalize::normalize_domain;
///
/// assert_eq!(normalize_domain("  GMAIL.COM  "), "gmail.com");
/// assert_eq!(normalize_domain("münchen.de"), "xn--mnchen-3ya.de");
/// ```
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let ascii = idna::domain_to_ascii(trimmed).unwrap_or_else(|_| trimmed.to_string());
    ascii.to_lowercase()
}
