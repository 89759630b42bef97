/// Checks the structural sanity of an already-normalized domain.
///
/// This is a syntactic filter, not full RFC 1035 validation: it does not
/// enforce per-label length limits or allowed character sets. It accepts a
/// domain when all of the following hold:
/// - total length between 4 and 253 bytes ("a.io" is the shortest form);
/// - a `.` exists, not as the first or last character;
/// - the label after the last `.` (the TLD) is at least 2 characters;
/// - no byte is a control character (<= 0x20) or DEL (0x7F).
///
/// The control-byte check runs on the ASCII-normalized form, so it also
/// catches raw control bytes that survived an IDNA conversion failure.
///
/// # Examples
/// ```
/// use work_email_validator::validation::syntax::is_valid_domain_syntax;
///
/// assert!(is_valid_domain_syntax("example.com"));
/// assert!(!is_valid_domain_syntax("domain.a"));
/// assert!(!is_valid_domain_syntax("nodots"));
/// ```
pub fn is_valid_domain_syntax(domain: &str) -> bool {
    const TLD_MIN_LENGTH: usize = 2;

    // Min 4 bytes: one label, a dot, and a 2-char TLD.
    if domain.len() < 4 || domain.len() > 253 {
        return false;
    }

    let last_dot = match domain.rfind('.') {
        Some(i) => i,
        None => return false,
    };

    // Dot must not start the string or end it.
    if last_dot == 0 || last_dot == domain.len() - 1 {
        return false;
    }

    if domain.len() - last_dot - 1 < TLD_MIN_LENGTH {
        return false;
    }

    !domain.bytes().any(|b| b <= 0x20 || b == 0x7F)
}
