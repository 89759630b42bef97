use std::collections::HashSet;
use std::sync::OnceLock;

static DISPOSABLE_DOMAINS_DATA: &str = include_str!("../../data/disposable_domains.txt");
static FREE_DOMAINS_DATA: &str = include_str!("../../data/free_domains.txt");

static DISPOSABLE_DOMAINS: OnceLock<HashSet<String>> = OnceLock::new();
static FREE_DOMAINS: OnceLock<HashSet<String>> = OnceLock::new();

/// Parses newline-delimited domain-list text into a lowercase lookup set.
///
/// Each line is trimmed; empty lines and lines starting with `#` are
/// skipped. Remaining lines are lowercased and inserted. Malformed lines
/// are simply skipped, so the function never fails.
///
/// # Examples
/// ```
/// use work_email_validator::validation::tables::load_domains;
///
/// let set = load_domains("# comment\n\nGmail.com\nyahoo.com\n");
/// assert!(set.contains("gmail.com"));
/// assert_eq!(set.len(), 2);
/// ```
pub fn load_domains(data: &str) -> HashSet<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// The set of known disposable/temporary email provider domains.
///
/// Built from the embedded list on first access and shared for the
/// process lifetime. Never mutated after construction, so concurrent
/// reads need no synchronization beyond the one-time init.
pub fn disposable_domains() -> &'static HashSet<String> {
    DISPOSABLE_DOMAINS.get_or_init(|| load_domains(DISPOSABLE_DOMAINS_DATA))
}

/// The set of known free consumer webmail provider domains.
///
/// Same lifecycle as [`disposable_domains`].
pub fn free_domains() -> &'static HashSet<String> {
    FREE_DOMAINS.get_or_init(|| load_domains(FREE_DOMAINS_DATA))
}
