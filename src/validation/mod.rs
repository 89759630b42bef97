/// Classification predicates over the embedded domain tables.
///
/// This is the public query surface: five boolean functions that take a
/// raw domain or email string, normalize it internally, and test it
/// against the disposable and free tables with hierarchical (subdomain)
/// matching. Every predicate is total: malformed, empty, or adversarial
/// input yields `false`, never a panic.
///
/// # Examples
/// ```
/// use work_email_validator::validation::classify;
///
/// assert!(classify::is_free_domain("gmail.com"));
/// assert!(classify::is_disposable_domain("mail.temp-mail.com"));
/// assert!(classify::is_work_email("contact@mycompany.com"));
/// ```
pub mod classify;

/// Domain normalization: whitespace trimming, IDNA/Punycode ASCII
/// conversion, and lowercasing. Conversion failures degrade to the
/// trimmed input; normalization never errors.
pub mod normalize;

/// Structural domain syntax checks applied on the business-domain path.
/// A sanity filter (length, dot placement, TLD length, control bytes),
/// not full RFC 1035 validation.
pub mod syntax;

/// The embedded disposable and free domain lists, parsed once into
/// process-wide immutable lookup sets.
pub mod tables;
