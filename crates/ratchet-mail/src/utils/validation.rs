/// Advisory address validation
use regex::Regex;

lazy_static::lazy_static! {
    // Permissive on purpose: local part, '@', domain, then a lowercase-only TLD.
    static ref EMAIL_REGEX: Regex = Regex::new(r".+@.+\.[a-z]+").unwrap();
}

/// Best-effort syntactic check of an address
///
/// No DNS or MX lookups and no full RFC 5322 grammar. The mailer never calls
/// this itself; it exists for callers to screen input before sending.
///
/// # Examples
/// ```
/// use ratchet_mail::utils::validation::valid_email;
///
/// assert!(valid_email(Some("a@b.com")));
/// assert!(!valid_email(Some("a@b.CO")));
/// assert!(!valid_email(None));
/// ```
pub fn valid_email(email: Option<&str>) -> bool {
    email.is_some_and(|e| EMAIL_REGEX.is_match(e))
}

/// True if `value` would break out of a single header line
pub fn contains_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}
