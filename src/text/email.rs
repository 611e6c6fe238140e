//! Email address validation.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        // local@domain.tld, single @, no whitespace
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Returns whether the address has a plausible `local@domain.tld` shape.
pub fn is_valid_email(address: &str) -> bool {
    email_pattern().is_match(address)
}
