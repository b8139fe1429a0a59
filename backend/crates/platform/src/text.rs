//! Text helpers for visitor-supplied form input
//!
//! Sanitization strips markup and control characters; the validators are
//! deliberately permissive format checks, not deliverability checks.

use regex::Regex;
use std::sync::LazyLock;

/// Longest address accepted by SMTP (RFC 5321 path limit)
pub const MAX_EMAIL_LEN: usize = 254;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("invalid html tag pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("invalid email pattern")
});

/// Trim, remove HTML tags and stray angle brackets, drop control characters
/// other than newline and tab
pub fn sanitize_text(input: &str) -> String {
    let without_tags = HTML_TAG.replace_all(input, "");
    without_tags
        .chars()
        .filter(|&c| c != '<' && c != '>')
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// [`sanitize_text`] then lowercase
pub fn sanitize_email(input: &str) -> String {
    sanitize_text(input).to_lowercase()
}

/// `local@domain.tld`, no whitespace, at most [`MAX_EMAIL_LEN`] characters
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_LEN && !email.contains("..") && EMAIL.is_match(email)
}

/// Sanitized optional field, `None` when absent or blank after sanitizing
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize_text).filter(|s| !s.is_empty())
}

/// 7 to 20 characters of digits, spaces and `+ - ( )`, with at least 7 digits
pub fn is_valid_phone(phone: &str) -> bool {
    let len = phone.chars().count();
    (7..=20).contains(&len)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
        && phone.chars().filter(char::is_ascii_digit).count() >= 7
}

/// Number of characters (not bytes)
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// URL-friendly slug: lowercase ASCII alphanumerics separated by single dashes
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
