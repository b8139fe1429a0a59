//! Contact form validation
//!
//! Every failing field is reported, not just the first.

use std::sync::LazyLock;

use kernel::error::field::{FieldError, FieldErrors};
use platform::text::{
    char_len, is_valid_email, is_valid_phone, sanitize_email, sanitize_optional, sanitize_text,
};
use regex::Regex;

use crate::domain::entities::{ContactForm, Inquiry};

static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:https?://)?(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .expect("invalid website pattern")
});

/// `$5,000`, `5000`, `10k`, `2.5m`
const AMOUNT: &str = r"\$?\s*(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?\s*[km]?";

static BUDGET_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:(?:under|over|up to|less than|more than|around|about|from)\s+)?{AMOUNT}(?:\s*\+|\s*(?:-|–|to)\s*{AMOUNT})?(?:\s*(?:usd|/\s*mo(?:nth)?))?$"
    ))
    .expect("invalid budget pattern")
});

static BUDGET_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:flexible|not sure|unsure|tbd|undecided|to be determined)$")
        .expect("invalid budget keyword pattern")
});

/// Length limits, in characters
#[derive(Debug, Clone)]
pub struct ContactRules {
    pub name_min: usize,
    pub name_max: usize,
    /// Company and service
    pub short_field_max: usize,
    pub website_max: usize,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            name_min: 2,
            name_max: 100,
            short_field_max: 100,
            website_max: 2048,
            message_min: 10,
            message_max: 5000,
        }
    }
}

/// Optional website URL; scheme may be omitted
pub fn is_valid_website(website: &str) -> bool {
    WEBSITE.is_match(website)
}

/// An amount, a range, an open-ended amount or an "undecided" answer
pub fn is_valid_budget(budget: &str) -> bool {
    let budget = budget.trim();
    BUDGET_WORDS.is_match(budget) || BUDGET_RANGE.is_match(budget)
}

/// Sanitize and check `form`
pub fn validate_form(form: &ContactForm, rules: &ContactRules) -> Result<Inquiry, Vec<FieldError>> {
    let mut errors = FieldErrors::new();

    let name = sanitize_text(&form.name);
    if errors.require("name", &name) {
        errors.check(
            (rules.name_min..=rules.name_max).contains(&char_len(&name)),
            "name",
            format!(
                "name must be between {} and {} characters",
                rules.name_min, rules.name_max
            ),
        );
    }

    let email = sanitize_email(&form.email);
    if errors.require("email", &email) {
        errors.check(
            is_valid_email(&email),
            "email",
            "Please enter a valid email address",
        );
    }

    let phone = sanitize_optional(form.phone.as_deref());
    if let Some(phone) = &phone {
        errors.check(
            is_valid_phone(phone),
            "phone",
            "Please enter a valid phone number",
        );
    }

    let company = sanitize_optional(form.company.as_deref());
    if let Some(company) = &company {
        check_max(&mut errors, "company", company, rules.short_field_max);
    }

    let service = sanitize_optional(form.service.as_deref());
    if let Some(service) = &service {
        check_max(&mut errors, "service", service, rules.short_field_max);
    }

    let website = sanitize_optional(form.website.as_deref());
    if let Some(website) = &website {
        errors.check(
            char_len(website) <= rules.website_max && is_valid_website(website),
            "website",
            "Please enter a valid website address",
        );
    }

    let budget = sanitize_optional(form.budget.as_deref());
    if let Some(budget) = &budget {
        errors.check(
            is_valid_budget(budget),
            "budget",
            "budget must be an amount or range (e.g. $5,000 - $10,000) or \"flexible\"",
        );
    }

    let message = sanitize_text(&form.message);
    if errors.require("message", &message) {
        errors.check(
            (rules.message_min..=rules.message_max).contains(&char_len(&message)),
            "message",
            format!(
                "message must be between {} and {} characters",
                rules.message_min, rules.message_max
            ),
        );
    }

    errors.into_result()?;

    Ok(Inquiry {
        name,
        email,
        phone,
        company,
        website,
        budget,
        service,
        message,
    })
}

fn check_max(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    errors.check(
        char_len(value) <= max,
        field,
        format!("{field} must be at most {max} characters"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "Jane.Doe@Example.com".to_string(),
            message: "We would like a quote for a new website.".to_string(),
            ..Default::default()
        }
    }

    fn failing_fields(form: &ContactForm) -> Vec<String> {
        validate_form(form, &ContactRules::default())
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn test_accepts_well_formed_input() {
        let inquiry = validate_form(
            &ContactForm {
                phone: Some("+1 (555) 123-4567".to_string()),
                company: Some("Acme <b>Corp</b>".to_string()),
                website: Some("https://acme.example/about".to_string()),
                budget: Some("$5,000 - $10,000".to_string()),
                service: Some("  ".to_string()),
                ..form()
            },
            &ContactRules::default(),
        )
        .unwrap();

        assert_eq!(inquiry.email, "jane.doe@example.com");
        assert_eq!(inquiry.company.as_deref(), Some("Acme Corp"));
        assert_eq!(inquiry.service, None);
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            failing_fields(&ContactForm::default()),
            ["name", "email", "message"]
        );

        let details = validate_form(&ContactForm::default(), &ContactRules::default()).unwrap_err();
        assert_eq!(details[0].message, "name is required");
    }

    #[test]
    fn test_markup_only_counts_as_missing() {
        let fields = failing_fields(&ContactForm {
            name: "<script></script>".to_string(),
            ..form()
        });
        assert_eq!(fields, ["name"]);
    }

    #[test]
    fn test_malformed_email() {
        for email in ["plainaddress", "a@b", "two@@example.com", "a b@example.com", "x@example..com"] {
            let fields = failing_fields(&ContactForm {
                email: email.to_string(),
                ..form()
            });
            assert_eq!(fields, ["email"], "{email}");
        }
    }

    #[test]
    fn test_message_length_bounds() {
        let rules = ContactRules::default();
        let short = ContactForm {
            message: "Too short".to_string(),
            ..form()
        };
        assert_eq!(failing_fields(&short), ["message"]);

        let long = ContactForm {
            message: "a".repeat(rules.message_max + 1),
            ..form()
        };
        assert_eq!(failing_fields(&long), ["message"]);

        let exact = ContactForm {
            message: "a".repeat(rules.message_max),
            ..form()
        };
        assert!(validate_form(&exact, &rules).is_ok());
    }

    #[test]
    fn test_optional_field_formats() {
        let fields = failing_fields(&ContactForm {
            phone: Some("call me".to_string()),
            website: Some("not a site".to_string()),
            budget: Some("lots".to_string()),
            company: Some("x".repeat(101)),
            ..form()
        });
        assert_eq!(fields, ["phone", "company", "website", "budget"]);
    }

    #[test]
    fn test_website_formats() {
        assert!(is_valid_website("acme.example"));
        assert!(is_valid_website("http://www.acme.co.uk"));
        assert!(is_valid_website("https://acme.example:8080/path?q=1"));
        assert!(!is_valid_website("ftp://acme.example"));
        assert!(!is_valid_website("localhost"));
        assert!(!is_valid_website("https://"));
    }

    #[test]
    fn test_budget_heuristic() {
        for ok in [
            "$5,000",
            "5000",
            "10k-25k",
            "$10k - $25k",
            "50k+",
            "5000 to 10000",
            "under $5k",
            "$2,500/month",
            "Flexible",
            "not sure",
            "TBD",
        ] {
            assert!(is_valid_budget(ok), "{ok}");
        }
        for bad in ["lots", "5,00", "k", "$", "10k-", "cheap please"] {
            assert!(!is_valid_budget(bad), "{bad}");
        }
    }
}
