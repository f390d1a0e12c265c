//! Validation for the contact and newsletter forms
//!
//! Each field carries a [`FieldRule`]. Checks run in a fixed order
//! (required, pattern, minimum length, numeric range) and the first failure
//! reports the rule's user-facing message.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\+]?[1-9][\d]{0,3}[\s\-\(\)]?[\d\s\-\(\)]{7,15}$").expect("phone pattern is valid")
});

/// Message shown when a travel date lies in the past
pub const PAST_DATE_MESSAGE: &str = "Travel date cannot be in the past";

/// Format patterns a text field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Letters and spaces only
    PersonName,
    Email,
    /// Loose international phone number
    Phone,
}

impl Pattern {
    fn regex(&self) -> &'static Regex {
        match self {
            Pattern::PersonName => &PERSON_NAME,
            Pattern::Email => &EMAIL,
            Pattern::Phone => &PHONE,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

/// Check an email address the way the contact and newsletter forms do
pub fn is_valid_email(email: &str) -> bool {
    Pattern::Email.matches(email.trim())
}

/// Current value of a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Checkbox state
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

/// Validation rule for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Shown for any failure of this rule
    pub message: String,
}

impl FieldRule {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            required: true,
            min_length: None,
            pattern: None,
            min: None,
            max: None,
            message: message.into(),
        }
    }

    pub fn optional(message: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(message)
        }
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Which check a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Pattern,
    TooShort,
    OutOfRange,
    PastDate,
}

/// A failed field with the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FieldError {}

/// Validate a single field value against its rule
pub fn validate_field(field: &str, value: &FieldValue, rule: &FieldRule) -> Result<(), FieldError> {
    let fail = |kind| {
        Err(FieldError {
            field: field.to_string(),
            kind,
            message: rule.message.clone(),
        })
    };

    if value.is_empty() {
        return if rule.required {
            fail(FieldErrorKind::Required)
        } else {
            Ok(())
        };
    }

    let FieldValue::Text(text) = value else {
        // a ticked checkbox has nothing else to check
        return Ok(());
    };
    let text = text.trim();

    if let Some(pattern) = rule.pattern {
        if !pattern.matches(text) {
            return fail(FieldErrorKind::Pattern);
        }
    }

    if let Some(min_length) = rule.min_length {
        if text.chars().count() < min_length {
            return fail(FieldErrorKind::TooShort);
        }
    }

    if rule.min.is_some() || rule.max.is_some() {
        let Ok(number) = text.parse::<i64>() else {
            return fail(FieldErrorKind::OutOfRange);
        };
        if rule.min.is_some_and(|min| number < min) || rule.max.is_some_and(|max| number > max) {
            return fail(FieldErrorKind::OutOfRange);
        }
    }

    Ok(())
}

/// Rules for the contact page form, in display order
pub fn contact_form_rules() -> Vec<(&'static str, FieldRule)> {
    vec![
        (
            "firstName",
            FieldRule::required(
                "Please enter a valid first name (letters only, minimum 2 characters)",
            )
            .min_length(2)
            .pattern(Pattern::PersonName),
        ),
        (
            "lastName",
            FieldRule::required("Please enter a valid last name (letters only, minimum 2 characters)")
                .min_length(2)
                .pattern(Pattern::PersonName),
        ),
        (
            "email",
            FieldRule::required("Please enter a valid email address").pattern(Pattern::Email),
        ),
        (
            "phone",
            FieldRule::required("Please enter a valid phone number").pattern(Pattern::Phone),
        ),
        (
            "destination",
            FieldRule::required("Please select a destination"),
        ),
        (
            "travelDates",
            FieldRule::required("Please select your travel dates"),
        ),
        (
            "travelers",
            FieldRule::required("Please enter number of travelers (1-20)").range(1, 20),
        ),
        ("budget", FieldRule::required("Please select your budget range")),
        (
            "message",
            FieldRule::required("Please enter a message (minimum 10 characters)").min_length(10),
        ),
        (
            "terms",
            FieldRule::required("Please accept the terms and conditions"),
        ),
    ]
}

/// Validate every field that is present in `values`.
/// Fields absent from the form are skipped.
pub fn validate_form(
    rules: &[(&'static str, FieldRule)],
    values: &HashMap<String, FieldValue>,
) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|(name, rule)| {
            let value = values.get(*name)?;
            validate_field(name, value, rule).err()
        })
        .collect()
}

/// Parse an `<input type="date">` value and reject dates before `today`
pub fn validate_travel_date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let past = || FieldError {
        field: "travelDates".to_string(),
        kind: FieldErrorKind::PastDate,
        message: PAST_DATE_MESSAGE.to_string(),
    };

    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FieldError {
        kind: FieldErrorKind::Required,
        message: "Please select your travel dates".to_string(),
        ..past()
    })?;

    if date < today {
        return Err(past());
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> FieldRule {
        contact_form_rules()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| r)
            .unwrap()
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::text(value)
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jen@example.com"));
        assert!(is_valid_email("  jen@example.co.uk "));
        assert!(!is_valid_email("jen@example"));
        assert!(!is_valid_email("jen example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(Pattern::Phone.matches("229-456-9188"));
        assert!(Pattern::Phone.matches("+1 (229) 456-9188"));
        assert!(Pattern::Phone.matches("2294569188"));
        assert!(!Pattern::Phone.matches("0123456789"));
        assert!(!Pattern::Phone.matches("12345"));
        assert!(!Pattern::Phone.matches("call me maybe"));
    }

    #[test]
    fn test_required_text() {
        let err = validate_field("email", &text("   "), &rule("email")).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Required);
        assert_eq!(err.to_string(), "Please enter a valid email address");
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_required_checkbox() {
        let terms = rule("terms");
        assert_eq!(
            validate_field("terms", &FieldValue::Checked(false), &terms)
                .unwrap_err()
                .kind,
            FieldErrorKind::Required
        );
        assert!(validate_field("terms", &FieldValue::Checked(true), &terms).is_ok());
    }

    #[test]
    fn test_name_checks_pattern_before_length() {
        let first = rule("firstName");
        assert_eq!(
            validate_field("firstName", &text("J3n"), &first).unwrap_err().kind,
            FieldErrorKind::Pattern
        );
        assert_eq!(
            validate_field("firstName", &text("J"), &first).unwrap_err().kind,
            FieldErrorKind::TooShort
        );
        assert!(validate_field("firstName", &text("Mary Ann"), &first).is_ok());
    }

    #[test]
    fn test_travelers_range() {
        let travelers = rule("travelers");
        assert!(validate_field("travelers", &text("1"), &travelers).is_ok());
        assert!(validate_field("travelers", &text("20"), &travelers).is_ok());
        for bad in ["0", "21", "-3", "two"] {
            assert_eq!(
                validate_field("travelers", &text(bad), &travelers)
                    .unwrap_err()
                    .kind,
                FieldErrorKind::OutOfRange,
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_optional_empty_field_passes() {
        let rule = FieldRule::optional("bad").min_length(5);
        assert!(validate_field("notes", &text(""), &rule).is_ok());
        assert!(validate_field("notes", &text("abc"), &rule).is_err());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = FieldRule::required("short").min_length(3);
        assert!(validate_field("x", &text("héé"), &rule).is_ok());
    }

    #[test]
    fn test_validate_form_collects_errors_for_present_fields() {
        let rules = contact_form_rules();
        let mut values = HashMap::new();
        values.insert("firstName".to_string(), text("Jen"));
        values.insert("email".to_string(), text("not-an-email"));
        values.insert("message".to_string(), text("short"));
        values.insert("terms".to_string(), FieldValue::Checked(false));

        let errors = validate_form(&rules, &values);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "message", "terms"]);
    }

    #[test]
    fn test_validate_form_all_valid() {
        let rules = contact_form_rules();
        let values: HashMap<String, FieldValue> = [
            ("firstName", text("Jen")),
            ("lastName", text("Smith")),
            ("email", text("jen@example.com")),
            ("phone", text("229-456-9188")),
            ("destination", text("europe")),
            ("travelDates", text("2030-05-01")),
            ("travelers", text("2")),
            ("budget", text("5000-10000")),
            ("message", text("Looking for a Mediterranean cruise.")),
            ("terms", FieldValue::Checked(true)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        assert!(validate_form(&rules, &values).is_empty());
    }

    #[test]
    fn test_travel_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        assert_eq!(
            validate_travel_date("2026-10-18", today),
            Ok(today),
            "today is allowed"
        );
        let err = validate_travel_date("2026-10-17", today).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::PastDate);
        assert_eq!(err.message, PAST_DATE_MESSAGE);

        let err = validate_travel_date("soon", today).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Required);
    }
}
