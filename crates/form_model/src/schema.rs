//! Validation rules for the contact form record.

use crate::form::{ContactFormValues, Field, FieldErrors};
use regex::Regex;
use std::sync::OnceLock;

pub const REQUIRED: &str = "Field is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 4 characters";
pub const BAD_PHONE: &str = "Incorrect phone number format";
pub const BAD_EMAIL: &str = "Incorrect email format";
pub const NO_DOCUMENTS: &str = "You haven't added documents";
pub const AGREEMENT_REQUIRED: &str = "Your agreement is required";

/// Counted in UTF-16 code units, like browser string lengths.
const NAME_MIN_UNITS: usize = 4;

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
    })
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    // regex has no lookaround, so the dot rules are checked by hand
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

/// Check a single field. Returns the message to show, if any.
pub fn validate_field(field: Field, values: &ContactFormValues) -> Option<&'static str> {
    match field {
        Field::Name => {
            if values.name.is_empty() {
                Some(REQUIRED)
            } else if values.name.encode_utf16().count() < NAME_MIN_UNITS {
                Some(NAME_TOO_SHORT)
            } else {
                None
            }
        }
        Field::Phone => {
            if values.phone.is_empty() {
                Some(REQUIRED)
            } else if !is_valid_phone(&values.phone) {
                Some(BAD_PHONE)
            } else {
                None
            }
        }
        Field::Email => {
            if values.email.is_empty() {
                Some(REQUIRED)
            } else if !is_valid_email(&values.email) {
                Some(BAD_EMAIL)
            } else {
                None
            }
        }
        Field::Skills => values.skills.is_empty().then_some(REQUIRED),
        Field::Files => values.files.is_empty().then_some(NO_DOCUMENTS),
        Field::Agreement => (!values.agreement).then_some(AGREEMENT_REQUIRED),
    }
}

/// Check the whole record.
pub fn validate(values: &ContactFormValues) -> FieldErrors {
    Field::all()
        .iter()
        .filter_map(|&field| validate_field(field, values).map(|m| (field, m.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        let mut values = ContactFormValues::default();
        assert_eq!(validate_field(Field::Name, &values), Some(REQUIRED));
        values.name = "Bob".into();
        assert_eq!(validate_field(Field::Name, &values), Some(NAME_TOO_SHORT));
        values.name = "Jörg".into();
        assert_eq!(validate_field(Field::Name, &values), None);
    }

    #[test]
    fn test_name_length_in_utf16_units() {
        let mut values = ContactFormValues::default();
        // each emoji is a surrogate pair
        values.name = "😀😀".into();
        assert_eq!(validate_field(Field::Name, &values), None);
        values.name = "😀".into();
        assert_eq!(validate_field(Field::Name, &values), Some(NAME_TOO_SHORT));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("+(123) 456-7890"));
        assert!(is_valid_phone("123.456.789012"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("123-456-78901234"));
        assert!(!is_valid_phone("abc-def-ghij"));
        // non-ASCII digits are not accepted
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_phone_messages() {
        let mut values = ContactFormValues::default();
        assert_eq!(validate_field(Field::Phone, &values), Some(REQUIRED));
        values.phone = "555".into();
        assert_eq!(validate_field(Field::Phone, &values), Some(BAD_PHONE));
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("First.Last+tag@Mail.Example.ORG"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_collection_and_flag_rules() {
        let values = ContactFormValues::default();
        assert_eq!(validate_field(Field::Skills, &values), Some(REQUIRED));
        assert_eq!(validate_field(Field::Files, &values), Some(NO_DOCUMENTS));
        assert_eq!(
            validate_field(Field::Agreement, &values),
            Some(AGREEMENT_REQUIRED)
        );
    }

    #[test]
    fn test_validate_collects_in_field_order() {
        let mut values = ContactFormValues::default();
        values.name = "Alice".into();
        values.agreement = true;

        let errors = validate(&values);
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![Field::Phone, Field::Email, Field::Skills, Field::Files]
        );
    }
}
