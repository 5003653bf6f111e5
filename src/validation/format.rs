use log::info;

use crate::models::{
    ExtractionResult, FieldKey, FormatValidationResult, ReviewRules, ValidationIssue,
    ValidationIssueType, ValidationRule,
};

pub struct FormatValidator;

impl FormatValidator {
    /// Check an extraction against the review rules, reporting every failure.
    pub fn validate(result: &ExtractionResult, rules: &ReviewRules) -> FormatValidationResult {
        let mut issues = Vec::new();

        for rule in &rules.rules {
            match *rule {
                ValidationRule::RequiredField(key) => {
                    if Self::value(result, key).is_none() {
                        issues.push(ValidationIssue {
                            issue_type: ValidationIssueType::MissingField,
                            field: key.to_string(),
                            message: format!("{} is missing", key.label()),
                        });
                    }
                }
                ValidationRule::FieldLength(key, expected) => {
                    // Absence is reported by RequiredField, not here
                    if let Some(value) = Self::value(result, key) {
                        let len = value.chars().count();
                        if len != expected {
                            issues.push(ValidationIssue {
                                issue_type: ValidationIssueType::FieldLength,
                                field: key.to_string(),
                                message: format!(
                                    "{} should have {} characters, found {}",
                                    key.label(),
                                    expected,
                                    len
                                ),
                            });
                        }
                    }
                }
            }
        }

        info!("Format validation: {} issue(s)", issues.len());
        FormatValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    fn value(result: &ExtractionResult, key: FieldKey) -> Option<&str> {
        result.get(key).map(str::trim).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNDEFINED;

    fn complete_basic() -> ExtractionResult {
        let mut result = ExtractionResult::new();
        result.insert(FieldKey::Name, "POPESCU ION");
        result.insert(FieldKey::Series, "AX");
        result.insert(FieldKey::Number, "123456");
        result.insert(FieldKey::NationalId, "1800102123456");
        result.insert(FieldKey::IssuedBy, "SPCLEP Cluj-Napoca");
        result.insert(FieldKey::AddressRaw, "Jud.CJ Mun.Cluj-Napoca Str.Horea nr.3");
        result.insert(FieldKey::ValidityDate, "18.06.14");
        result
    }

    #[test]
    fn test_basic_form_valid() {
        let validation = FormatValidator::validate(&complete_basic(), &ReviewRules::basic());
        assert!(validation.is_valid);
        assert!(validation.issues.is_empty());
    }

    #[test]
    fn test_missing_and_blank_fields() {
        let mut result = complete_basic();
        result.fields.remove(&FieldKey::IssuedBy);
        result.insert(FieldKey::Name, "   ");

        let validation = FormatValidator::validate(&result, &ReviewRules::basic());
        assert!(!validation.is_valid);
        let fields: Vec<&str> = validation.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "issued_by"]);
        assert_eq!(validation.issues[0].message, "Name is missing");
    }

    #[test]
    fn test_field_length() {
        let mut result = complete_basic();
        result.insert(FieldKey::NationalId, "18001021234");

        let validation = FormatValidator::validate(&result, &ReviewRules::basic());
        assert_eq!(validation.issues.len(), 1);
        assert_eq!(validation.issues[0].issue_type, ValidationIssueType::FieldLength);
        assert_eq!(
            validation.issues[0].message,
            "CNP should have 13 characters, found 11"
        );
    }

    #[test]
    fn test_detailed_form_accepts_sentinel() {
        let mut result = complete_basic();
        for key in [
            FieldKey::BirthCounty,
            FieldKey::BirthCountry,
            FieldKey::BirthDate,
            FieldKey::AddressCounty,
            FieldKey::AddressLocality,
            FieldKey::AddressStreet,
            FieldKey::AddressNumber,
            FieldKey::AddressBuilding,
            FieldKey::AddressStaircase,
            FieldKey::AddressFloor,
        ] {
            result.insert(key, UNDEFINED);
        }

        let validation = FormatValidator::validate(&result, &ReviewRules::detailed());
        assert!(!validation.is_valid);
        assert_eq!(validation.issues.len(), 1);
        assert_eq!(validation.issues[0].field, "address_apartment");
    }
}
