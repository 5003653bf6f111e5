use crate::contract::ContractDetails;
use crate::models::{FormatValidationResult, ValidationIssue, ValidationIssueType};
use crate::utils::{IdCardError, Result};

/// Checks the operator-supplied values before a card is processed.
pub struct DetailsValidator;

impl DetailsValidator {
    pub fn validate(details: &ContractDetails) -> FormatValidationResult {
        let fields = [
            ("registration_number", "Registration number", &details.registration_number),
            ("phone", "Phone number", &details.phone),
            ("place", "Place", &details.place),
            ("city", "City", &details.city),
        ];

        let issues: Vec<ValidationIssue> = fields
            .iter()
            .filter(|(_, _, value)| value.trim().is_empty())
            .map(|(field, label, _)| ValidationIssue {
                issue_type: ValidationIssueType::MissingDetail,
                field: field.to_string(),
                message: format!("{} is missing", label),
            })
            .collect();

        FormatValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Like [`DetailsValidator::validate`], but a failed check is an error.
    pub fn check(details: &ContractDetails) -> Result<()> {
        let validation = Self::validate(details);
        if validation.is_valid {
            return Ok(());
        }

        let messages: Vec<&str> = validation.issues.iter().map(|i| i.message.as_str()).collect();
        Err(IdCardError::Validation(messages.join("; ")))
    }
}
