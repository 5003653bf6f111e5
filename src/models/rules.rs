use crate::models::FieldKey;

/// Rules a reviewed extraction must satisfy before documents are generated.
#[derive(Debug, Clone)]
pub struct ReviewRules {
    pub rules: Vec<ValidationRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    RequiredField(FieldKey),
    FieldLength(FieldKey, usize), // Field, expected length in chars
}

const BASIC_REQUIRED: [FieldKey; 7] = [
    FieldKey::Name,
    FieldKey::Series,
    FieldKey::Number,
    FieldKey::NationalId,
    FieldKey::IssuedBy,
    FieldKey::AddressRaw,
    FieldKey::ValidityDate,
];

const DETAILED_REQUIRED: [FieldKey; 11] = [
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
    FieldKey::AddressApartment,
];

impl ReviewRules {
    /// Fields shown on the short review form.
    pub fn basic() -> Self {
        let mut rules: Vec<ValidationRule> = BASIC_REQUIRED
            .iter()
            .map(|&key| ValidationRule::RequiredField(key))
            .collect();

        rules.push(ValidationRule::FieldLength(FieldKey::Series, 2));
        rules.push(ValidationRule::FieldLength(FieldKey::Number, 6));
        rules.push(ValidationRule::FieldLength(FieldKey::NationalId, 13));

        ReviewRules { rules }
    }

    /// Short form plus birth data and the decomposed address.
    pub fn detailed() -> Self {
        let mut rules = Self::basic().rules;
        rules.extend(
            DETAILED_REQUIRED
                .iter()
                .map(|&key| ValidationRule::RequiredField(key)),
        );
        ReviewRules { rules }
    }
}
