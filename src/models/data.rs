use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::ScanError;

/// Placeholder written when an address component cannot be determined.
pub const UNDEFINED: &str = "nedefinit";

/// Identity attributes the scanner can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    Series,
    Number,
    NationalId,
    BirthDate,
    IssuedBy,
    AddressRaw,
    ValidityDate,
    BirthCounty,
    BirthCountry,
    AddressCounty,
    AddressLocality,
    AddressStreet,
    AddressNumber,
    AddressBuilding,
    AddressStaircase,
    AddressFloor,
    AddressApartment,
}

impl FieldKey {
    pub const ALL: [FieldKey; 18] = [
        FieldKey::Name,
        FieldKey::Series,
        FieldKey::Number,
        FieldKey::NationalId,
        FieldKey::BirthDate,
        FieldKey::IssuedBy,
        FieldKey::AddressRaw,
        FieldKey::ValidityDate,
        FieldKey::BirthCounty,
        FieldKey::BirthCountry,
        FieldKey::AddressCounty,
        FieldKey::AddressLocality,
        FieldKey::AddressStreet,
        FieldKey::AddressNumber,
        FieldKey::AddressBuilding,
        FieldKey::AddressStaircase,
        FieldKey::AddressFloor,
        FieldKey::AddressApartment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Series => "series",
            FieldKey::Number => "number",
            FieldKey::NationalId => "national_id",
            FieldKey::BirthDate => "birth_date",
            FieldKey::IssuedBy => "issued_by",
            FieldKey::AddressRaw => "address_raw",
            FieldKey::ValidityDate => "validity_date",
            FieldKey::BirthCounty => "birth_county",
            FieldKey::BirthCountry => "birth_country",
            FieldKey::AddressCounty => "address_county",
            FieldKey::AddressLocality => "address_locality",
            FieldKey::AddressStreet => "address_street",
            FieldKey::AddressNumber => "address_number",
            FieldKey::AddressBuilding => "address_building",
            FieldKey::AddressStaircase => "address_staircase",
            FieldKey::AddressFloor => "address_floor",
            FieldKey::AddressApartment => "address_apartment",
        }
    }

    /// Human-readable label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Series => "Series",
            FieldKey::Number => "Number",
            FieldKey::NationalId => "CNP",
            FieldKey::BirthDate => "Date of birth",
            FieldKey::IssuedBy => "Issued by",
            FieldKey::AddressRaw => "Address",
            FieldKey::ValidityDate => "Validity date",
            FieldKey::BirthCounty => "Birth county",
            FieldKey::BirthCountry => "Birth locality",
            FieldKey::AddressCounty => "Address county",
            FieldKey::AddressLocality => "Address locality",
            FieldKey::AddressStreet => "Street",
            FieldKey::AddressNumber => "Street number",
            FieldKey::AddressBuilding => "Building",
            FieldKey::AddressStaircase => "Staircase",
            FieldKey::AddressFloor => "Floor",
            FieldKey::AddressApartment => "Apartment",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor family a line belongs to, in the scanner's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Name,
    NationalId,
    DocumentNumber,
    IssuingAuthority,
    BirthplaceMarker,
    AddressMarker,
    ValidityMarker,
    Unrecognized,
}

/// Address components the decomposer knows how to pull out of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    County,
    Locality,
    Street,
    Number,
    Staircase,
    Building,
    Floor,
    Apartment,
}

/// Fields recovered from one OCR result.
///
/// Absent keys were not detected. `skipped` lists anchors that were found but
/// could not be completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    #[serde(flatten)]
    pub fields: BTreeMap<FieldKey, String>,
    #[serde(skip)]
    pub skipped: Vec<ScanError>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later writes for the same key overwrite earlier ones.
    pub fn insert(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<String> {
        self.fields.remove(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    MissingField,
    FieldLength,
    MissingDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}
