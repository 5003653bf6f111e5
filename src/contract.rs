//! Field map handed to the contract and employee-sheet templates.
//!
//! The identity fields come from the scanner; the rest are typed in by the
//! operator or derived from the run date and configuration.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::ExtractionResult;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

lazy_static! {
    static ref PHONE_DIGITS: Regex = Regex::new(r"(\d{4})(\d{3})(\d{3})").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Values the operator supplies alongside the card image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDetails {
    pub registration_number: String,
    pub phone: String,
    pub place: String,
    pub city: String,
}

/// Group a phone number as `NNNN NNN NNN`.
pub fn format_phone_number(phone: &str) -> String {
    let compact = WHITESPACE.replace_all(phone, "");
    PHONE_DIGITS.replace_all(&compact, "$1 $2 $3").into_owned()
}

/// File stem for the generated documents of one employee.
pub fn archive_stem(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Combined placeholder map for template rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
    pub values: BTreeMap<String, String>,
}

impl TemplateData {
    pub fn build(
        result: &ExtractionResult,
        details: &ContractDetails,
        salary: u32,
        today: NaiveDate,
    ) -> Self {
        let mut values: BTreeMap<String, String> = result
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let hire_date = today + Duration::days(1);
        let extra = [
            ("registration_number", details.registration_number.clone()),
            ("phone", format_phone_number(&details.phone)),
            ("place", details.place.clone()),
            ("city", details.city.clone()),
            ("today", today.format(DATE_FORMAT).to_string()),
            ("hire_date", hire_date.format(DATE_FORMAT).to_string()),
            ("salary", salary.to_string()),
        ];
        for (key, value) in extra {
            values.insert(key.to_string(), value);
        }

        debug!("Template data has {} value(s)", values.len());
        TemplateData { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
