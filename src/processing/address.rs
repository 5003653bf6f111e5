//! Keyword-anchored decomposition of the address and birthplace lines.
//!
//! Each component is looked up independently, so a token the OCR dropped
//! only costs that one component.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{AddressField, UNDEFINED};

fn anchor(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}", pattern)).unwrap()
}

lazy_static! {
    static ref COUNTY_ANCHORS: Vec<Regex> = vec![anchor(r"jud\.")];
    // Municipality, town, village; tried in this order
    static ref LOCALITY_ANCHORS: Vec<Regex> = vec![
        anchor(r"mun\."),
        anchor(r"ors\."),
        anchor(r"sat\b"),
    ];
    static ref STREET_ANCHORS: Vec<Regex> = vec![anchor(r"str\."), anchor(r"bd\.")];
    static ref NUMBER_ANCHORS: Vec<Regex> = vec![anchor(r"nr\.")];
    static ref STAIRCASE_ANCHORS: Vec<Regex> = vec![anchor(r"sc\.")];
    static ref BUILDING_ANCHORS: Vec<Regex> = vec![anchor(r"bl\.")];
    static ref FLOOR_ANCHORS: Vec<Regex> = vec![anchor(r"et\.")];
    static ref APARTMENT_ANCHORS: Vec<Regex> = vec![anchor(r"ap\.")];
}

impl AddressField {
    fn anchors(&self) -> &'static [Regex] {
        match self {
            AddressField::County => &COUNTY_ANCHORS,
            AddressField::Locality => &LOCALITY_ANCHORS,
            AddressField::Street => &STREET_ANCHORS,
            AddressField::Number => &NUMBER_ANCHORS,
            AddressField::Staircase => &STAIRCASE_ANCHORS,
            AddressField::Building => &BUILDING_ANCHORS,
            AddressField::Floor => &FLOOR_ANCHORS,
            AddressField::Apartment => &APARTMENT_ANCHORS,
        }
    }
}

/// Outcome of looking for a field's anchors in one line.
enum Anchored {
    Value(String),
    /// An anchor is present but nothing follows it.
    Empty,
    Absent,
}

pub struct AddressDecomposer;

impl AddressDecomposer {
    /// Like [`AddressDecomposer::extract`], with misses mapped to `"nedefinit"`.
    pub fn decompose(line: &str, field: AddressField) -> String {
        Self::extract(line, field).unwrap_or_else(|| UNDEFINED.to_string())
    }

    /// Pull one component out of `line`, or `None` if nothing identifies it.
    pub fn extract(line: &str, field: AddressField) -> Option<String> {
        let value = match field {
            AddressField::Street => Self::street(line),
            _ => match Self::anchored_token(line, field.anchors()) {
                Anchored::Value(token) => Some(token),
                // An anchor with nothing after it still rules out the comma fallback
                Anchored::Empty => None,
                Anchored::Absent => Self::last_comma_segment(line),
            },
        };
        debug!("{:?} in {:?}: {:?}", field, line, value);
        value
    }

    /// Value of the first anchor present in the line: the token that follows it,
    /// up to the next space.
    fn anchored_token(line: &str, anchors: &[Regex]) -> Anchored {
        let mut outcome = Anchored::Absent;
        for anchor in anchors {
            let Some(found) = anchor.find(line) else {
                continue;
            };
            match line[found.end()..].split_whitespace().next() {
                Some(token) => return Anchored::Value(token.to_string()),
                None => outcome = Anchored::Empty,
            }
        }
        outcome
    }

    /// Catch-all for lines without anchors: whatever follows the last comma.
    fn last_comma_segment(line: &str) -> Option<String> {
        let (_, tail) = line.rsplit_once(',')?;
        let tail = tail.trim();
        if tail.is_empty() {
            None
        } else {
            Some(tail.to_string())
        }
    }

    /// Street name: from the street anchor up to the number anchor or the next
    /// comma, whichever comes first.
    fn street(line: &str) -> Option<String> {
        let found = STREET_ANCHORS.iter().find_map(|anchor| anchor.find(line))?;
        let rest = &line[found.end()..];

        let number_at = NUMBER_ANCHORS[0].find(rest).map(|m| m.start());
        let comma_at = rest.find(',');
        let end = match (number_at, comma_at) {
            (Some(n), Some(c)) => n.min(c),
            (Some(n), None) => n,
            (None, Some(c)) => c,
            (None, None) => rest.len(),
        };

        let street = rest[..end].trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
        if street.is_empty() {
            None
        } else {
            Some(street.to_string())
        }
    }
}
