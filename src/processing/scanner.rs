//! Single-pass scanner turning ordered OCR lines into identity fields.

use log::{debug, info, warn};

use crate::models::{AddressField, ExtractionResult, FieldKey, LineKind};
use crate::processing::address::AddressDecomposer;
use crate::processing::cnp::decode_birth_date;
use crate::processing::mrz::{MrzDecoder, FILLER, NAME_MARKER};
use crate::utils::ScanError;

pub const CNP_TOKEN: &str = "CNP";
pub const AUTHORITY_MARKER: &str = "SPCLEP";

// Bilingual/trilingual labels as printed on the card, plus common OCR spellings
pub const BIRTHPLACE_MARKERS: [&str; 6] = [
    "Loc nastere",
    "Loc naştere",
    "Loc naștere",
    "Lieu de naissance",
    "Place of birth",
    "Place of Birth",
];
pub const ADDRESS_MARKERS: [&str; 4] = ["Domiciliu", "Adresse", "Adress", "Address"];
pub const VALIDITY_MARKERS: [&str; 4] = ["Valabilitate", "Validité", "Validite", "Validity"];

/// Assign a line to its anchor family. The first matching family wins.
pub fn classify(line: &str) -> LineKind {
    let contains_any = |markers: &[&str]| markers.iter().any(|m| line.contains(m));

    if line.contains(NAME_MARKER) {
        LineKind::Name
    } else if line.contains(CNP_TOKEN) {
        LineKind::NationalId
    } else if line.contains(FILLER) {
        LineKind::DocumentNumber
    } else if line.contains(AUTHORITY_MARKER) {
        LineKind::IssuingAuthority
    } else if contains_any(&BIRTHPLACE_MARKERS) {
        LineKind::BirthplaceMarker
    } else if contains_any(&ADDRESS_MARKERS) {
        LineKind::AddressMarker
    } else if contains_any(&VALIDITY_MARKERS) {
        LineKind::ValidityMarker
    } else {
        LineKind::Unrecognized
    }
}

/// Position of the scan within a line sequence of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Cursor { pos: 0, len }
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.len
    }

    pub fn advance_by(self, n: usize) -> Cursor {
        Cursor {
            pos: self.pos.saturating_add(n),
            len: self.len,
        }
    }

    /// Index `offset` lines ahead, if it is still inside the sequence.
    pub fn peek(&self, offset: usize) -> Option<usize> {
        let idx = self.pos.checked_add(offset)?;
        (idx < self.len).then_some(idx)
    }
}

pub struct LineScanner<'a> {
    lines: &'a [String],
    result: ExtractionResult,
}

impl<'a> LineScanner<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        LineScanner {
            lines,
            result: ExtractionResult::new(),
        }
    }

    /// Scan every line once and return whatever fields were found.
    pub fn extract(mut self) -> ExtractionResult {
        let mut cursor = Cursor::new(self.lines.len());

        while !cursor.is_done() {
            let kind = classify(self.lines[cursor.pos].trim());
            let consumed = match self.apply(kind, cursor) {
                Ok(extra) => extra,
                Err(e) => {
                    warn!("Skipping anchor: {}", e);
                    self.result.skipped.push(e);
                    0
                }
            };
            cursor = cursor.advance_by(1 + consumed);
        }

        info!(
            "Extracted {} field(s) from {} line(s), {} anchor(s) skipped",
            self.result.len(),
            self.lines.len(),
            self.result.skipped.len()
        );
        self.result
    }

    /// Handle one anchor line; returns how many following lines it consumed.
    fn apply(&mut self, kind: LineKind, cursor: Cursor) -> Result<usize, ScanError> {
        let lines = self.lines;
        let line = lines[cursor.pos].trim();
        if kind != LineKind::Unrecognized {
            debug!("Line {} is {:?}: {:?}", cursor.pos, kind, line);
        }

        match kind {
            LineKind::Name => {
                self.write(FieldKey::Name, MrzDecoder::decode_name(line));
            }
            LineKind::NationalId => {
                let cnp = line.replace(CNP_TOKEN, "").trim().to_string();
                match decode_birth_date(&cnp) {
                    Some(date) => self.write(FieldKey::BirthDate, date),
                    // Never keep a date decoded from an earlier CNP line
                    None => {
                        self.result.remove(FieldKey::BirthDate);
                    }
                }
                self.write(FieldKey::NationalId, cnp);
            }
            LineKind::DocumentNumber => {
                let doc = MrzDecoder::decode_document_number(line).ok_or(ScanError::ShortMrzLine {
                    line: cursor.pos,
                    len: line.chars().count(),
                })?;
                self.write(FieldKey::Series, doc.series);
                self.write(FieldKey::Number, doc.number);
            }
            LineKind::IssuingAuthority => {
                self.write(FieldKey::IssuedBy, line);
            }
            LineKind::BirthplaceMarker => {
                let place = self.lookahead(kind, cursor, 1)?;
                self.write(
                    FieldKey::BirthCounty,
                    AddressDecomposer::decompose(place, AddressField::County),
                );
                self.write(
                    FieldKey::BirthCountry,
                    AddressDecomposer::decompose(place, AddressField::Locality),
                );
            }
            LineKind::AddressMarker => {
                let first = self.lookahead(kind, cursor, 1)?;
                let second = self.lookahead(kind, cursor, 2)?;
                self.write_residence(first, second);
                return Ok(2);
            }
            LineKind::ValidityMarker => {
                let raw = self.lookahead(kind, cursor, 2)?;
                let validity = match raw.split_once('-') {
                    Some((before, _)) => before.trim(),
                    None => raw,
                };
                self.write(FieldKey::ValidityDate, validity);
            }
            LineKind::Unrecognized => {}
        }

        Ok(0)
    }

    fn write_residence(&mut self, first: &str, second: &str) {
        self.write(FieldKey::AddressRaw, format!("{} {}", first, second));
        self.write(
            FieldKey::AddressCounty,
            AddressDecomposer::decompose(first, AddressField::County),
        );
        self.write(
            FieldKey::AddressLocality,
            AddressDecomposer::decompose(first, AddressField::Locality),
        );

        let street = AddressDecomposer::extract(first, AddressField::Street)
            .unwrap_or_else(|| AddressDecomposer::decompose(second, AddressField::Street));
        self.write(FieldKey::AddressStreet, street);

        for (key, field) in [
            (FieldKey::AddressNumber, AddressField::Number),
            (FieldKey::AddressBuilding, AddressField::Building),
            (FieldKey::AddressStaircase, AddressField::Staircase),
            (FieldKey::AddressFloor, AddressField::Floor),
            (FieldKey::AddressApartment, AddressField::Apartment),
        ] {
            self.write(key, AddressDecomposer::decompose(second, field));
        }
    }

    fn lookahead(&self, anchor: LineKind, cursor: Cursor, offset: usize) -> Result<&'a str, ScanError> {
        let lines: &'a [String] = self.lines;
        cursor
            .peek(offset)
            .map(|idx| lines[idx].trim())
            .ok_or(ScanError::MalformedTrailingBlock {
                anchor,
                line: cursor.pos,
                needed: offset,
            })
    }

    fn write(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        debug!("{} = {:?}", key, value);
        self.result.insert(key, value);
    }
}

/// Extract identity fields from OCR lines in reading order.
pub fn extract(lines: &[String]) -> ExtractionResult {
    LineScanner::new(lines).extract()
}
