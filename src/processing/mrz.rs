use lazy_static::lazy_static;
use regex::Regex;

/// Separator between MRZ name fields.
pub const NAME_MARKER: &str = "<<";
/// MRZ padding character.
pub const FILLER: char = '<';

// Document type + issuing country, e.g. "IDROU"
const NAME_LINE_PREFIX: usize = 5;
const SERIES_LEN: usize = 2;
const NUMBER_LEN: usize = 6;

lazy_static! {
    static ref FILLER_RUN: Regex = Regex::new(r"<+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Series and number read from the second MRZ line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumber {
    pub series: String,
    pub number: String,
}

pub struct MrzDecoder;

impl MrzDecoder {
    /// Decode the holder's name from the MRZ name line.
    ///
    /// Every filler run becomes a single space, so the surname/given-name
    /// boundary is not preserved.
    pub fn decode_name(line: &str) -> String {
        let names: String = line.chars().skip(NAME_LINE_PREFIX).collect();
        let spaced = FILLER_RUN.replace_all(&names, " ");
        WHITESPACE_RUN.replace_all(spaced.trim(), " ").into_owned()
    }

    /// Read the 2-character series and the following 6-character number.
    ///
    /// Returns `None` when the line is too short to hold both. Check digits
    /// are not verified.
    pub fn decode_document_number(line: &str) -> Option<DocumentNumber> {
        let chars: Vec<char> = line.trim().chars().collect();
        if chars.len() < SERIES_LEN + NUMBER_LEN {
            return None;
        }

        Some(DocumentNumber {
            series: chars[..SERIES_LEN].iter().collect(),
            number: chars[SERIES_LEN..SERIES_LEN + NUMBER_LEN].iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_name() {
        assert_eq!(
            MrzDecoder::decode_name("P<ROUPOPESCU<<ION<<<<<<<<<<<<<<<<<<<"),
            "POPESCU ION"
        );
        assert_eq!(
            MrzDecoder::decode_name("IDROUIONESCU<<MARIA<ELENA<<<<<<<<<<<"),
            "IONESCU MARIA ELENA"
        );
    }

    #[test]
    fn test_decode_name_collapses_spaces() {
        assert_eq!(MrzDecoder::decode_name("IDROU  POP <<  ANA  <<<"), "POP ANA");
        assert_eq!(MrzDecoder::decode_name("ID<<"), "");
    }

    #[test]
    fn test_decode_document_number() {
        assert_eq!(
            MrzDecoder::decode_document_number("AX1234567<1234567890<<<<<<0"),
            Some(DocumentNumber {
                series: "AX".to_string(),
                number: "123456".to_string(),
            })
        );
        assert_eq!(
            MrzDecoder::decode_document_number("  KX839941<  "),
            Some(DocumentNumber {
                series: "KX".to_string(),
                number: "839941".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_document_number_too_short() {
        assert_eq!(MrzDecoder::decode_document_number("AX123<"), None);
    }
}
