use std::fs;
use std::path::Path;

use log::info;

use crate::utils::{IdCardError, Result};

/// Source of recognised text lines for one card image.
///
/// Implementations must return lines in top-to-bottom reading order, trimmed,
/// with empty lines removed.
pub trait OcrProvider {
    fn extract_lines(&self, source: &Path) -> Result<Vec<String>>;
}

/// Reads OCR output that was saved to a text file, one recognised line per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextDumpProvider;

impl OcrProvider for TextDumpProvider {
    fn extract_lines(&self, source: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(source).map_err(|e| {
            IdCardError::Ocr(format!("Failed to read OCR dump {}: {}", source.display(), e))
        })?;

        let lines = normalize_lines(&text);
        info!("Loaded {} OCR line(s) from {}", lines.len(), source.display());
        Ok(lines)
    }
}

/// Split raw OCR text into trimmed, non-empty lines, keeping their order.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_lines() {
        let text = "  ROMANIA \r\n\n\tCNP 1800102123456\n   \nSPCLEP Cluj\n";
        assert_eq!(
            normalize_lines(text),
            vec!["ROMANIA", "CNP 1800102123456", "SPCLEP Cluj"]
        );
    }

    #[test]
    fn test_text_dump_provider() {
        let mut dump = NamedTempFile::new().unwrap();
        writeln!(dump, "IDROUPOP<<ANA<<<").unwrap();
        writeln!(dump).unwrap();
        writeln!(dump, " SPCLEP Arad ").unwrap();

        let lines = TextDumpProvider.extract_lines(dump.path()).unwrap();
        assert_eq!(lines, vec!["IDROUPOP<<ANA<<<", "SPCLEP Arad"]);
    }

    #[test]
    fn test_missing_dump_is_an_ocr_error() {
        let err = TextDumpProvider
            .extract_lines(Path::new("/nonexistent/dump.txt"))
            .unwrap_err();
        assert!(matches!(err, IdCardError::Ocr(_)));
    }
}
