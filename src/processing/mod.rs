pub mod address;
pub mod cnp;
pub mod mrz;
pub mod ocr;
pub mod scanner;

pub use address::AddressDecomposer;
pub use cnp::decode_birth_date;
pub use mrz::{DocumentNumber, MrzDecoder};
pub use ocr::{normalize_lines, OcrProvider, TextDumpProvider};
pub use scanner::{classify, extract, Cursor, LineScanner};
