pub mod details;
pub mod format;

pub use details::DetailsValidator;
pub use format::FormatValidator;
