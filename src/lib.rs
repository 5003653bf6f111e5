pub mod card_processor;
pub mod contract;
pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;

pub use card_processor::{IdCardProcessor, ProcessedCard};
pub use processing::extract;
