//! # Text Utilities
//!
//! Word tokenization for the search filter, plus email validation.

pub mod email;
pub mod words;

pub use email::is_valid_email;
pub use words::get_words;
