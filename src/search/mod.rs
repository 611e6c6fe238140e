//! # Search Filter
//!
//! Free-text filtering of record or primitive sequences. The query is
//! tokenized into words and matched case-insensitively as substrings.
//!
//! Malformed elements never abort a search: an element missing the
//! requested field, or holding a value with no text form, is skipped
//! for that (field, token) pair with a WARN diagnostic.

use serde_json::Value;

use crate::observe::{Logger, Severity};
use crate::record::value_as_text;
use crate::text::get_words;

/// Filters elements by a free-text query.
///
/// With a non-empty `fields` list, each element is treated as a record
/// and matched field by field: for every (field, token) pair, every
/// element whose field value contains the token (case-folded substring)
/// is appended to the result. Duplicates are kept by contract: an
/// element matching two tokens, or on two fields, appears twice.
///
/// With an empty `fields` list, elements are matched directly as
/// primitives coerced to text.
pub fn search_filtering(items: &[Value], query: &str, fields: &[String]) -> Vec<Value> {
    let tokens: Vec<String> = get_words(query)
        .into_iter()
        .map(|token| token.to_lowercase())
        .collect();

    let mut matches = Vec::new();

    if fields.is_empty() {
        for token in &tokens {
            for item in items {
                match value_as_text(item) {
                    Some(text) => {
                        if text.to_lowercase().contains(token.as_str()) {
                            matches.push(item.clone());
                        }
                    }
                    None => skip(item, "<element>", token),
                }
            }
        }
        return matches;
    }

    for field in fields {
        for token in &tokens {
            for item in items {
                let field_value = item.as_object().and_then(|record| record.get(field));
                let text = field_value.and_then(value_as_text);

                match text {
                    Some(text) => {
                        if text.to_lowercase().contains(token.as_str()) {
                            matches.push(item.clone());
                        }
                    }
                    None => skip(item, field, token),
                }
            }
        }
    }

    matches
}

/// SilentSkip diagnostic: the element stays out of this (field, token)
/// pair's matches, the search keeps going.
fn skip(item: &Value, field: &str, token: &str) {
    Logger::log(
        Severity::Warn,
        "search_element_skipped",
        &[
            ("field", field),
            ("token", token),
            ("element", &item.to_string()),
        ],
    );
}
