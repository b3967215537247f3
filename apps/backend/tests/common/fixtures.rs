//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Create a set name request body.
pub fn set_name_request(name: &str) -> serde_json::Value {
    json!({ "name": name })
}

/// Create a card request body.
pub fn card_request(term: &str, definition: &str) -> serde_json::Value {
    json!({ "term": term, "definition": definition })
}

/// Create a star request body.
pub fn star_request(starred: bool) -> serde_json::Value {
    json!({ "starred": starred })
}

/// Create round settings with shuffling off so card order is predictable.
pub fn round_settings(round_length: usize, question_types: &[&str]) -> serde_json::Value {
    json!({
        "roundLength": round_length,
        "questionTypes": question_types,
        "answerWith": "term",
        "shuffleTerms": false,
        "allowTypos": true
    })
}

/// Create an answer request body.
pub fn answer_request(answer: Option<&str>) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Generate a unique set name to keep tests independent.
pub fn unique_set_name(prefix: &str) -> String {
    format!("{} {}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Percent-encode spaces for use in a path segment.
pub fn path_segment(name: &str) -> String {
    name.replace(' ', "%20")
}
