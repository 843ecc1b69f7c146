//! Fragment extraction from individual annotation occurrences.
//!
//! The scanner hands over whole decorator strings; this module pulls out the
//! pieces that end up in a documentation entry:
//!
//! - for responses, the kind name (`Ok` in `@ApiOkResponse`) and the object body
//! - for params and queries, the parenthesised argument text

use regex::Regex;
use std::sync::LazyLock;

static RE_RESPONSE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Api(\w+)\s*Response").unwrap());

static RE_BLOCK_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{(.*?)\}").unwrap());

static RE_CALL_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Api(?:Param|Query)\(([^)]+)\)").unwrap());

/// Name and body of a response decorator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFragment {
    /// Kind name captured between `@Api` and `Response` (e.g. `NotFound`)
    pub name: String,
    /// Text between the first pair of braces, trimmed
    pub body: String,
}

impl ResponseFragment {
    /// Field name used in the generated entry: the kind with its first
    /// character lower-cased (`NotFound` becomes `notFound`).
    pub fn field_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Object literal written for this response.
    pub fn render_value(&self) -> String {
        if self.body.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{}\n}}", self.body)
        }
    }
}

/// Extracts the kind name and body from a response decorator.
///
/// Returns `None` when the decorator has no kind between `@Api` and
/// `Response` (plain `@ApiResponse`) or carries no brace-delimited body.
pub fn extract_response(occurrence: &str) -> Option<ResponseFragment> {
    let name = RE_RESPONSE_NAME.captures(occurrence)?[1].trim().to_string();
    let body = RE_BLOCK_BODY.captures(occurrence)?[1].trim().to_string();

    Some(ResponseFragment { name, body })
}

/// Extracts the argument text of a `@ApiParam(...)` or `@ApiQuery(...)`
/// decorator, trimmed of surrounding whitespace but otherwise unchanged.
pub fn extract_argument(occurrence: &str) -> Option<String> {
    let caps = RE_CALL_ARGUMENT.captures(occurrence)?;
    Some(caps[1].trim().to_string())
}
