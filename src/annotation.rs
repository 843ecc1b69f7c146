//! Annotation scanning over free-form source text.
//!
//! Recognizes four shapes of decorator without parsing the surrounding code:
//!
//! - `@Api<Kind>Response({ ... })`
//! - `@ApiParam({ ... })`
//! - `@ApiQuery({ ... })`
//! - the bare `@ApiCookieAuth()` marker
//!
//! Decorator bodies are matched up to the first closing brace, so an object
//! literal nested inside a decorator body ends the match early and the
//! decorator is not recognized.

use regex::Regex;
use std::sync::LazyLock;

static RE_RESPONSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Api\w*Response\(\{[^}]*\}\)").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@ApiParam\(\{[^}]*\}\)").unwrap());

static RE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@ApiQuery\(\{[^}]*\}\)").unwrap());

/// Literal marker flagging an endpoint as cookie-authenticated.
pub const COOKIE_AUTH_MARKER: &str = "@ApiCookieAuth()";

/// Annotation occurrences found in one file, grouped by category.
///
/// Each list keeps the order in which the occurrences appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedAnnotations {
    /// `@Api<Kind>Response({...})` occurrences
    pub responses: Vec<String>,
    /// `@ApiParam({...})` occurrences
    pub params: Vec<String>,
    /// `@ApiQuery({...})` occurrences
    pub queries: Vec<String>,
    /// Whether `@ApiCookieAuth()` appears anywhere in the text
    pub cookie_auth: bool,
}

impl ScannedAnnotations {
    /// True when no category matched at all.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
            && self.params.is_empty()
            && self.queries.is_empty()
            && !self.cookie_auth
    }
}

/// Scans `text` for every recognized annotation.
pub fn scan_annotations(text: &str) -> ScannedAnnotations {
    ScannedAnnotations {
        responses: find_all(&RE_RESPONSE, text),
        params: find_all(&RE_PARAM, text),
        queries: find_all(&RE_QUERY, text),
        cookie_auth: text.contains(COOKIE_AUTH_MARKER),
    }
}

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
