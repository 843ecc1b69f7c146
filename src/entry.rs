//! Documentation entry generation.
//!
//! One entry is produced per source file that carried at least one
//! annotation. It is an exported object literal typed as
//! `ApiDocumentationParams`:
//!
//! ```text
//! export const usersDocumentationFindOne: ApiDocumentationParams = {
//! isAuth: true,
//! ok: {
//! type: UserDto
//! },
//! params: [
//! { name: 'id' }
//! ],
//! };
//! ```

use crate::annotation::ScannedAnnotations;
use crate::cli::ListSections;
use crate::extractor::{extract_argument, extract_response, ResponseFragment};
use log::warn;

/// Type annotation written on every generated constant.
pub const ENTRY_TYPE: &str = "ApiDocumentationParams";

/// Builds the exported constant name for a file: the directory name,
/// `Documentation`, and the base name with its first character upper-cased.
///
/// `constant_name("users", "findOne")` is `usersDocumentationFindOne`.
pub fn constant_name(directory_name: &str, base_name: &str) -> String {
    let mut chars = base_name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{}Documentation{}", directory_name, capitalized)
}

/// Structured content of one generated documentation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationEntry {
    /// Exported constant name
    pub constant_name: String,
    /// Whether the `@ApiCookieAuth()` marker was present
    pub is_auth: bool,
    /// Response fragments in scan order
    pub responses: Vec<ResponseFragment>,
    /// `@ApiParam` arguments in scan order
    pub params: Vec<String>,
    /// `@ApiQuery` arguments in scan order
    pub queries: Vec<String>,
}

impl DocumentationEntry {
    /// Extracts fragments from the scanned annotations of one file.
    ///
    /// Response decorators that yield no fragment are logged and left out.
    pub fn build(directory_name: &str, base_name: &str, scanned: &ScannedAnnotations) -> Self {
        let mut responses = Vec::new();
        for occurrence in &scanned.responses {
            match extract_response(occurrence) {
                Some(fragment) => responses.push(fragment),
                None => {
                    warn!("Invalid input format for decorator in file: {}", base_name);
                    warn!("decorator: {}", occurrence);
                }
            }
        }

        Self {
            constant_name: constant_name(directory_name, base_name),
            is_auth: scanned.cookie_auth,
            responses,
            params: scanned.params.iter().filter_map(|p| extract_argument(p)).collect(),
            queries: scanned.queries.iter().filter_map(|q| extract_argument(q)).collect(),
        }
    }

    /// Renders the entry as source text, ending with a newline.
    pub fn render(&self, list_sections: ListSections) -> String {
        let mut out = format!("export const {}: {} = {{\n", self.constant_name, ENTRY_TYPE);

        if self.is_auth {
            out.push_str("isAuth: true,\n");
        }

        for response in &self.responses {
            out.push_str(&format!("{}: {},\n", response.field_name(), response.render_value()));
        }

        push_list_section(&mut out, "params", &self.params, list_sections);
        push_list_section(&mut out, "queries", &self.queries, list_sections);

        out.push_str("};\n");
        out
    }
}

fn push_list_section(out: &mut String, field: &str, items: &[String], list_sections: ListSections) {
    if !items.is_empty() {
        out.push_str(&format!("{}: [\n{}\n],\n", field, items.join(",\n")));
    } else if list_sections == ListSections::AlwaysEmit {
        out.push_str(&format!("{}: [],\n", field));
    }
}
