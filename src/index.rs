//! Roll-up index over every documentation entry generated for a directory.
//!
//! The index imports each generated constant and exposes them through one
//! exported mapping keyed by the upper-snake-case form of the file's base name.

use crate::cli::IndexOrder;
use std::collections::VecDeque;

/// Import and mapping data for one generated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Upper-snake-case key derived from the base name (`findOne` → `FIND_ONE`)
    pub key: String,
    /// Constant exported by the entry file
    pub constant_name: String,
    /// Import statement pulling the constant into the index
    pub import_line: String,
}

impl IndexEntry {
    pub fn new(base_name: &str, constant_name: &str) -> Self {
        Self {
            key: upper_snake_case(base_name),
            constant_name: constant_name.to_string(),
            import_line: format!("import {{ {} }} from './{}';", constant_name, base_name),
        }
    }

    fn mapping_line(&self) -> String {
        format!("  {}: {},", self.key, self.constant_name)
    }
}

/// Converts a file base name into an upper-snake-case key.
///
/// Words are split at lower-to-upper and digit-to-upper transitions, at the
/// end of an acronym, and at any run of non-alphanumeric characters.
pub fn upper_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 && !out.is_empty() && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }

        out.extend(c.to_uppercase());
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Accumulates index entries while a directory is processed.
pub struct IndexAggregator {
    order: IndexOrder,
    entries: VecDeque<IndexEntry>,
}

impl IndexAggregator {
    pub fn new(order: IndexOrder) -> Self {
        Self {
            order,
            entries: VecDeque::new(),
        }
    }

    /// Adds an entry. With [`IndexOrder::Prepend`] it lands before every
    /// entry pushed so far.
    pub fn push(&mut self, entry: IndexEntry) {
        match self.order {
            IndexOrder::Prepend => self.entries.push_front(entry),
            IndexOrder::Insertion => self.entries.push_back(entry),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in the order they will be rendered.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Renders the import lines followed by the exported mapping literal.
    pub fn render(&self, directory_name: &str) -> String {
        let mut out = String::new();

        for entry in &self.entries {
            out.push_str(&entry.import_line);
            out.push('\n');
        }

        out.push_str(&format!("\nexport const {}Documentation = {{\n", directory_name));
        for entry in &self.entries {
            out.push_str(&entry.mapping_line());
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::constant_name;
    use pretty_assertions::assert_eq;

    fn entry(base_name: &str) -> IndexEntry {
        IndexEntry::new(base_name, &constant_name("users", base_name))
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(upper_snake_case("a"), "A");
        assert_eq!(upper_snake_case("findOne"), "FIND_ONE");
        assert_eq!(upper_snake_case("FindAllUsers"), "FIND_ALL_USERS");
        assert_eq!(upper_snake_case("get-user"), "GET_USER");
        assert_eq!(upper_snake_case("users.controller"), "USERS_CONTROLLER");
        assert_eq!(upper_snake_case("getHTTPStatus"), "GET_HTTP_STATUS");
        assert_eq!(upper_snake_case("v2Users"), "V2_USERS");
        assert_eq!(upper_snake_case("already_snake"), "ALREADY_SNAKE");
        assert_eq!(upper_snake_case("__weird--name__"), "WEIRD_NAME");
    }

    #[test]
    fn test_index_entry_lines() {
        let e = entry("findOne");

        assert_eq!(e.key, "FIND_ONE");
        assert_eq!(e.constant_name, "usersDocumentationFindOne");
        assert_eq!(e.import_line, "import { usersDocumentationFindOne } from './findOne';");
    }

    #[test]
    fn test_prepend_order_reverses_accumulation() {
        let mut aggregator = IndexAggregator::new(IndexOrder::Prepend);
        aggregator.push(entry("a"));
        aggregator.push(entry("b"));

        assert_eq!(
            aggregator.render("users"),
            "import { usersDocumentationB } from './b';\n\
             import { usersDocumentationA } from './a';\n\
             \n\
             export const usersDocumentation = {\n  \
             B: usersDocumentationB,\n  \
             A: usersDocumentationA,\n\
             };\n"
        );
    }

    #[test]
    fn test_insertion_order() {
        let mut aggregator = IndexAggregator::new(IndexOrder::Insertion);
        aggregator.push(entry("a"));
        aggregator.push(entry("b"));

        let keys: Vec<_> = aggregator.entries().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(aggregator.len(), 2);
    }

    #[test]
    fn test_empty_aggregator() {
        let aggregator = IndexAggregator::new(IndexOrder::Prepend);

        assert!(aggregator.is_empty());
        assert_eq!(aggregator.render("users"), "\nexport const usersDocumentation = {\n};\n");
    }
}
