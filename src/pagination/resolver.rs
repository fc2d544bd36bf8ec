//! Link header resolution
//!
//! Pulls the URL for one relation out of a `link` header value of the form
//! `<url>; rel="first", <url>; rel="next", <url>; rel="last"`.

use super::types::RelMatch;

/// Separator between entries of a `link` header value
const ENTRY_SEPARATOR: &str = ", ";

/// Separator between an entry's URL and its parameters
const PARAM_SEPARATOR: &str = "; ";

/// Resolves relations from `link` header values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkHeaderResolver {
    pub rel_match: RelMatch,
}

impl LinkHeaderResolver {
    /// Create a resolver with the given matching rule
    pub fn new(rel_match: RelMatch) -> Self {
        Self { rel_match }
    }

    /// URL registered for `relation`, or `None` if no entry matches
    pub fn resolve(&self, header: &str, relation: &str) -> Option<String> {
        resolve_link_with(header, relation, self.rel_match)
    }
}

/// Resolve `relation` with containment matching
///
/// The first entry whose relation part contains `relation` wins. Its URL
/// is returned with the enclosing angle brackets removed.
pub fn resolve_link(header: &str, relation: &str) -> Option<String> {
    resolve_link_with(header, relation, RelMatch::Contains)
}

/// Resolve `relation` with an explicit matching rule
pub fn resolve_link_with(header: &str, relation: &str, rel_match: RelMatch) -> Option<String> {
    header
        .split(ENTRY_SEPARATOR)
        .filter_map(|entry| entry.split_once(PARAM_SEPARATOR))
        .find(|(_, params)| matches_relation(params, relation, rel_match))
        .map(|(target, _)| strip_brackets(target).to_string())
}

fn matches_relation(params: &str, relation: &str, rel_match: RelMatch) -> bool {
    match rel_match {
        RelMatch::Contains => params.contains(relation),
        RelMatch::Exact => params
            .split(';')
            .filter_map(|param| param.trim().strip_prefix("rel="))
            .flat_map(|value| {
                value
                    .trim_matches(|c: char| c == '"' || c == '\'')
                    .split_whitespace()
            })
            .any(|token| token.eq_ignore_ascii_case(relation)),
    }
}

/// Drop the first and last character (`<` and `>`)
fn strip_brackets(target: &str) -> &str {
    let mut chars = target.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
