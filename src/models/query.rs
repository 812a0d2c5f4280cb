use std::collections::BTreeSet;

/// Keyword that separates alternatives in a search term.
pub const OR_KEYWORD: &str = "OR";

/// A parsed search term.
///
/// `"apple banana OR pie"` becomes two alternatives, `{apple, banana}` and
/// `{pie}`. A page matches when it contains every word of at least one
/// alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    alternatives: Vec<BTreeSet<String>>,
}

impl SearchQuery {
    pub fn parse(term: &str) -> Self {
        let mut alternatives = Vec::new();
        let mut current = BTreeSet::new();

        for token in term.split_whitespace() {
            if token == OR_KEYWORD {
                if !current.is_empty() {
                    alternatives.push(std::mem::take(&mut current));
                }
            } else {
                current.insert(token.to_string());
            }
        }
        if !current.is_empty() {
            alternatives.push(current);
        }

        Self { alternatives }
    }

    pub fn alternatives(&self) -> &[BTreeSet<String>] {
        &self.alternatives
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}
