use std::collections::HashMap;

/// Position of a page in the dataset. Pages keep the order they appear in
/// the data file, so a lower id means the page came earlier.
pub type PageId = usize;

/// A single web page from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    url: String,
    title: String,
    content: Vec<String>,
    term_frequencies: HashMap<String, usize>,
}

impl Page {
    pub fn new(url: impl Into<String>, title: impl Into<String>, content: Vec<String>) -> Self {
        let mut term_frequencies = HashMap::new();
        for word in &content {
            *term_frequencies.entry(word.clone()).or_insert(0) += 1;
        }

        Self {
            url: url.into(),
            title: title.into(),
            content,
            term_frequencies,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Number of times `term` occurs in the page content.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }

    pub fn term_frequencies(&self) -> &HashMap<String, usize> {
        &self.term_frequencies
    }

    pub fn total_terms(&self) -> usize {
        self.content.len()
    }
}
