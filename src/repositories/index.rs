use std::collections::HashMap;

use crate::models::{Page, PageId};

/// Inverted index over the loaded pages.
///
/// Posting lists hold each page at most once and are sorted by page id, so
/// the document frequency of a term is the length of its posting list.
#[derive(Debug, Default)]
pub struct Index {
    pages: Vec<Page>,
    postings: HashMap<String, Vec<PageId>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, page: Page) -> PageId {
        let id = self.pages.len();
        for term in page.term_frequencies().keys() {
            self.postings.entry(term.clone()).or_default().push(id);
        }
        self.pages.push(page);
        id
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    pub fn postings(&self, term: &str) -> &[PageId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).len()
    }

    pub fn total_documents(&self) -> usize {
        self.pages.len()
    }

    /// Number of distinct terms in the index.
    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    pub fn contains(&self, id: PageId, term: &str) -> bool {
        self.page(id)
            .map(|page| page.term_frequency(term) > 0)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, words: &[&str]) -> Page {
        Page::new(url, "title", words.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn empty_index_has_nothing() {
        let index = Index::new();
        assert_eq!(index.total_documents(), 0);
        assert_eq!(index.vocabulary_size(), 0);
        assert!(index.postings("word").is_empty());
        assert_eq!(index.document_frequency("word"), 0);
        assert!(!index.contains(0, "word"));
    }

    #[test]
    fn postings_list_each_page_once_in_id_order() {
        let mut index = Index::new();
        let first = index.add_page(page("http://page1.com", &["word1", "word1", "word2"]));
        let second = index.add_page(page("http://page2.com", &["word3", "word1"]));

        assert_eq!((first, second), (0, 1));
        assert_eq!(index.postings("word1"), &[0, 1]);
        assert_eq!(index.postings("word2"), &[0]);
        assert_eq!(index.document_frequency("word1"), 2);
        assert_eq!(index.document_frequency("word3"), 1);
        assert_eq!(index.vocabulary_size(), 3);
        assert!(index.contains(1, "word3"));
        assert!(!index.contains(0, "word3"));
        assert_eq!(index.page(1).map(Page::url), Some("http://page2.com"));
    }
}
