use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::models::{PageId, SearchQuery};
use crate::repositories::Index;
use crate::services::{ScoringMethod, SearchCache};
use crate::utils::cache_key;

/// A matching page with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPage {
    pub id: PageId,
    pub url: String,
    pub title: String,
    pub score: f64,
}

impl fmt::Display for ScoredPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "URL: {}, Title: {}, Score: {:?}", self.url, self.title, self.score)
    }
}

#[derive(Clone)]
pub struct SearchService {
    index: Arc<Index>,
    scoring: Arc<dyn ScoringMethod>,
    cache: SearchCache,
}

impl SearchService {
    pub fn new(index: Arc<Index>, scoring: Arc<dyn ScoringMethod>, cache: SearchCache) -> Self {
        Self {
            index,
            scoring,
            cache,
        }
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Ranked results for `term`, served from the cache when possible.
    pub async fn search(&self, term: &str) -> Vec<ScoredPage> {
        let key = cache_key(&[term]);
        if let Some(results) = self.cache.get(&key).await {
            debug!("Cache hit for {:?}", term);
            return results;
        }

        let results = self.rank(term);
        self.cache.set(&key, &results).await;
        results
    }

    /// Pages matching any alternative of `term`, best score first. Equal
    /// scores keep dataset order.
    pub fn rank(&self, term: &str) -> Vec<ScoredPage> {
        let query = SearchQuery::parse(term);
        let mut results: Vec<ScoredPage> = self
            .find_matching_pages(&query)
            .into_iter()
            .filter_map(|id| {
                let page = self.index.page(id)?;
                Some(ScoredPage {
                    id,
                    url: page.url().to_string(),
                    title: page.title().to_string(),
                    score: self.scoring.score(page, &query, &self.index),
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        results
    }

    pub fn page_contains_all<'a, I>(&self, id: PageId, words: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.index.page(id).is_some()
            && words.into_iter().all(|word| self.index.contains(id, word))
    }

    fn find_matching_pages(&self, query: &SearchQuery) -> BTreeSet<PageId> {
        let mut matching = BTreeSet::new();
        for words in query.alternatives() {
            let mut words = words.iter();
            let Some(first) = words.next() else {
                continue;
            };
            let mut candidates: Vec<PageId> = self.index.postings(first).to_vec();
            for word in words {
                let postings = self.index.postings(word);
                candidates.retain(|id| postings.binary_search(id).is_ok());
                if candidates.is_empty() {
                    break;
                }
            }
            matching.extend(candidates);
        }
        matching
    }
}
