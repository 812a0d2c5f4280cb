use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Page, SearchQuery};
use crate::repositories::Index;

/// Scores how relevant a page is for a query. Higher is better.
///
/// Both built-in methods score each alternative of the query on its own and
/// keep the best one, so `a OR b` ranks a page by whichever side it fits.
pub trait ScoringMethod: Send + Sync {
    fn score(&self, page: &Page, query: &SearchQuery, index: &Index) -> f64;
}

/// Sum of raw occurrence counts of the query words.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermFrequencyScore;

impl ScoringMethod for TermFrequencyScore {
    fn score(&self, page: &Page, query: &SearchQuery, _index: &Index) -> f64 {
        query
            .alternatives()
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|word| page.term_frequency(word) as f64)
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    }
}

/// Term frequency normalised by page length, weighted by `ln(N / df)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfScore;

impl ScoringMethod for TfIdfScore {
    fn score(&self, page: &Page, query: &SearchQuery, index: &Index) -> f64 {
        let total_documents = index.total_documents() as f64;
        let total_terms = page.total_terms() as f64;

        query
            .alternatives()
            .iter()
            .map(|words| {
                words
                    .iter()
                    .filter_map(|word| {
                        let tf = page.term_frequency(word);
                        let df = index.document_frequency(word);
                        (tf > 0 && df > 0).then(|| {
                            (tf as f64 / total_terms) * (total_documents / df as f64).ln()
                        })
                    })
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringKind {
    #[default]
    Tf,
    TfIdf,
}

impl ScoringKind {
    pub fn method(self) -> Box<dyn ScoringMethod> {
        match self {
            ScoringKind::Tf => Box::new(TermFrequencyScore),
            ScoringKind::TfIdf => Box::new(TfIdfScore),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringKind::Tf => "tf",
            ScoringKind::TfIdf => "tfidf",
        }
    }
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tf" => Ok(ScoringKind::Tf),
            "tfidf" | "tf-idf" => Ok(ScoringKind::TfIdf),
            other => anyhow::bail!("unknown scoring method: {}", other),
        }
    }
}
