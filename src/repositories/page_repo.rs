use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::Page;
use crate::repositories::Index;

/// Marker that opens a page in the dataset file.
pub const PAGE_MARKER: &str = "*PAGE";

/// Reads the line-oriented dataset format:
///
/// ```text
/// *PAGE:http://example.com/
/// Example title
/// word
/// another
/// ```
///
/// The first non-blank line after the marker is the title, each further
/// non-blank line is one content word. Pages without a title or without any
/// words are skipped.
pub struct PageLoader;

struct PendingPage {
    url: String,
    title: Option<String>,
    content: Vec<String>,
}

impl PageLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Index, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let index = Self::parse(text.lines());
        info!(
            "Loaded {} pages with {} distinct terms from {}",
            index.total_documents(),
            index.vocabulary_size(),
            path.display()
        );
        Ok(index)
    }

    pub fn parse<'a, I>(lines: I) -> Index
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Index::new();
        let mut pending: Option<PendingPage> = None;

        for line in lines {
            if let Some(rest) = line.strip_prefix(PAGE_MARKER) {
                if let Some(page) = pending.take() {
                    Self::finish(&mut index, page);
                }
                let url = rest.strip_prefix(':').unwrap_or(rest).trim();
                pending = Some(PendingPage {
                    url: url.to_string(),
                    title: None,
                    content: Vec::new(),
                });
                continue;
            }

            let Some(page) = pending.as_mut() else {
                continue;
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if page.title.is_none() {
                page.title = Some(word.to_string());
            } else {
                page.content.push(word.to_string());
            }
        }

        if let Some(page) = pending {
            Self::finish(&mut index, page);
        }
        index
    }

    fn finish(index: &mut Index, pending: PendingPage) {
        match pending.title {
            Some(title) if !pending.content.is_empty() => {
                index.add_page(Page::new(pending.url, title, pending.content));
            }
            _ => debug!("Skipping page {} without title or content", pending.url),
        }
    }
}
