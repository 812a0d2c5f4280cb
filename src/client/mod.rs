//! Search front-end: reads a query from an input control, calls the search
//! endpoint and writes the outcome into two display regions.
//!
//! The page is modelled as ports so the cycle runs the same against a
//! terminal, a test double or anything else that can hold markup.

pub mod http;
pub mod render;

pub use http::*;
pub use render::*;

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::ClientError;

/// Identifier of the control that starts a search.
pub const SEARCH_BUTTON: &str = "searchbutton";
/// Identifier of the query input control.
pub const SEARCH_BOX: &str = "searchbox";
/// Identifier of the status region.
pub const RESPONSE_SIZE: &str = "responsesize";
/// Identifier of the result list region.
pub const URL_LIST: &str = "urllist";

/// Source of the query text, read once per activation.
pub trait InputSource: Send + Sync {
    fn read_value(&self) -> String;
}

/// A page area whose content is replaced wholesale.
pub trait DisplayRegion: Send + Sync {
    fn replace(&self, html: &str);
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchFetcher: Send + Sync {
    /// Issues `GET <path>` and decodes the body as JSON.
    async fn fetch_json(&self, path: &str) -> Result<Value, ClientError>;
}

/// Editable text held in memory.
#[derive(Debug, Default)]
pub struct TextInput {
    value: Mutex<String>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(value.into()),
        }
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = value.into();
    }
}

impl InputSource for TextInput {
    fn read_value(&self) -> String {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Display region held in memory.
#[derive(Debug)]
pub struct HtmlRegion {
    id: &'static str,
    html: Mutex<String>,
}

impl HtmlRegion {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            html: Mutex::new(String::new()),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn html(&self) -> String {
        self.html.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DisplayRegion for HtmlRegion {
    fn replace(&self, html: &str) {
        *self.html.lock().unwrap_or_else(|e| e.into_inner()) = html.to_string();
    }
}

/// Which completed response may write to the regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Every response renders when it arrives; the last one to resolve wins,
    /// even if it answers an older activation.
    #[default]
    LastResolved,
    /// A response renders only if no later activation has started.
    LatestActivation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Rendered(Rendered),
    /// A newer activation started before this response arrived.
    Superseded,
}

/// Runs one request/render cycle per activation.
///
/// Activations do not wait for each other: a second call while the first is
/// still awaiting its response issues a second request right away.
pub struct SearchTrigger {
    input: Arc<dyn InputSource>,
    fetcher: Arc<dyn SearchFetcher>,
    status: Arc<dyn DisplayRegion>,
    results: Arc<dyn DisplayRegion>,
    policy: RenderPolicy,
    generation: Arc<AtomicU64>,
}

impl SearchTrigger {
    pub fn new(
        input: Arc<dyn InputSource>,
        fetcher: Arc<dyn SearchFetcher>,
        status: Arc<dyn DisplayRegion>,
        results: Arc<dyn DisplayRegion>,
    ) -> Self {
        Self {
            input,
            fetcher,
            status,
            results,
            policy: RenderPolicy::default(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Reads the query now and returns the pending request/render cycle.
    ///
    /// The returned future owns everything it needs, so it can be spawned
    /// and outlive this call. On error the regions keep their content.
    pub fn activate(
        &self,
    ) -> impl Future<Output = Result<Activation, ClientError>> + Send + 'static {
        let cycle = Cycle {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            query: self.input.read_value(),
            latest: self.generation.clone(),
            policy: self.policy,
            fetcher: self.fetcher.clone(),
            status: self.status.clone(),
            results: self.results.clone(),
        };
        cycle.run()
    }
}

struct Cycle {
    generation: u64,
    query: String,
    latest: Arc<AtomicU64>,
    policy: RenderPolicy,
    fetcher: Arc<dyn SearchFetcher>,
    status: Arc<dyn DisplayRegion>,
    results: Arc<dyn DisplayRegion>,
}

impl Cycle {
    async fn run(self) -> Result<Activation, ClientError> {
        let generation = self.generation;
        let path = search_path(&self.query);
        debug!(generation, "Fetching {}", path);

        let rendered = match self.fetch_and_render(&path).await {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(generation, "Search for {:?} failed: {}", self.query, e);
                return Err(e);
            }
        };

        if self.policy == RenderPolicy::LatestActivation
            && self.latest.load(Ordering::SeqCst) != generation
        {
            debug!(generation, "Dropping response superseded by a newer search");
            return Ok(Activation::Superseded);
        }

        self.status.replace(&rendered.status);
        self.results.replace(&rendered.results);
        Ok(Activation::Rendered(rendered))
    }

    async fn fetch_and_render(&self, path: &str) -> Result<Rendered, ClientError> {
        let body = self.fetcher.fetch_json(path).await?;
        let result_set = ResultSet::from_value(&body)?;
        render(&result_set)
    }
}
