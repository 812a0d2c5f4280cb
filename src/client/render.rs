use askama::Template;
use serde_json::Value;

use crate::error::ClientError;

/// One page record of a search response.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub url: String,
    pub title: String,
}

/// Decoded `/search` response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    /// The first element carried a truthy `message`; nothing else is read.
    Message(String),
    Pages(Vec<PageLink>),
}

impl ResultSet {
    pub fn from_value(value: &Value) -> Result<Self, ClientError> {
        let items = value.as_array().ok_or(ClientError::NotAnArray)?;

        if let Some(message) = items
            .first()
            .and_then(|first| first.get("message"))
            .filter(|message| is_truthy(message))
        {
            return Ok(ResultSet::Message(display_text(message)));
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Ok(PageLink {
                    url: string_field(item, index, "url")?,
                    title: string_field(item, index, "title")?,
                })
            })
            .collect::<Result<Vec<_>, ClientError>>()
            .map(ResultSet::Pages)
    }
}

/// Markup for the two display regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Content of the `responsesize` region.
    pub status: String,
    /// Content of the `urllist` region.
    pub results: String,
}

#[derive(Template)]
#[template(source = "<p>{{ message }}</p>", ext = "html")]
struct StatusMessage<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(source = "<p>{{ count }} websites retrieved</p>", ext = "html")]
struct RetrievedCount {
    count: usize,
}

// items are separated by a single newline, with none before the first
#[derive(Template)]
#[template(
    source = "<ul>{% for page in pages %}{% if !loop.first %}\n{% endif %}<li><a href=\"{{ page.url }}\">{{ page.title }}</a></li>{% endfor %}</ul>",
    ext = "html"
)]
struct UrlList<'a> {
    pages: &'a [PageLink],
}

/// Builds the markup for both regions. Interpolated values are HTML-escaped.
pub fn render(result_set: &ResultSet) -> Result<Rendered, ClientError> {
    let rendered = match result_set {
        ResultSet::Message(message) => Rendered {
            status: StatusMessage { message: message.as_str() }.render()?,
            results: UrlList { pages: &[] }.render()?,
        },
        ResultSet::Pages(pages) => Rendered {
            status: RetrievedCount { count: pages.len() }.render()?,
            results: UrlList { pages: pages.as_slice() }.render()?,
        },
    };
    Ok(rendered)
}

fn string_field(item: &Value, index: usize, field: &'static str) -> Result<String, ClientError> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ClientError::MalformedRecord { index, field })
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .map(|n| n != 0.0 && !n.is_nan())
            .unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
