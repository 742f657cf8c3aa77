use crate::jira::Resource;
use crate::model::{Error, Result};
use futures::{stream, Stream, StreamExt};
use serde_json::Value;
use std::pin::pin;
use tracing::debug;

/// One page of raw records and whether the server reported it as the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub values: Vec<Value>,
    pub is_last: bool,
}

impl Page {
    pub fn new(values: Vec<Value>, is_last: bool) -> Self {
        Self { values, is_last }
    }

    /// Reads the page envelope returned by the agile API.
    ///
    /// `isLast` wins when present. Issue listings omit it and carry `total`
    /// instead; without either the page is taken as the last one.
    ///
    /// A missing records array reads as an empty page. A payload that is not
    /// an object, or whose records key holds anything but an array, is an error.
    pub fn from_payload(resource: &Resource, start_at: usize, payload: &Value) -> Result<Self> {
        let Some(envelope) = payload.as_object() else {
            return Err(Error::PageShape {
                path: resource.path(),
                detail: "payload is not a JSON object".to_string(),
            });
        };
        let key = resource.records_key();
        let values = match envelope.get(key) {
            None => Vec::new(),
            Some(Value::Array(values)) => values.clone(),
            Some(other) => {
                return Err(Error::PageShape {
                    path: resource.path(),
                    detail: format!("'{key}' is not an array: {other}"),
                })
            }
        };
        let is_last = match payload["isLast"].as_bool() {
            Some(is_last) => is_last,
            None => payload["total"]
                .as_u64()
                .map_or(true, |total| (start_at + values.len()) as u64 >= total),
        };
        Ok(Self::new(values, is_last))
    }
}

pub trait PageSource {
    async fn fetch_page(
        &self,
        resource: &Resource,
        start_at: usize,
        page_size: usize,
    ) -> Result<Page>;
}

pub type PageProgress<'a> = Box<dyn FnMut(usize) + 'a>;

/// Lazily walks `resource` page by page, starting over at offset zero on every call.
///
/// Each request starts where the previous page ended. The stream ends after a
/// page marked as last, after an empty page, or right after the first error.
pub fn pages<'a, S: PageSource>(
    source: &'a S,
    resource: &'a Resource,
    page_size: usize,
) -> impl Stream<Item = Result<Vec<Value>>> + 'a {
    stream::unfold(Some(0usize), move |cursor| async move {
        let Some(start_at) = cursor else {
            return None;
        };
        debug!(?resource, start_at, page_size, "requesting page");
        match source.fetch_page(resource, start_at, page_size).await {
            Ok(page) => {
                let fetched = page.values.len();
                let next = if page.is_last || fetched == 0 {
                    None
                } else {
                    Some(start_at + fetched)
                };
                Some((Ok(page.values), next))
            }
            Err(err) => Some((Err(err), None)),
        }
    })
}

/// Collects every record of `resource`, reporting the running total after each page.
pub async fn fetch_all<S: PageSource>(
    source: &S,
    resource: &Resource,
    page_size: usize,
    mut progress: PageProgress<'_>,
) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    let mut stream = pin!(pages(source, resource, page_size));
    while let Some(page) = stream.next().await {
        records.extend(page?);
        progress(records.len());
    }
    debug!(?resource, records = records.len(), "fetched all pages");
    Ok(records)
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
