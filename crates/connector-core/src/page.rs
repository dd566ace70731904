//! Paged results exchanged with the host.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::ConnectorResult;

/// One page of results plus the opaque token for the next page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPage<T> {
    pub items: Vec<T>,
    /// `None` once the sequence is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl<T> SyncPage<T> {
    /// A final page with no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
        }
    }

    /// An empty final page.
    pub fn empty() -> Self {
        Self::last(Vec::new())
    }

    /// Set the continuation token.
    #[must_use]
    pub fn with_next_page_token(mut self, token: Option<String>) -> Self {
        self.next_page_token = token;
        self
    }

    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// Drive a paged operation from the first page until the token runs out,
/// collecting every item.
///
/// `fetch` receives the page token to request (empty for the first page).
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> ConnectorResult<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ConnectorResult<SyncPage<T>>>,
{
    let mut items = Vec::new();
    let mut token = String::new();

    loop {
        let page = fetch(token).await?;
        tracing::debug!(
            items = page.items.len(),
            has_more = page.has_more(),
            "Fetched page"
        );
        items.extend(page.items);

        match page.next_page_token {
            Some(next) => token = next,
            None => return Ok(items),
        }
    }
}
