//! Page cursor for Galileo-FT list endpoints.
//!
//! The API pages by zero-based index. The cursor is carried through the host
//! as a decimal string and only converted at the syncer boundary.

use connector_core::{ConnectorError, ConnectorResult};

/// Zero-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PageCursor(u32);

impl PageCursor {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn page(self) -> u32 {
        self.0
    }

    /// Decode a host page token. The empty token is the first page; any
    /// other token must be plain ASCII digits.
    pub fn from_token(token: &str) -> ConnectorResult<Self> {
        if token.is_empty() {
            return Ok(Self::default());
        }

        let invalid = || ConnectorError::InvalidPageToken {
            token: token.to_string(),
        };
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse::<u32>().map(Self).map_err(|_| invalid())
    }

    /// The cursor after this one, if `total_pages` says there is one.
    pub fn next(self, total_pages: u32) -> Option<Self> {
        let next = self.0.checked_add(1)?;
        (next < total_pages).then_some(Self(next))
    }

    /// Token for the page after this one, or `None` when exhausted.
    pub fn next_token(self, total_pages: u32) -> Option<String> {
        self.next(total_pages).map(|cursor| cursor.to_token())
    }

    pub fn to_token(self) -> String {
        self.0.to_string()
    }
}
