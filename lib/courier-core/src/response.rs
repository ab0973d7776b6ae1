//! HTTP response handling.
//!
//! [`Response`] is the raw wire result of an [`HttpClient`](crate::HttpClient) call.
//! The transport turns it into a JSON payload, and the
//! [envelope rule](crate::envelope) turns that payload into models.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Value;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl Response<Bytes> {
    /// Turn a response into a JSON payload.
    ///
    /// Fails with an HTTP error on non-2xx statuses, an empty-body error when
    /// there is nothing to decode, and a decode error when the body is not JSON.
    ///
    /// # Errors
    ///
    /// Every error returned here is a "no data" failure.
    pub fn into_payload(self) -> crate::Result<Value> {
        if !self.is_success() {
            let reason = http::StatusCode::from_u16(self.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unexpected status");
            return Err(crate::Error::http_with_body(self.status, reason, self.body));
        }
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(crate::Error::EmptyBody);
        }
        crate::from_json(&self.body)
    }
}
