//! Request descriptors.
//!
//! A [`RequestDescriptor`] says everything about one call before it is made:
//! where it goes, how parameters travel, and which UI side effects it raises.
//! Descriptors are plain values. They are adjusted while a request is being
//! assembled and rendered into a wire [`Request`] when it fires.
//!
//! # Example
//!
//! ```
//! use courier_core::{Encoding, Method, RequestDescriptor};
//!
//! let descriptor = RequestDescriptor::new("https://api.example.com/teams", Method::Post)
//!     .with_loader(true);
//!
//! assert_eq!(descriptor.encoding(), Encoding::Json);
//! assert!(descriptor.shows_loader());
//! assert!(!descriptor.blocks_interaction());
//! ```

use std::collections::HashMap;

use http::header::CONTENT_TYPE;
use tracing::debug;

use crate::{CachePolicy, Encoding, Method, Parameters, Request, Result, encoding, params};

/// Description of a single HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    target: String,
    method: Method,
    parameters: Option<Parameters>,
    headers: Option<HashMap<String, String>>,
    encoding: Option<Encoding>,
    cache_policy: CachePolicy,
    show_loader: bool,
    block_interaction: bool,
}

impl RequestDescriptor {
    /// Create a descriptor for `target`.
    ///
    /// The target is not validated here; a malformed URL fails when the
    /// request is rendered.
    #[must_use]
    pub fn new(target: impl Into<String>, method: Method) -> Self {
        Self {
            target: target.into(),
            method,
            parameters: None,
            headers: None,
            encoding: None,
            cache_policy: CachePolicy::default(),
            show_loader: false,
            block_interaction: false,
        }
    }

    /// Set the initial parameters. `null` entries are dropped.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(params::without_nulls(parameters));
        self
    }

    /// Set the headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Override the method-implied encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the cache policy.
    #[must_use]
    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    /// Show the loading indicator while the call is in flight.
    #[must_use]
    pub fn with_loader(mut self, show: bool) -> Self {
        self.show_loader = show;
        self
    }

    /// Block user interaction while the call is in flight.
    #[must_use]
    pub fn with_interaction_blocked(mut self, block: bool) -> Self {
        self.block_interaction = block;
        self
    }

    /// Target URL (or URL template) string.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Parameters, if any were set.
    #[must_use]
    pub const fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Headers, if any were set.
    #[must_use]
    pub const fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Effective encoding: the explicit override, or the method default.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
            .unwrap_or_else(|| self.method.default_encoding())
    }

    /// Whether the encoding was set explicitly.
    #[must_use]
    pub const fn has_encoding_override(&self) -> bool {
        self.encoding.is_some()
    }

    /// Declared cache policy.
    #[must_use]
    pub const fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    /// Whether the loading indicator is shown during the call.
    #[must_use]
    pub const fn shows_loader(&self) -> bool {
        self.show_loader
    }

    /// Whether user interaction is blocked during the call.
    #[must_use]
    pub const fn blocks_interaction(&self) -> bool {
        self.block_interaction
    }

    /// Replace the method.
    ///
    /// Without an explicit encoding override, the encoding follows the new method.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Replace the headers wholesale.
    pub fn set_headers(&mut self, headers: HashMap<String, String>) {
        self.headers = Some(headers);
    }

    /// Override the encoding.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = Some(encoding);
    }

    /// Set the cache policy.
    pub fn set_cache_policy(&mut self, cache_policy: CachePolicy) {
        self.cache_policy = cache_policy;
    }

    /// Show or hide the loading indicator during the call.
    pub fn set_loader(&mut self, show: bool) {
        self.show_loader = show;
    }

    /// Block or allow user interaction during the call.
    pub fn set_interaction_blocked(&mut self, block: bool) {
        self.block_interaction = block;
    }

    /// Merge parameters: `null` entries are dropped, later keys win.
    pub fn merge_parameters(&mut self, incoming: Parameters) {
        params::merge(&mut self.parameters, incoming);
    }

    /// Render the descriptor into a wire request.
    ///
    /// A `Content-Type` supplied by the caller, in any case, wins over the
    /// one implied by the encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`](crate::Error::InvalidTarget) if the
    /// target is not a URL, or a serialization error for JSON bodies.
    pub fn to_request(&self) -> Result<Request> {
        let url = url::Url::parse(&self.target)?;
        let encoding = self.encoding();
        debug!(method = %self.method, endpoint = %self.target, %encoding, "rendering request");

        let mut request = Request::new(self.method, url);
        if let Some(headers) = &self.headers {
            request = request.with_headers(headers.clone());
        }

        let Some(parameters) = self.parameters.as_ref().filter(|p| !p.is_empty()) else {
            return Ok(request);
        };

        let request = match encoding {
            Encoding::Query => request.with_query(encoding::to_query_pairs(parameters)),
            Encoding::Json => request.with_body(encoding::to_json(parameters)?),
            Encoding::Form => request.with_body(encoding::to_form(parameters)),
        };
        Ok(match encoding.content_type() {
            Some(content_type) => {
                request.with_default_header(CONTENT_TYPE.as_str(), content_type)
            }
            None => request,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::Error;

    fn params(value: Value) -> Parameters {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn descriptor_defaults() {
        let descriptor = RequestDescriptor::new("https://api.example.com", Method::Get);

        assert_eq!(descriptor.method(), Method::Get);
        assert!(descriptor.parameters().is_none());
        assert!(descriptor.headers().is_none());
        assert_eq!(descriptor.encoding(), Encoding::Query);
        assert!(!descriptor.has_encoding_override());
        assert_eq!(descriptor.cache_policy(), CachePolicy::RequestFromUrlNoCache);
        assert!(!descriptor.shows_loader());
        assert!(!descriptor.blocks_interaction());
    }

    #[test]
    fn encoding_follows_method() {
        let mut descriptor = RequestDescriptor::new("https://api.example.com", Method::Get);
        assert_eq!(descriptor.encoding(), Encoding::Query);

        descriptor.set_method(Method::Post);
        assert_eq!(descriptor.encoding(), Encoding::Json);
    }

    #[test]
    fn explicit_encoding_survives_method_change() {
        let mut descriptor = RequestDescriptor::new("https://api.example.com", Method::Get)
            .with_encoding(Encoding::Form);

        descriptor.set_method(Method::Post);
        assert_eq!(descriptor.encoding(), Encoding::Form);
        assert!(descriptor.has_encoding_override());
    }

    #[test]
    fn initial_parameters_drop_nulls() {
        let descriptor = RequestDescriptor::new("https://api.example.com", Method::Get)
            .with_parameters(params(json!({"a": 1, "b": null})));

        assert_eq!(descriptor.parameters(), Some(&params(json!({"a": 1}))));
    }

    #[test]
    fn malformed_target_fails_on_render() {
        let descriptor = RequestDescriptor::new("not a url", Method::Get);
        let err = descriptor.to_request().expect_err("invalid target");
        assert!(matches!(err, Error::InvalidTarget(_)));
        assert!(err.is_no_data());
    }

    #[test]
    fn get_renders_query_string() {
        let descriptor = RequestDescriptor::new("https://api.example.com/demo", Method::Get)
            .with_parameters(params(json!({"from": "2019-01-01", "page": 2})));

        let request = descriptor.to_request().expect("request");
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/demo?from=2019-01-01&page=2"
        );
        assert!(request.body().is_none());
        assert!(request.header("Content-Type").is_none());
    }

    #[test]
    fn post_renders_json_body() {
        let descriptor = RequestDescriptor::new("https://api.example.com/demo", Method::Post)
            .with_parameters(params(json!({"name": "Core"})));

        let request = descriptor.to_request().expect("request");
        assert_eq!(request.url().as_str(), "https://api.example.com/demo");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body().map(|body| body.to_vec()),
            Some(br#"{"name":"Core"}"#.to_vec())
        );
    }

    #[test]
    fn post_with_form_override() {
        let descriptor = RequestDescriptor::new("https://api.example.com/login", Method::Post)
            .with_encoding(Encoding::Form)
            .with_parameters(params(json!({"user": "alice"})));

        let request = descriptor.to_request().expect("request");
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.body().map(|body| body.to_vec()),
            Some(b"user=alice".to_vec())
        );
    }

    #[test]
    fn empty_parameters_send_nothing() {
        let descriptor = RequestDescriptor::new("https://api.example.com/demo", Method::Post)
            .with_parameters(Parameters::new());

        let request = descriptor.to_request().expect("request");
        assert!(request.body().is_none());
        assert!(request.header("Content-Type").is_none());
    }

    #[test]
    fn caller_content_type_wins_in_any_case() {
        let headers = HashMap::from([(
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        )]);
        let descriptor = RequestDescriptor::new("https://api.example.com/demo", Method::Post)
            .with_headers(headers)
            .with_parameters(params(json!({"a": 1})));

        let request = descriptor.to_request().expect("request");
        assert_eq!(request.headers().len(), 1);
        assert_eq!(
            request.header("Content-Type"),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn headers_are_copied() {
        let headers = HashMap::from([("X-Api-Key".to_string(), "secret".to_string())]);
        let descriptor = RequestDescriptor::new("https://api.example.com", Method::Get)
            .with_headers(headers);

        let request = descriptor.to_request().expect("request");
        assert_eq!(request.header("X-Api-Key"), Some("secret"));
    }

    #[test]
    fn cache_policy_does_not_change_rendering() {
        let base = RequestDescriptor::new("https://api.example.com/demo", Method::Get)
            .with_parameters(params(json!({"page": 1})));
        let expected = base.to_request().expect("request");

        for policy in CachePolicy::ALL {
            let request = base
                .clone()
                .with_cache_policy(policy)
                .to_request()
                .expect("request");
            assert_eq!(request.url(), expected.url());
            assert_eq!(request.headers(), expected.headers());
            assert_eq!(request.body(), expected.body());
        }
    }
}
