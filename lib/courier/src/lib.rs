//! Typed JSON request pipeline.
//!
//! Describe a call with an [`ApiRequest`], fire it, and get back a typed
//! model, an ordered sequence of models, or a "no data" [`Error`]. Payloads
//! may arrive wrapped in a `{"response": ...}` envelope or bare; the
//! [envelope rule](courier_core::envelope) handles both.
//!
//! # Example
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Team {
//!     name: Option<String>,
//! }
//!
//! impl Decodable for Team {}
//!
//! let transport = Transport::new(HyperClient::new());
//! let teams = ApiRequest::<Team, _>::get(&transport, "https://metrics.example.com/api/teams")
//!     .with_parameters(parameters)
//!     .fire_for_sequence()
//!     .await?;
//! ```
//!
//! Requests that should refresh on their own use
//! [`fire_repeating`](ApiRequest::fire_repeating), which keeps a timer alive
//! for as long as the builder lives.

mod api;
mod client;
mod config;
mod connector;
mod endpoint;
pub mod prelude;
mod transport;

pub use api::ApiRequest;
pub use client::{HyperClient, HyperClientBuilder};
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use transport::Transport;

pub use courier_core::{
    CachePolicy, Decodable, Encoding, Error, HttpClient, Method, NoopUi, Parameters, RawObject,
    Request, RequestDescriptor, Response, Result, UiSink, envelope, from_json,
    from_value, params,
};

pub use courier_core;
