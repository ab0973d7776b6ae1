//! Core types and traits for the courier typed JSON request pipeline.
//!
//! This crate provides the transport-independent pieces:
//! - [`RequestDescriptor`] - everything about one call before it is made
//! - [`Method`], [`Encoding`], [`CachePolicy`] - descriptor settings
//! - [`Parameters`] and the [`params`] merge rules
//! - [`Request`] and [`Response`] - wire types
//! - [`Decodable`] and the [`envelope`] rule - payload to model mapping
//! - [`HttpClient`] - the transport capability
//! - [`UiSink`] - receiver of loader and interaction side effects
//! - [`Error`] and [`Result`] - error handling

mod cache;
mod client;
mod descriptor;
mod encoding;
pub mod envelope;
mod error;
mod json;
mod method;
pub mod params;
pub mod prelude;
mod request;
mod response;
mod ui;

pub use cache::CachePolicy;
pub use client::HttpClient;
pub use descriptor::RequestDescriptor;
pub use encoding::{Encoding, to_form, to_json, to_query_pairs};
pub use envelope::{Decodable, RawObject};
pub use error::{Error, Result};
pub use json::{from_json, from_value};
pub use method::Method;
pub use params::Parameters;
pub use request::Request;
pub use response::Response;
pub use ui::{NoopUi, UiSink};
