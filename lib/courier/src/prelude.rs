//! Prelude module for convenient imports.
//!
//! ```ignore
//! use courier::prelude::*;
//! ```

pub use crate::{
    ApiRequest, CachePolicy, Decodable, Encoding, Endpoint, Error, HttpClient, HyperClient,
    Method, NoopUi, Parameters, RawObject, RequestDescriptor, Result, Transport, UiSink,
};
pub use serde::{Deserialize, Serialize};
