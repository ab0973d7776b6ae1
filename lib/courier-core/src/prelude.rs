//! Prelude module for convenient imports.
//!
//! ```ignore
//! use courier_core::prelude::*;
//! ```

pub use crate::{
    CachePolicy, Decodable, Encoding, Error, HttpClient, Method, NoopUi, Parameters, RawObject,
    Request, RequestDescriptor, Response, Result, UiSink,
};
