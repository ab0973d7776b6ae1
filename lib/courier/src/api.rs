//! Typed request builder.
//!
//! [`ApiRequest`] is what application code talks to: name an endpoint, add
//! parameters and headers, then fire for one model, for a sequence, or on a
//! repeating timer.
//!
//! # Example
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct TeamBreakdown {
//!     name: Option<String>,
//!     logged_hours: Option<f64>,
//! }
//!
//! impl Decodable for TeamBreakdown {}
//!
//! let teams = ApiRequest::<TeamBreakdown, _>::get(&transport, "https://metrics.example.com/api/operations/demo")
//!     .with_headers(custom_headers)
//!     .with_record(&date_range)?
//!     .fire_for_sequence()
//!     .await?;
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use courier_core::{
    CachePolicy, Decodable, Encoding, Error, HttpClient, Method, Parameters, RequestDescriptor,
    Result, UiSink, params,
};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::{Endpoint, Transport};

/// A typed, chainable request for model `T`.
///
/// The builder owns its descriptor. Every fire works on a snapshot of the
/// descriptor as it is at that moment, so later changes never affect a
/// call already made.
///
/// A repeating timer started with [`fire_repeating`](Self::fire_repeating)
/// belongs to the builder: it runs until [`stop_repeating`](Self::stop_repeating)
/// is called or the builder is dropped.
pub struct ApiRequest<T, C, U = courier_core::NoopUi> {
    transport: Transport<C, U>,
    descriptor: RequestDescriptor,
    timer: Option<JoinHandle<()>>,
    _model: PhantomData<fn() -> T>,
}

impl<T, C, U> std::fmt::Debug for ApiRequest<T, C, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("descriptor", &self.descriptor)
            .field("repeating", &self.is_repeating())
            .finish_non_exhaustive()
    }
}

impl<T, C, U> ApiRequest<T, C, U> {
    /// Create a request for `endpoint`.
    ///
    /// The request shows the loader and leaves user interaction enabled.
    /// `null` entries in `parameters` are dropped.
    #[must_use]
    pub fn create(
        transport: &Transport<C, U>,
        endpoint: impl Endpoint,
        parameters: Option<Parameters>,
        method: Method,
    ) -> Self {
        let mut descriptor = RequestDescriptor::new(endpoint.url(), method).with_loader(true);
        if let Some(parameters) = parameters {
            descriptor = descriptor.with_parameters(parameters);
        }
        Self {
            transport: transport.clone(),
            descriptor,
            timer: None,
            _model: PhantomData,
        }
    }

    /// Create a GET request without parameters.
    #[must_use]
    pub fn get(transport: &Transport<C, U>, endpoint: impl Endpoint) -> Self {
        Self::create(transport, endpoint, None, Method::Get)
    }

    /// Create a POST request without parameters.
    #[must_use]
    pub fn post(transport: &Transport<C, U>, endpoint: impl Endpoint) -> Self {
        Self::create(transport, endpoint, None, Method::Post)
    }

    /// Merge parameters into the request.
    ///
    /// Later keys overwrite earlier ones; `null` entries are dropped.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.descriptor.merge_parameters(parameters);
        self
    }

    /// Merge a serializable record into the request parameters.
    ///
    /// Same rules as [`with_parameters`](Self::with_parameters).
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not serialize to a JSON object.
    pub fn with_record<R: serde::Serialize + ?Sized>(mut self, record: &R) -> Result<Self> {
        self.descriptor.merge_parameters(params::from_record(record)?);
        Ok(self)
    }

    /// Replace the headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.descriptor.set_headers(headers);
        self
    }

    /// Replace the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.descriptor.set_method(method);
        self
    }

    /// Override the method-implied encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.descriptor.set_encoding(encoding);
        self
    }

    /// Declare a cache policy.
    #[must_use]
    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.descriptor.set_cache_policy(cache_policy);
        self
    }

    /// Show or hide the loading indicator during calls.
    #[must_use]
    pub fn with_loader(mut self, show: bool) -> Self {
        self.descriptor.set_loader(show);
        self
    }

    /// Block or allow user interaction during calls.
    #[must_use]
    pub fn with_interaction_blocked(mut self, block: bool) -> Self {
        self.descriptor.set_interaction_blocked(block);
        self
    }

    /// The current descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Mutable access to the descriptor, for callers that do not chain.
    pub fn descriptor_mut(&mut self) -> &mut RequestDescriptor {
        &mut self.descriptor
    }

    /// Whether a repeating timer is running.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Stop the repeating timer, if any. Returns `true` if one was running.
    pub fn stop_repeating(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                let running = !timer.is_finished();
                timer.abort();
                debug!(target_url = %self.descriptor.target(), "repeating request stopped");
                running
            }
            None => false,
        }
    }
}

impl<T, C, U> ApiRequest<T, C, U>
where
    T: Decodable + Send + 'static,
    C: HttpClient + 'static,
    U: UiSink + 'static,
{
    /// Fire the request and decode one `T`.
    ///
    /// Nothing happens until the returned future is polled. Dropping it
    /// aborts the call.
    ///
    /// # Errors
    ///
    /// Resolves to a "no data" error if the call fails or the payload does
    /// not hold a `T`.
    pub fn fire(&self) -> impl Future<Output = Result<T>> + Send + 'static {
        let transport = self.transport.clone();
        let descriptor = self.descriptor.clone();
        async move { transport.fetch::<T>(&descriptor).await }
    }

    /// Fire the request and decode an ordered sequence of `T`.
    ///
    /// # Errors
    ///
    /// Resolves to a "no data" error if the call fails or the payload does
    /// not hold `T` values.
    pub fn fire_for_sequence(&self) -> impl Future<Output = Result<Vec<T>>> + Send + 'static {
        let transport = self.transport.clone();
        let descriptor = self.descriptor.clone();
        async move { transport.fetch_many::<T>(&descriptor).await }
    }

    /// Fire now, then again every `every_minutes` minutes.
    ///
    /// Each result is handed to `on_each`. Only one timer runs per builder:
    /// calling this again fires immediately but does not start a second
    /// timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] when `every_minutes` is zero, and
    /// [`Error::NoRuntime`] when called outside a Tokio runtime.
    pub fn fire_repeating<F>(&mut self, every_minutes: u32, on_each: F) -> Result<()>
    where
        F: Fn(Result<T>) + Send + Sync + 'static,
    {
        if every_minutes == 0 {
            return Err(Error::InvalidInterval);
        }
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let on_each = Arc::new(on_each);

        let first = self.fire();
        let callback = Arc::clone(&on_each);
        runtime.spawn(async move { callback(first.await) });

        if self.is_repeating() {
            debug!(target_url = %self.descriptor.target(), "repeating timer already active");
            return Ok(());
        }

        let period = Duration::from_secs(60 * u64::from(every_minutes));
        let transport = self.transport.clone();
        let descriptor = self.descriptor.clone();
        info!(target_url = %descriptor.target(), every_minutes, "repeating request scheduled");

        self.timer = Some(runtime.spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                on_each(transport.fetch::<T>(&descriptor).await);
            }
        }));
        Ok(())
    }
}

impl<T, C, U> Drop for ApiRequest<T, C, U> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
