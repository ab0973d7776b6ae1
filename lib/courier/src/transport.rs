//! Transport adapter: descriptor in, JSON payload or typed model out.
//!
//! [`Transport`] renders a [`RequestDescriptor`], raises its UI side effects,
//! executes the call through an [`HttpClient`] and hands the payload to the
//! [envelope rule](courier_core::envelope). It never retries and never looks
//! at the descriptor's cache policy.

use std::sync::Arc;
use std::time::Instant;

use courier_core::{Decodable, HttpClient, NoopUi, RequestDescriptor, UiSink};
use serde_json::Value;
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::Result;

/// Issues the HTTP calls described by descriptors.
///
/// Cloning is cheap: clones share the client and the UI sink.
///
/// # Example
///
/// ```ignore
/// use courier::{HyperClient, Transport};
///
/// let transport = Transport::new(HyperClient::new());
/// let payload = transport.send(&descriptor).await?;
/// ```
pub struct Transport<C, U = NoopUi> {
    inner: Arc<Shared<C, U>>,
}

struct Shared<C, U> {
    client: C,
    ui: U,
}

impl<C, U> Clone for Transport<C, U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, U> std::fmt::Debug for Transport<C, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl<C> Transport<C> {
    /// Create a transport that raises no UI side effects.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self::with_ui(client, NoopUi)
    }
}

impl<C, U> Transport<C, U> {
    /// Create a transport reporting side effects to `ui`.
    #[must_use]
    pub fn with_ui(client: C, ui: U) -> Self {
        Self {
            inner: Arc::new(Shared { client, ui }),
        }
    }

    /// The underlying HTTP client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.inner.client
    }

    /// The UI sink.
    #[must_use]
    pub fn ui(&self) -> &U {
        &self.inner.ui
    }
}

impl<C, U> Transport<C, U>
where
    C: HttpClient,
    U: UiSink,
{
    /// Perform the call and return its JSON payload.
    ///
    /// UI side effects are raised before the request is rendered and released
    /// when the call finishes, fails, or the future is dropped.
    ///
    /// # Errors
    ///
    /// Every error is a "no data" failure: invalid target, transport error,
    /// non-2xx status, empty body, or a body that is not JSON.
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<Value> {
        let method = descriptor.method();
        let endpoint = descriptor.target();
        let span = span!(Level::INFO, "courier_request", %method, %endpoint);

        async move {
            let _activity = UiActivity::begin(&self.inner.ui, descriptor);
            let start = Instant::now();
            let result = self.exchange(descriptor).await;

            // Saturating conversion to u64 (truncates after ~584 million years)
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            match &result {
                Ok(_) => info!(elapsed_ms, "request completed"),
                Err(err) => warn!(error = %err, elapsed_ms, "request produced no data"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn exchange(&self, descriptor: &RequestDescriptor) -> Result<Value> {
        let request = descriptor.to_request()?;
        debug!(url = %request.url(), headers = ?request.headers(), "sending request");

        let response = self.inner.client.execute(request).await?;
        debug!(status = response.status(), bytes = response.body().len(), "response received");
        response.into_payload()
    }

    /// Perform the call and decode one model from the payload.
    ///
    /// # Errors
    ///
    /// Any [`send`](Self::send) failure, or a decode failure.
    pub async fn fetch<T: Decodable>(&self, descriptor: &RequestDescriptor) -> Result<T> {
        let payload = self.send(descriptor).await?;
        T::decode_single(&payload).inspect_err(|err| {
            warn!(endpoint = %descriptor.target(), error = %err, "payload does not match model");
        })
    }

    /// Perform the call and decode an ordered sequence of models.
    ///
    /// # Errors
    ///
    /// Any [`send`](Self::send) failure, or a decode failure.
    pub async fn fetch_many<T: Decodable>(&self, descriptor: &RequestDescriptor) -> Result<Vec<T>> {
        let payload = self.send(descriptor).await?;
        T::decode_many(&payload).inspect_err(|err| {
            warn!(endpoint = %descriptor.target(), error = %err, "payload does not match model");
        })
    }
}

/// UI side effects of one in-flight call, released on drop.
struct UiActivity<'a, U: UiSink> {
    ui: &'a U,
    loader: bool,
    blocking: bool,
}

impl<'a, U: UiSink> UiActivity<'a, U> {
    fn begin(ui: &'a U, descriptor: &RequestDescriptor) -> Self {
        let loader = descriptor.shows_loader();
        let blocking = descriptor.blocks_interaction();

        ui.set_network_activity(true);
        if loader {
            ui.set_loading(true);
        }
        if blocking {
            ui.set_interaction_blocked(true);
        }
        Self {
            ui,
            loader,
            blocking,
        }
    }
}

impl<U: UiSink> Drop for UiActivity<'_, U> {
    fn drop(&mut self) {
        self.ui.set_network_activity(false);
        if self.loader {
            self.ui.set_loading(false);
        }
        if self.blocking {
            self.ui.set_interaction_blocked(false);
        }
    }
}
