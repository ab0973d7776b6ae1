//! UI side effects raised around a request.
//!
//! The pipeline never renders anything. It tells a [`UiSink`] when a call
//! starts and ends, and the application decides what that looks like.
//! Implementations are responsible for hopping onto their UI thread.

use std::sync::Arc;

/// Receiver of the UI side effects of in-flight requests.
pub trait UiSink: Send + Sync {
    /// Show or hide the loading indicator.
    fn set_loading(&self, visible: bool);

    /// Block or unblock user interaction.
    fn set_interaction_blocked(&self, blocked: bool);

    /// Toggle the system network-activity indicator.
    ///
    /// Raised for every request regardless of descriptor flags.
    fn set_network_activity(&self, _active: bool) {}
}

/// A sink that ignores every side effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUi;

impl UiSink for NoopUi {
    fn set_loading(&self, _visible: bool) {}

    fn set_interaction_blocked(&self, _blocked: bool) {}
}

impl<T: UiSink + ?Sized> UiSink for Arc<T> {
    fn set_loading(&self, visible: bool) {
        (**self).set_loading(visible);
    }

    fn set_interaction_blocked(&self, blocked: bool) {
        (**self).set_interaction_blocked(blocked);
    }

    fn set_network_activity(&self, active: bool) {
        (**self).set_network_activity(active);
    }
}
