use std::future::Future;

use folio_models::{
    contact::{ContactField, ContactMessage},
    submission::SubmissionState,
};
use thiserror::Error;
use tokio::sync::watch;

pub trait ContactFormService: Send + Sync + 'static {
    /// Overwrite a single draft field with an arbitrary string.
    fn update_field(&self, field: ContactField, value: String);

    /// Deliver the current draft to the form relay.
    ///
    /// At most one submission is in flight at a time. On success the draft is
    /// cleared and the state reverts to [`SubmissionState::Idle`] after the
    /// configured dismiss delay, asking the surface to close. On failure the
    /// draft is kept so the user can retry.
    fn submit(&self) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Discard the draft and return to [`SubmissionState::Idle`].
    ///
    /// The outcome of an in-flight submission and any pending dismiss are
    /// discarded along with the draft; no close signal fires for them.
    fn reset(&self);

    /// The current draft and submission state.
    fn snapshot(&self) -> FormSnapshot;

    /// Watch the draft and submission state for changes.
    fn subscribe(&self) -> watch::Receiver<FormSnapshot>;
}

/// The surface hosting the contact form, e.g. a modal or a page section.
pub trait SurfaceService: Send + Sync + 'static {
    fn request_close(&self);
}

/// The rendering-layer view of one contact interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: ContactMessage,
    pub state: SubmissionState,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Another submission is already in flight.")]
    AlreadySubmitting,
    #[error("The message could not be delivered to the form relay.")]
    Delivery,
}
