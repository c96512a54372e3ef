use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use folio_core_contact_contracts::{
    ContactFormService, ContactSubmitError, FormSnapshot, SurfaceService,
};
use folio_extern_contracts::relay::RelayApiService;
use folio_models::{contact::ContactField, submission::SubmissionState};
use tokio::sync::watch;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFormServiceImpl<Relay, Surface> {
    relay: Relay,
    surface: Surface,
    config: ContactFormConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    pub success_dismiss_delay: Duration,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            success_dismiss_delay: Duration::from_millis(2000),
        }
    }
}

/// Shared form state.
///
/// The watch channel is the single source of truth for the draft and the
/// submission state; its closures run under the sender lock, which makes the
/// single-flight check-and-set atomic. The epoch counts interactions: it is
/// bumped by every accepted submission attempt and by every reset, and work
/// scheduled under an older epoch (an in-flight response, a pending dismiss)
/// is discarded.
#[derive(Debug)]
struct State {
    form: watch::Sender<FormSnapshot>,
    epoch: AtomicU64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            form: watch::Sender::new(FormSnapshot::default()),
            epoch: AtomicU64::new(0),
        }
    }
}

impl<Relay, Surface> ContactFormServiceImpl<Relay, Surface> {
    pub fn new(relay: Relay, surface: Surface, config: ContactFormConfig) -> Self {
        Self {
            relay,
            surface,
            config,
            state: Arc::default(),
        }
    }
}

impl<Relay, Surface> ContactFormService for ContactFormServiceImpl<Relay, Surface>
where
    Relay: RelayApiService,
    Surface: SurfaceService + Clone,
{
    fn update_field(&self, field: ContactField, value: String) {
        self.state.form.send_if_modified(|snapshot| {
            if snapshot.draft.field(field) == value {
                return false;
            }
            snapshot.draft.set(field, value);
            true
        });
    }

    async fn submit(&self) -> Result<(), ContactSubmitError> {
        let mut entered = None;
        self.state.form.send_if_modified(|snapshot| {
            if snapshot.state.is_submitting() {
                return false;
            }
            snapshot.state = SubmissionState::Submitting;
            let epoch = self.state.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            entered = Some((snapshot.draft.clone(), epoch));
            true
        });
        let Some((draft, epoch)) = entered else {
            return Err(ContactSubmitError::AlreadySubmitting);
        };

        let outcome = self.relay.deliver(draft).await;

        // A reset while the request was in flight bumped the epoch; the
        // outcome of a discarded interaction must not touch the form.
        let applied = self.state.form.send_if_modified(|snapshot| {
            if self.state.epoch.load(Ordering::SeqCst) != epoch {
                return false;
            }
            match &outcome {
                Ok(()) => {
                    snapshot.draft.clear();
                    snapshot.state = SubmissionState::Success;
                }
                Err(_) => snapshot.state = SubmissionState::Error,
            }
            true
        });

        match outcome {
            Ok(()) => {
                if applied {
                    debug!("Contact message delivered");
                    self.schedule_dismiss(epoch);
                }
                Ok(())
            }
            Err(err) => {
                warn!("Failed to deliver contact message: {err}");
                Err(ContactSubmitError::Delivery)
            }
        }
    }

    fn reset(&self) {
        // Bump before clearing: a submit racing with the reset either
        // observes the new epoch or is wiped by the write below.
        self.state.epoch.fetch_add(1, Ordering::SeqCst);
        self.state.form.send_modify(|snapshot| {
            snapshot.draft.clear();
            snapshot.state = SubmissionState::Idle;
        });
    }

    fn snapshot(&self) -> FormSnapshot {
        self.state.form.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.state.form.subscribe()
    }
}

impl<Relay, Surface> ContactFormServiceImpl<Relay, Surface>
where
    Surface: SurfaceService + Clone,
{
    /// Revert a successful submission to idle after the configured delay and
    /// ask the surface to close, unless the interaction has moved on in the
    /// meantime.
    fn schedule_dismiss(&self, epoch: u64) {
        let state = Arc::clone(&self.state);
        let surface = self.surface.clone();
        let delay = self.config.success_dismiss_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let dismissed = state.form.send_if_modified(|snapshot| {
                if state.epoch.load(Ordering::SeqCst) != epoch {
                    return false;
                }
                snapshot.state = SubmissionState::Idle;
                true
            });
            if dismissed {
                surface.request_close();
            }
        });
    }
}
