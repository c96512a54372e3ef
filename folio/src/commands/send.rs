use std::sync::Arc;

use anyhow::Context;
use folio_config::Config;
use folio_core_contact_contracts::{ContactFormService, SurfaceService};
use folio_core_contact_impl::{ContactFormConfig, ContactFormServiceImpl};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::{ContactField, ContactMessage};
use tokio::sync::Notify;
use tracing::{debug, info, warn};

pub async fn send(config: Config, message: ContactMessage) -> anyhow::Result<()> {
    // The rendering layer normally gates on required fields; on the command
    // line the checks only warn and the submission proceeds anyway.
    if !message.is_complete() {
        let missing = message
            .missing_fields()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        warn!("Required fields are empty: {missing}");
    }
    if !message.email_is_well_formed() {
        warn!("{:?} does not look like an email address", message.email);
    }

    let relay_api_service_config = RelayApiServiceConfig::new(
        config.relay.endpoint.clone(),
        config.relay.submit_timeout.into(),
    );
    let contact_form_config = ContactFormConfig {
        success_dismiss_delay: config.contact.success_dismiss_delay.into(),
    };

    let relay = RelayApiServiceImpl::new(relay_api_service_config);
    let surface = CliSurface::default();
    let form = ContactFormServiceImpl::new(relay, surface.clone(), contact_form_config);

    let mut updates = form.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().state;
            debug!("Form state: {state:?}");
        }
    });

    for field in ContactField::ALL {
        form.update_field(field, message.field(field).into());
    }

    form.submit()
        .await
        .context("Failed to submit the contact message")?;
    info!("Message accepted by {}", config.relay.endpoint);

    // The success banner dismisses itself after the configured delay and asks
    // the surface to close; wait for that to drive the full lifecycle.
    surface.closed().await;
    println!("Message sent.");

    Ok(())
}

/// Close signal of the hosting surface. For the command line, "closing" just
/// unblocks the command so it can exit.
#[derive(Debug, Clone, Default)]
struct CliSurface {
    notify: Arc<Notify>,
}

impl CliSurface {
    async fn closed(&self) {
        self.notify.notified().await;
    }
}

impl SurfaceService for CliSurface {
    fn request_close(&self) {
        self.notify.notify_one();
    }
}
