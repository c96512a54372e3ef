use std::{sync::Arc, time::Duration};

use anyhow::Context;
use folio_extern_contracts::relay::{RelayApiService, RelayDeliverError};
use folio_models::contact::ContactMessage;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    endpoint: Arc<Url>,
    timeout: Duration,
}

impl RelayApiServiceConfig {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl RelayApiServiceImpl {
    pub fn new(config: RelayApiServiceConfig) -> Self {
        let http = HttpClient::with_timeout(config.timeout);
        Self { config, http }
    }
}

impl RelayApiService for RelayApiServiceImpl {
    async fn deliver(&self, message: ContactMessage) -> Result<(), RelayDeliverError> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(&RelayPayload::from(&message))
            .send()
            .await
            .context("Failed to reach the form relay")?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayDeliverError::Rejected {
                status: status.as_u16(),
            });
        }

        // Any 2xx counts as accepted; the response body is ignored.
        debug!("Relay accepted the submission ({status})");
        Ok(())
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactMessage> for RelayPayload<'a> {
    fn from(value: &'a ContactMessage) -> Self {
        Self {
            name: &value.name,
            email: &value.email,
            subject: &value.subject,
            message: &value.message,
        }
    }
}
