use std::future::Future;

use folio_models::contact::ContactMessage;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Deliver the message to the form relay.
    ///
    /// Exactly one request is made per call; there are no retries.
    fn deliver(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), RelayDeliverError>> + Send;
}

#[derive(Debug, Error)]
pub enum RelayDeliverError {
    /// The relay answered with a status outside the 200..=299 range. The
    /// response body is not part of the contract and is never inspected.
    #[error("The relay rejected the submission (status {status}).")]
    Rejected { status: u16 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_deliver(
        mut self,
        message: ContactMessage,
        result: Result<(), RelayDeliverError>,
    ) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
