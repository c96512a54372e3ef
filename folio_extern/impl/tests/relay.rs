use std::{net::Ipv4Addr, time::Duration};

use folio_demo::contact::{BAR, FOO};
use folio_extern_contracts::relay::{RelayApiService, RelayDeliverError};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::ContactMessage;
use folio_utils::assert_matches;
use serde::Deserialize;
use tokio::net::TcpListener;
use url::Url;

#[tokio::test]
async fn accepted() {
    let relay = TestRelay::start().await;
    let sut = relay.client("portfolio");

    sut.deliver(FOO.clone()).await.unwrap();

    let submissions = relay.submissions("portfolio").await;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].form_id, "portfolio");
    assert_eq!(submissions[0].message, *FOO);
}

#[tokio::test]
async fn records_messages_in_order() {
    let relay = TestRelay::start().await;
    let sut = relay.client("portfolio");

    sut.deliver(FOO.clone()).await.unwrap();
    sut.deliver(BAR.clone()).await.unwrap();

    let submissions = relay.submissions("portfolio").await;
    let messages = submissions.iter().map(|s| &s.message).collect::<Vec<_>>();
    assert_eq!(messages, [&*FOO, &*BAR]);
}

#[tokio::test]
async fn rejected_by_server_error() {
    let relay = TestRelay::start().await;
    let sut = relay.client("deny-500");

    let result = sut.deliver(FOO.clone()).await;

    assert_matches!(result, Err(RelayDeliverError::Rejected { status: 500 }));
    assert!(relay.submissions("deny-500").await.is_empty());
}

#[tokio::test]
async fn rejected_by_rate_limit() {
    let relay = TestRelay::start().await;
    let sut = relay.client("deny-429");

    let result = sut.deliver(FOO.clone()).await;

    assert_matches!(result, Err(RelayDeliverError::Rejected { status: 429 }));
}

#[tokio::test]
async fn unreachable() {
    // Nothing listens on port 1.
    let config = RelayApiServiceConfig::new(
        "http://127.0.0.1:1/f/portfolio".parse().unwrap(),
        Duration::from_secs(1),
    );
    let sut = RelayApiServiceImpl::new(config);

    let result = sut.deliver(FOO.clone()).await;

    assert_matches!(result, Err(RelayDeliverError::Other(_)));
}

#[tokio::test]
async fn timed_out() {
    let relay = TestRelay::start().await;
    let sut = relay.client_with_timeout("sleep-2000", Duration::from_millis(200));

    let result = sut.deliver(FOO.clone()).await;

    assert_matches!(result, Err(RelayDeliverError::Other(_)));
}

struct TestRelay {
    base: Url,
}

impl TestRelay {
    async fn start() -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(folio_testing::relay::serve(listener));

        Self {
            base: format!("http://{addr}/").parse().unwrap(),
        }
    }

    fn client(&self, form_id: &str) -> RelayApiServiceImpl {
        self.client_with_timeout(form_id, Duration::from_secs(5))
    }

    fn client_with_timeout(&self, form_id: &str, timeout: Duration) -> RelayApiServiceImpl {
        let endpoint = self.base.join(&format!("f/{form_id}")).unwrap();
        RelayApiServiceImpl::new(RelayApiServiceConfig::new(endpoint, timeout))
    }

    async fn submissions(&self, form_id: &str) -> Vec<ReceivedSubmission> {
        reqwest::Client::new()
            .get(
                self.base
                    .join(&format!("f/{form_id}/submissions"))
                    .unwrap(),
            )
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[derive(Debug, Deserialize)]
struct ReceivedSubmission {
    form_id: String,
    message: ContactMessage,
}
