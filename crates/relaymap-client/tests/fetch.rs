use relaymap_client::{deadline, never, Error, Fetcher, RelayClient};
use std::time::Duration;
use tokio::time::Instant;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVENTORY: &str = r#"[
    {"country_name":"Sweden","city_name":"Stockholm","active":true,"owned":true,
     "provider":"31173","ipv4_addr_in":"185.65.135.1","ipv6_addr_in":"2a03:1b20:1::1"}
]"#;

fn client_for(server: &MockServer) -> RelayClient {
    RelayClient::builder()
        .relays_url(format!("{}/www/relays/openvpn/", server.uri()))
        .user_agent("relaymap-test")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

#[tokio::test]
async fn fetches_inventory_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/www/relays/openvpn/"))
        .and(header("user-agent", "relaymap-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INVENTORY))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).relays(never()).await.unwrap();

    assert_eq!(body, INVENTORY.as_bytes());
}

#[tokio::test]
async fn fetcher_reports_status_without_failing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.fetch(client.relays_url(), never()).await.unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_success());
    assert_eq!(response.body, b"maintenance");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).relays(never()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(err.is_transport());
}

#[tokio::test]
async fn cancellation_abandons_the_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(INVENTORY)
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    let cancel = deadline(Instant::now() + Duration::from_millis(50));
    let err = client_for(&server).relays(cancel).await.unwrap_err();

    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = client_for(&server).relays(never()).await.unwrap_err();

    assert!(matches!(err, Error::Timeout(2)));
}

#[tokio::test]
async fn rejects_malformed_url_before_sending() {
    let client = RelayClient::new().unwrap();
    let err = client.fetch("::not a url::", never()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
