//! ステータスバッジ統合テスト

use crate::support;
use pagepulse::render::memory::PageModel;
use pagepulse::render::BadgeAsset;
use pagepulse::widget::ServiceStatusIndicator;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn display_with_status(status_code: u16) -> Option<BadgeAsset> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string("pong"))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let widget = ServiceStatusIndicator::new(support::test_client(), page.status_sink());
    widget.display_status(&format!("{}/ping", server.uri())).await;
    page.snapshot().status_badge
}

#[tokio::test]
async fn reachable_service_selects_online_badge() {
    assert_eq!(display_with_status(200).await, Some(BadgeAsset::Online));
}

#[tokio::test]
async fn not_found_selects_offline_badge() {
    assert_eq!(display_with_status(404).await, Some(BadgeAsset::Offline));
}

#[tokio::test]
async fn server_error_selects_offline_badge() {
    assert_eq!(display_with_status(500).await, Some(BadgeAsset::Offline));
}

#[tokio::test]
async fn rerun_with_same_response_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let widget = ServiceStatusIndicator::new(support::test_client(), page.status_sink());
    let url = format!("{}/ping", server.uri());
    widget.display_status(&url).await;
    let first = page.snapshot();
    widget.display_status(&url).await;
    assert_eq!(page.snapshot(), first);
}
