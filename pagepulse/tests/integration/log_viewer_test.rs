//! ログビューアー統合テスト
//!
//! wiremockのログサービスに対する取得・縮退・ポーリングの挙動を確認する。

use crate::support;
use pagepulse::render::memory::PageModel;
use pagepulse::widget::logs::{LogViewer, NO_LOGS_MESSAGE};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn viewer(page: &PageModel, server: &MockServer) -> LogViewer {
    LogViewer::new(
        support::test_client(),
        format!("{}/logs", server.uri()),
        page.log_sink(),
    )
}

#[tokio::test]
async fn logs_render_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/app.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2024-01-01 INFO started"))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .display_logs("log=app.txt")
        .await
        .expect("polling should start");
    handle.stop();

    assert_eq!(page.snapshot().log_text, "2024-01-01 INFO started");
}

#[tokio::test]
async fn missing_param_issues_no_request() {
    let server = MockServer::start().await;

    let page = PageModel::new();
    let handle = viewer(&page, &server).display_logs("other=1").await;

    assert!(handle.is_none());
    assert_eq!(page.snapshot().log_text, NO_LOGS_MESSAGE);
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn leading_separator_is_stripped_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/foo/bar.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .display_logs("log=/foo/bar.txt")
        .await
        .expect("polling should start");
    handle.stop();

    assert_eq!(page.snapshot().log_text, "ok");
}

#[tokio::test]
async fn separator_only_value_requests_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let page = PageModel::new();
    // 除去後に空になっても、そのまま連結した先を取得しに行く
    let handle = viewer(&page, &server)
        .display_logs("log=/")
        .await
        .expect("polling should start");
    handle.stop();

    assert_eq!(page.snapshot().log_text, NO_LOGS_MESSAGE);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/logs/");
}

#[tokio::test]
async fn not_found_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/gone.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .display_logs("log=gone.txt")
        .await
        .expect("polling should start");
    handle.stop();

    assert_eq!(page.snapshot().log_text, NO_LOGS_MESSAGE);
}

#[tokio::test]
async fn server_error_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/app.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .display_logs("log=app.txt")
        .await
        .expect("polling should start");
    handle.stop();

    assert_eq!(page.snapshot().log_text, NO_LOGS_MESSAGE);
}

#[tokio::test]
async fn polling_repeats_until_stopped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/app.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tick"))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .with_poll_interval(Duration::from_millis(25))
        .display_logs("log=app.txt")
        .await
        .expect("polling should start");

    tokio::time::sleep(Duration::from_millis(300)).await;
    handle.stop();
    let count_at_stop = server.received_requests().await.unwrap().len();
    assert!(count_at_stop >= 2, "expected repeated fetches, got {count_at_stop}");

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(handle.is_stopped());
    let final_count = server.received_requests().await.unwrap().len();
    // 停止時に飛行中だった1件までは許容する
    assert!(final_count <= count_at_stop + 1);
}

#[tokio::test]
async fn each_poll_rerenders_latest_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/app.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("first"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/logs/app.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("second"))
        .mount(&server)
        .await;

    let page = PageModel::new();
    let handle = viewer(&page, &server)
        .with_poll_interval(Duration::from_millis(25))
        .display_logs("log=app.txt")
        .await
        .expect("polling should start");

    assert_eq!(page.snapshot().log_text, "first");

    let mut latest = String::new();
    for _ in 0..40 {
        tokio::time::sleep(Duration::from_millis(25)).await;
        latest = page.snapshot().log_text;
        if latest == "second" {
            break;
        }
    }
    handle.stop();
    assert_eq!(latest, "second");
}
