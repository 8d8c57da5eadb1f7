//! HTTP取得と結果分類
//!
//! 全ウィジェット共通のfetch-classify-renderポリシー。
//! GETの結果は常に [`FetchOutcome`] へ分類され、この層からエラーが
//! 伝播することはない。失敗の詳細はdebugログにのみ残す。

mod outcome;

pub use outcome::FetchOutcome;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTPリクエストのデフォルトタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// 共有HTTPクライアントを生成する
///
/// ウィジェット間で1つのクライアントを共有し、接続プーリングを効かせる。
pub fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// プレーンテキストをGETして分類する
///
/// URLが空の場合はネットワークへ出ずに `NetworkError` を返す。
pub async fn fetch_text(client: &Client, url: &str) -> FetchOutcome<String> {
    if url.is_empty() {
        debug!("Fetch skipped: no URL supplied");
        return FetchOutcome::NetworkError;
    }

    let request = client.get(url).header(ACCEPT, "text/plain; charset=utf-8");

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                match response.text().await {
                    Ok(body) => FetchOutcome::Success(body),
                    Err(e) => {
                        debug!(url = %url, error = %e, "Failed to read response body");
                        FetchOutcome::NetworkError
                    }
                }
            } else {
                classify_error_status(url, status)
            }
        }
        Err(e) => {
            debug!(url = %url, error = %e, "Request failed");
            FetchOutcome::NetworkError
        }
    }
}

/// JSONをGETしてデシリアライズし、分類する
///
/// ボディが期待した形に解析できない場合は不正ボディとして
/// `NetworkError` に分類する。
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> FetchOutcome<T> {
    if url.is_empty() {
        debug!("Fetch skipped: no URL supplied");
        return FetchOutcome::NetworkError;
    }

    let request = client
        .get(url)
        .header(ACCEPT, "application/json; charset=utf-8");

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                match response.json::<T>().await {
                    Ok(payload) => FetchOutcome::Success(payload),
                    Err(e) => {
                        debug!(url = %url, error = %e, "Failed to parse response body");
                        FetchOutcome::NetworkError
                    }
                }
            } else {
                classify_error_status(url, status)
            }
        }
        Err(e) => {
            debug!(url = %url, error = %e, "Request failed");
            FetchOutcome::NetworkError
        }
    }
}

/// 非成功ステータスを分類する
fn classify_error_status<T>(url: &str, status: StatusCode) -> FetchOutcome<T> {
    debug!(url = %url, status = %status, "Fetch returned error status");
    if status == StatusCode::NOT_FOUND {
        FetchOutcome::NotFound
    } else if status.is_server_error() {
        FetchOutcome::ServerError
    } else {
        FetchOutcome::NetworkError
    }
}
