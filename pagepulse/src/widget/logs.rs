//! ログビューアー
//!
//! クエリ文字列で指定されたログファイルをログサービスから取得して
//! 表示する。固定間隔で同じURLを再取得し続ける、唯一ポーリングを
//! 行うウィジェット。

use crate::fetch;
use crate::render::TextSink;
use pagepulse_common::query::QueryParams;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::debug;

/// ログ未指定・取得失敗時の固定メッセージ
pub const NO_LOGS_MESSAGE: &str = "No logs to display. Make sure you specify the log querystring param containing a valid log filename";

/// デフォルトの再取得間隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// ログビューアー
pub struct LogViewer {
    client: Client,
    base_url: String,
    sink: Arc<dyn TextSink>,
    poll_interval: Duration,
}

/// 実行中のログポーリングのハンドル
///
/// ドロップしてもポーリングは止まらない（元の挙動の保持）。
/// 停止したい場合は [`LogPollHandle::stop`] を呼ぶ。
pub struct LogPollHandle {
    task: tokio::task::JoinHandle<()>,
}

impl LogPollHandle {
    /// ポーリングを停止する
    pub fn stop(&self) {
        self.task.abort();
    }

    /// ポーリングタスクが終了済みかどうか
    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl LogViewer {
    /// 新しいログビューアーを作成する
    pub fn new(client: Client, base_url: impl Into<String>, sink: Arc<dyn TextSink>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            sink,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// 再取得間隔を設定する
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// クエリ文字列からログ名を解決し、表示とポーリングを開始する
    ///
    /// `log` パラメーターが無い・空の場合は固定メッセージを表示するだけで、
    /// ネットワークへは一切出ず `None` を返す。指定がある場合は即時に
    /// 1回取得し、以後は固定間隔で再取得するタスクのハンドルを返す。
    pub async fn display_logs(&self, raw_query: &str) -> Option<LogPollHandle> {
        let params = QueryParams::parse(raw_query);
        let name = match params.get("log") {
            Some(name) if !name.is_empty() => name,
            _ => {
                self.sink.set_text(NO_LOGS_MESSAGE);
                return None;
            }
        };

        let url = self.log_url(name);
        fetch_and_render(&self.client, &url, &self.sink).await;
        Some(self.spawn_poller(url))
    }

    /// ログ名から取得先URLを組み立てる
    ///
    /// 先頭のパス区切りは1つだけ除去する。除去後に空になっても
    /// そのまま連結する（さらなる特別扱いはしない）。
    fn log_url(&self, name: &str) -> String {
        let name = name.strip_prefix('/').unwrap_or(name);
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    fn spawn_poller(&self, url: String) -> LogPollHandle {
        let client = self.client.clone();
        let sink = Arc::clone(&self.sink);
        let poll_interval = self.poll_interval;

        debug!(url = %url, interval_ms = poll_interval.as_millis() as u64, "Log poller started");

        let task = tokio::spawn(async move {
            let mut timer = interval(poll_interval);
            // intervalの初回tickは即時発火する。初回取得は実施済みなので読み捨てる。
            timer.tick().await;
            loop {
                timer.tick().await;
                fetch_and_render(&client, &url, &sink).await;
            }
        });

        LogPollHandle { task }
    }
}

async fn fetch_and_render(client: &Client, url: &str, sink: &Arc<dyn TextSink>) {
    fetch::fetch_text(client, url).await.render(
        |logs| sink.set_text(&logs),
        || sink.set_text(NO_LOGS_MESSAGE),
    );
}
