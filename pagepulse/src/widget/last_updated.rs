//! 最終更新日バッジ
//!
//! コミット一覧の先頭コミットの日付を `日/月/年` 形式で表示する。
//! 取得できない場合は現在日付で代替する。

use crate::fetch;
use crate::render::TextSink;
use chrono::{DateTime, Datelike, Utc};
use pagepulse_common::types::CommitEntry;
use reqwest::Client;
use std::sync::Arc;

/// 最終更新日バッジウィジェット
pub struct LastUpdatedBadge {
    client: Client,
    sink: Arc<dyn TextSink>,
}

impl LastUpdatedBadge {
    /// 新しいバッジを作成する
    pub fn new(client: Client, sink: Arc<dyn TextSink>) -> Self {
        Self { client, sink }
    }

    /// 最新コミットの日付を表示する
    ///
    /// 表示はUTCの暦日で行う。コミット一覧が空の場合も取得失敗と同様に
    /// 現在日付へフォールバックする。
    pub async fn display_last_updated(&self, commits_url: &str) {
        fetch::fetch_json::<Vec<CommitEntry>>(&self.client, commits_url)
            .await
            .render(
                |commits| {
                    let date = commits
                        .first()
                        .map(|entry| entry.commit.committer.date)
                        .unwrap_or_else(Utc::now);
                    self.sink.set_text(&format_short_date(&date));
                },
                || self.sink.set_text(&format_short_date(&Utc::now())),
            );
    }
}

/// `日/月/年` 形式（ゼロ埋めなし・月は1始まり）
pub fn format_short_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
