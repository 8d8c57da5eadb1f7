//! サービス稼働状況バッジ
//!
//! ヘルスチェックURLへ1回だけGETし、到達可否でバッジ画像を選択する。
//! ログビューアーと違いポーリングはしない。

use crate::fetch;
use crate::render::{BadgeAsset, BadgeSink};
use reqwest::Client;
use std::sync::Arc;

/// サービス稼働状況バッジ
pub struct ServiceStatusIndicator {
    client: Client,
    sink: Arc<dyn BadgeSink>,
}

impl ServiceStatusIndicator {
    /// 新しいインジケーターを作成する
    pub fn new(client: Client, sink: Arc<dyn BadgeSink>) -> Self {
        Self { client, sink }
    }

    /// ヘルスチェック結果に応じてバッジを選択する
    ///
    /// 応答が返れば稼働中、それ以外（404・5xx・到達不能・URL未指定）は
    /// すべて停止中として扱う。
    pub async fn display_status(&self, url: &str) {
        fetch::fetch_text(&self.client, url).await.render(
            |_| self.sink.select(BadgeAsset::Online),
            || self.sink.select(BadgeAsset::Offline),
        );
    }
}
