//! コントリビューター一覧
//!
//! 複数リポジトリのコントリビューターを取得し、ログイン名で重複排除
//! したバッジ一覧をページへ蓄積する。

use crate::fetch::{self, FetchOutcome};
use crate::render::{BadgeListSink, ContributorBadge};
use crate::widget::github::GithubIndicator;
use pagepulse_common::types::Contributor;
use reqwest::Client;
use std::sync::Arc;

/// コントリビューター一覧ウィジェット
pub struct ContributorsFeed {
    client: Client,
    sink: Arc<dyn BadgeListSink>,
    indicator: GithubIndicator,
}

impl ContributorsFeed {
    /// 新しいフィードを作成する
    pub fn new(client: Client, sink: Arc<dyn BadgeListSink>, indicator: GithubIndicator) -> Self {
        Self {
            client,
            sink,
            indicator,
        }
    }

    /// 各URLからコントリビューターを取得してバッジを追加する
    ///
    /// URLごとの取得は並行して行われ、完了順の保証はない。完了のたびに
    /// 共有インジケーターを独立に切り替えるため、成功と失敗が混在した
    /// 場合は最後に完了した呼び出しの結果が表示に残る。バッジはペイロード
    /// の出現順に追加され、描画済みログイン名は読み飛ばされる
    /// （先勝ちの重複排除）。
    pub async fn display_contributors(&self, urls: &[String]) {
        let fetches = urls.iter().map(|url| async move {
            let outcome = fetch::fetch_json::<Vec<Contributor>>(&self.client, url).await;
            self.render_outcome(outcome);
        });
        futures::future::join_all(fetches).await;
    }

    fn render_outcome(&self, outcome: FetchOutcome<Vec<Contributor>>) {
        outcome.render(
            |contributors| {
                self.indicator.mark_available();
                for contributor in contributors {
                    if self.sink.has_badge(&contributor.login) {
                        continue;
                    }
                    let badge = ContributorBadge {
                        login: contributor.login,
                        avatar_url: contributor.avatar_url,
                        profile_url: contributor.html_url,
                    };
                    self.sink.append_badge(&badge);
                }
            },
            || self.indicator.mark_unavailable(),
        );
    }
}
