//! スター済みリポジトリ一覧
//!
//! GitHubユーザーのスター一覧を取得し、GitHub Pagesの命名規則から
//! 導出したURLのリンクをページへ追加する。

use crate::fetch;
use crate::render::{LinkListSink, RepoLink};
use crate::widget::github::GithubIndicator;
use pagepulse_common::config::DEFAULT_GITHUB_API_URL;
use pagepulse_common::types::StarredRepo;
use reqwest::Client;
use std::sync::Arc;

/// スター済みリポジトリ一覧ウィジェット
pub struct StarredReposFeed {
    client: Client,
    sink: Arc<dyn LinkListSink>,
    indicator: GithubIndicator,
    api_base: String,
}

impl StarredReposFeed {
    /// 新しいフィードを作成する
    pub fn new(client: Client, sink: Arc<dyn LinkListSink>, indicator: GithubIndicator) -> Self {
        Self {
            client,
            sink,
            indicator,
            api_base: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }

    /// GitHub APIのベースURLを差し替える
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// ユーザーのスター一覧を取得してリンクを追加する
    ///
    /// リンクはペイロードの出現順に重複排除なしで追加される。
    /// ユーザー名が空の場合は取得せず利用不可表示にする。
    pub async fn display_starred(&self, username: &str) {
        if username.is_empty() {
            self.indicator.mark_unavailable();
            return;
        }

        let url = format!(
            "{}/users/{}/starred",
            self.api_base.trim_end_matches('/'),
            username
        );

        fetch::fetch_json::<Vec<StarredRepo>>(&self.client, &url)
            .await
            .render(
                |starred| {
                    self.indicator.mark_available();
                    for repo in starred {
                        let link = RepoLink {
                            url: pages_url(&repo.owner.login, &repo.name),
                            title: repo.name,
                        };
                        self.sink.append_link(&link);
                    }
                },
                || self.indicator.mark_unavailable(),
            );
    }
}

/// GitHub Pages命名規則による表示URLの導出
///
/// リポジトリ名が `<owner>.github.io` そのものならそのままホスト名になり、
/// それ以外は `http://<owner>.github.io/<name>` になる。
pub fn pages_url(owner: &str, name: &str) -> String {
    if name == format!("{owner}.github.io") {
        format!("http://{name}")
    } else {
        format!("http://{owner}.github.io/{name}")
    }
}
