//! 統合テスト用ヘルパー
//!
//! GitHub API形のペイロード生成と共有のテスト部品。

use pagepulse::render::memory::PageModel;
use pagepulse::widget::GithubIndicator;
use serde_json::{json, Value};
use std::time::Duration;

/// テスト用HTTPクライアント（短めのタイムアウト）
pub fn test_client() -> reqwest::Client {
    pagepulse::fetch::build_http_client(Duration::from_secs(2))
}

/// ページのインジケーターペアからGithubIndicatorを作る
pub fn github_indicator(page: &PageModel) -> GithubIndicator {
    GithubIndicator::new(page.github_ok_sink(), page.github_unavailable_sink())
}

/// コントリビューターAPIの1要素（余分なフィールド込み）
pub fn contributor_json(login: &str, avatar: &str) -> Value {
    json!({
        "login": login,
        "avatar_url": avatar,
        "html_url": format!("https://github.com/{login}"),
        "contributions": 1,
        "type": "User"
    })
}

/// スター一覧APIの1要素（余分なフィールド込み）
pub fn starred_json(owner: &str, name: &str) -> Value {
    json!({
        "name": name,
        "owner": { "login": owner, "id": 1 },
        "stargazers_count": 0
    })
}

/// コミット一覧APIのレスポンス（新しい順）
pub fn commits_json(dates: &[&str]) -> Value {
    Value::Array(
        dates
            .iter()
            .map(|date| {
                json!({
                    "sha": "0000000",
                    "commit": { "committer": { "name": "ci", "date": date } }
                })
            })
            .collect(),
    )
}
