//! CLIインターフェース
//!
//! 元の静的ページに相当するホストのコマンドラインを提供する。
//! フラグは環境変数由来の設定を上書きする。

use clap::Parser;
use pagepulse_common::config::PageConfig;

/// PagePulse - fetch-and-render status page widgets
#[derive(Parser, Debug)]
#[command(name = "pagepulse")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PAGEPULSE_LOG_SERVICE_URL       Log service base URL
    PAGEPULSE_STATUS_URL            Health check (ping) URL
    PAGEPULSE_GITHUB_API_URL        GitHub API base URL (default: https://api.github.com)
    PAGEPULSE_CONTRIBUTOR_REPOS     Comma separated owner/name list
    PAGEPULSE_GITHUB_USER           GitHub user for the starred feed
    PAGEPULSE_COMMITS_URL           Commits URL for the last-updated badge
    PAGEPULSE_POLL_INTERVAL_SECS    Log re-fetch interval (default: 10)
    PAGEPULSE_REQUEST_TIMEOUT_SECS  HTTP request timeout (default: 5)
    PAGEPULSE_LOG_LEVEL             Log level (default: info)
"#)]
pub struct Cli {
    /// ページのクエリ文字列（例: "log=app.txt"）
    #[arg(long, default_value = "")]
    pub query: String,

    /// ログポーリングを継続する（Ctrl-Cで終了）
    #[arg(long)]
    pub watch: bool,

    /// ログ取得サービスのベースURL
    #[arg(long)]
    pub log_service_url: Option<String>,

    /// ヘルスチェック（ping）URL
    #[arg(long)]
    pub status_url: Option<String>,

    /// コントリビューター取得対象リポジトリ（`owner/name` カンマ区切り）
    #[arg(long)]
    pub contributor_repos: Option<String>,

    /// スター一覧を取得するGitHubユーザー
    #[arg(long)]
    pub github_user: Option<String>,

    /// 最終更新日に使うコミット一覧URL
    #[arg(long)]
    pub commits_url: Option<String>,
}

impl Cli {
    /// 環境変数由来の設定へCLIの上書きを適用する
    pub fn resolve_config(&self) -> PageConfig {
        let mut config = PageConfig::from_env();

        if let Some(url) = &self.log_service_url {
            config.log_service_url = url.clone();
        }
        if let Some(url) = &self.status_url {
            config.status_url = url.clone();
        }
        if let Some(repos) = &self.contributor_repos {
            config.contributor_repos = repos
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(user) = &self.github_user {
            config.github_user = user.clone();
        }
        if let Some(url) = &self.commits_url {
            config.commits_url = url.clone();
        }

        config
    }
}
