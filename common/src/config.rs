//! 設定管理（環境変数ヘルパー）
//!
//! `PAGEPULSE_*` 環境変数からページ設定を組み立てる。
//! 解析に失敗した値は警告ログを出してデフォルトへフォールバックする。

use crate::error::{CommonError, CommonResult};
use std::time::Duration;

/// 環境変数を取得する（未設定時はデフォルト値）
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// 環境変数を取得して型変換する
///
/// 未設定または解析に失敗した場合はデフォルト値を返す。
/// 解析失敗は警告ログに残す。
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has an unparseable value '{}', using default",
                name,
                value
            );
            default
        }),
        Err(_) => default,
    }
}

/// ログ再取得間隔のデフォルト（秒）
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// HTTPリクエストタイムアウトのデフォルト（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// GitHub APIのデフォルトベースURL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// ページ設定
///
/// 各ウィジェットの取得先とポーリング・タイムアウト設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// ログ取得サービスのベースURL
    pub log_service_url: String,
    /// ヘルスチェック（ping）URL
    pub status_url: String,
    /// GitHub APIベースURL
    pub github_api_url: String,
    /// コントリビューター取得対象リポジトリ（`owner/name`）一覧
    pub contributor_repos: Vec<String>,
    /// スター一覧を取得するGitHubユーザー
    pub github_user: String,
    /// 最終更新日に使うコミット一覧URL
    pub commits_url: String,
    /// ログ再取得間隔
    pub poll_interval: Duration,
    /// HTTPリクエストタイムアウト
    pub request_timeout: Duration,
}

impl PageConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let repos = env_or("PAGEPULSE_CONTRIBUTOR_REPOS", "");
        let contributor_repos = repos
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            log_service_url: env_or(
                "PAGEPULSE_LOG_SERVICE_URL",
                "http://localhost:8080/api/logs",
            ),
            status_url: env_or("PAGEPULSE_STATUS_URL", "http://localhost:8080/api/ping"),
            github_api_url: env_or("PAGEPULSE_GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            contributor_repos,
            github_user: env_or("PAGEPULSE_GITHUB_USER", ""),
            commits_url: env_or("PAGEPULSE_COMMITS_URL", ""),
            poll_interval: Duration::from_secs(env_parse(
                "PAGEPULSE_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )),
            request_timeout: Duration::from_secs(env_parse(
                "PAGEPULSE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
        }
    }

    /// 設定値の妥当性を検証する
    ///
    /// ゼロ間隔のポーリングとゼロタイムアウトは起動前に弾く。
    pub fn validate(&self) -> CommonResult<()> {
        if self.poll_interval.is_zero() {
            return Err(CommonError::Validation(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(CommonError::Validation(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// コントリビューター取得先URLの一覧を組み立てる
    pub fn contributor_urls(&self) -> Vec<String> {
        let base = self.github_api_url.trim_end_matches('/');
        self.contributor_repos
            .iter()
            .map(|repo| format!("{}/repos/{}/contributors", base, repo))
            .collect()
    }
}
