//! ページウィジェット群
//!
//! 各ウィジェットは独立したfetch-and-render単位で、実行時に互いへ
//! 依存しない。共有するのはGitHub可用性インジケーターの表示ペアのみ。

/// ログビューアー（唯一ポーリングを行う）
pub mod logs;

/// サービス稼働状況バッジ
pub mod status;

/// GitHub可用性インジケーター（GitHub系ウィジェットが共有）
pub mod github;

/// コントリビューター一覧
pub mod contributors;

/// スター済みリポジトリ一覧
pub mod starred;

/// 最終更新日バッジ
pub mod last_updated;

pub use contributors::ContributorsFeed;
pub use github::GithubIndicator;
pub use last_updated::LastUpdatedBadge;
pub use logs::{LogPollHandle, LogViewer};
pub use starred::StarredReposFeed;
pub use status::ServiceStatusIndicator;
