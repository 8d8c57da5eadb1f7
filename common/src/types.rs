//! GitHub APIワイヤー型定義
//!
//! 各ウィジェットが消費するフィールドのみを定義する。
//! レスポンスに含まれるその他のフィールドは無視される。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// コントリビューター（`/repos/{owner}/{repo}/contributors` の要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contributor {
    /// ログイン名（一意キー）
    pub login: String,
    /// アバター画像URL
    pub avatar_url: String,
    /// プロフィールページURL
    pub html_url: String,
}

/// スター済みリポジトリ（`/users/{user}/starred` の要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarredRepo {
    /// リポジトリ名
    pub name: String,
    /// リポジトリオーナー
    pub owner: RepoOwner,
}

/// リポジトリオーナー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoOwner {
    /// オーナーのログイン名
    pub login: String,
}

/// コミット一覧（`/repos/{owner}/{repo}/commits` の要素）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitEntry {
    /// コミット詳細
    pub commit: CommitDetail,
}

/// コミット詳細
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitDetail {
    /// コミッター署名
    pub committer: CommitSignature,
}

/// コミッター署名
///
/// `date` が標準形式で解析できない場合はデシリアライズ自体が失敗し、
/// 呼び出し側では不正ボディ（利用不可）として扱われる。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitSignature {
    /// コミット日時
    pub date: DateTime<Utc>,
}
