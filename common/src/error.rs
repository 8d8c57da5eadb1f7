//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! ウィジェットの描画経路は失敗を `FetchOutcome` の分類として飲み込むため、
//! ここで定義するエラーはホスト側（設定・CLI）の境界でのみ使用される。

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Page host error type
#[derive(Debug, Error)]
pub enum PageError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Page host)
pub type PageResult<T> = Result<T, PageError>;
