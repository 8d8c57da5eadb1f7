//! PagePulse 共通クレート
//!
//! ウィジェット群が共有する型定義・エラー型・設定・クエリ文字列解析

#![warn(missing_docs)]

/// エラー型定義
pub mod error;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// クエリ文字列解析
pub mod query;

/// GitHub APIワイヤー型定義
pub mod types;
