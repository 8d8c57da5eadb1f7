//! PagePulse ページウィジェットエンジン
//!
//! ステータスページを構成する独立したfetch-and-renderウィジェット群。
//! 各ウィジェットは1回のHTTP GETを分類し、注入されたシンクへ描画する。
//! 失敗はすべて固定のフォールバック表示へ縮退し、エラーを伝播しない。

#![warn(missing_docs)]

/// HTTP取得と結果分類
pub mod fetch;

/// レンダリングシンク
pub mod render;

/// ページウィジェット群
pub mod widget;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use fetch::FetchOutcome;
