//! ロギング初期化ユーティリティ
//!
//! `PAGEPULSE_LOG_LEVEL` でフィルターを制御する（未設定時は `info`）。

use tracing_subscriber::EnvFilter;

/// ログレベルを指定する環境変数名
pub const LOG_LEVEL_ENV: &str = "PAGEPULSE_LOG_LEVEL";

/// tracingサブスクライバーを初期化する
///
/// 既に初期化済みの場合（テスト等）は何もしない。
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
