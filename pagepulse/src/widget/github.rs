//! GitHub可用性インジケーター
//!
//! GitHub APIを使う2ウィジェット（コントリビューター・スター一覧）が
//! 共有する表示ペア。呼び出しの完了ごとに独立して切り替わるため、
//! 複数呼び出しの成否が混在した場合は最後に完了した呼び出しの結果が
//! 表示に残る。

use crate::render::VisibilitySink;
use std::sync::Arc;

/// GitHub可用性インジケーター（ok / unavailable の表示ペア）
#[derive(Clone)]
pub struct GithubIndicator {
    ok: Arc<dyn VisibilitySink>,
    unavailable: Arc<dyn VisibilitySink>,
}

impl GithubIndicator {
    /// 表示ペアからインジケーターを作成する
    pub fn new(ok: Arc<dyn VisibilitySink>, unavailable: Arc<dyn VisibilitySink>) -> Self {
        Self { ok, unavailable }
    }

    /// GitHub呼び出し成功を表示する（okを表示・unavailableを隠す）
    pub fn mark_available(&self) {
        self.unavailable.set_visible(false);
        self.ok.set_visible(true);
    }

    /// GitHub呼び出し失敗を表示する（unavailableを表示・okを隠す）
    pub fn mark_unavailable(&self) {
        self.ok.set_visible(false);
        self.unavailable.set_visible(true);
    }
}
