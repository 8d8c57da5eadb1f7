//! インメモリページモデル
//!
//! 実ページの代わりに全シンクをメモリ上で実装する。
//! CLIホストの端末描画とテストの両方がこれを使用する。

use super::{
    BadgeAsset, BadgeListSink, BadgeSink, ContributorBadge, LinkListSink, RepoLink, TextSink,
    VisibilitySink,
};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct PageState {
    log_text: String,
    status_badge: Option<BadgeAsset>,
    contributors: Vec<ContributorBadge>,
    starred: Vec<RepoLink>,
    last_updated: String,
    github_ok_visible: bool,
    github_unavailable_visible: bool,
}

/// インメモリページ
///
/// クローンは同じページ状態を共有する。各出力領域のシンクを払い出し、
/// 現在の状態は [`PageModel::snapshot`] で取得する。
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    state: Arc<Mutex<PageState>>,
}

impl PageModel {
    /// 空のページを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// ログテキスト領域のシンク
    pub fn log_sink(&self) -> Arc<dyn TextSink> {
        Arc::new(LogArea(self.state.clone()))
    }

    /// ステータスバッジ枠のシンク
    pub fn status_sink(&self) -> Arc<dyn BadgeSink> {
        Arc::new(StatusSlot(self.state.clone()))
    }

    /// コントリビューターバッジリストのシンク
    pub fn contributors_sink(&self) -> Arc<dyn BadgeListSink> {
        Arc::new(ContributorList(self.state.clone()))
    }

    /// スター済みリポジトリリストのシンク
    pub fn starred_sink(&self) -> Arc<dyn LinkListSink> {
        Arc::new(StarredList(self.state.clone()))
    }

    /// 最終更新日テキストのシンク
    pub fn last_updated_sink(&self) -> Arc<dyn TextSink> {
        Arc::new(LastUpdatedText(self.state.clone()))
    }

    /// GitHub利用可能インジケーターのシンク
    pub fn github_ok_sink(&self) -> Arc<dyn VisibilitySink> {
        Arc::new(GithubOkFlag(self.state.clone()))
    }

    /// GitHub利用不可インジケーターのシンク
    pub fn github_unavailable_sink(&self) -> Arc<dyn VisibilitySink> {
        Arc::new(GithubUnavailableFlag(self.state.clone()))
    }

    /// 現在のページ状態のスナップショット
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.lock().expect("page state lock poisoned");
        PageSnapshot {
            log_text: state.log_text.clone(),
            status_badge: state.status_badge,
            contributors: state.contributors.clone(),
            starred: state.starred.clone(),
            last_updated: state.last_updated.clone(),
            github_ok_visible: state.github_ok_visible,
            github_unavailable_visible: state.github_unavailable_visible,
        }
    }
}

/// ページ状態のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// ログ表示領域のテキスト
    pub log_text: String,
    /// 選択中のステータスバッジ（未描画なら `None`）
    pub status_badge: Option<BadgeAsset>,
    /// 描画済みコントリビューターバッジ（追加順）
    pub contributors: Vec<ContributorBadge>,
    /// 描画済みリポジトリリンク（追加順）
    pub starred: Vec<RepoLink>,
    /// 最終更新日テキスト
    pub last_updated: String,
    /// GitHub利用可能インジケーターの可視状態
    pub github_ok_visible: bool,
    /// GitHub利用不可インジケーターの可視状態
    pub github_unavailable_visible: bool,
}

impl PageSnapshot {
    /// 端末向けの簡易レンダリング
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let status = match self.status_badge {
            Some(BadgeAsset::Online) => "online",
            Some(BadgeAsset::Offline) => "offline",
            None => "unknown",
        };
        let _ = writeln!(out, "service status : {status}");

        let github = if self.github_unavailable_visible {
            "unavailable"
        } else if self.github_ok_visible {
            "ok"
        } else {
            "unknown"
        };
        let _ = writeln!(out, "github         : {github}");

        if !self.last_updated.is_empty() {
            let _ = writeln!(out, "last updated   : {}", self.last_updated);
        }

        if !self.contributors.is_empty() {
            let _ = writeln!(out, "contributors   :");
            for badge in &self.contributors {
                let _ = writeln!(out, "  {} <{}>", badge.login, badge.profile_url);
            }
        }

        if !self.starred.is_empty() {
            let _ = writeln!(out, "starred        :");
            for link in &self.starred {
                let _ = writeln!(out, "  {} ({})", link.url, link.title);
            }
        }

        if !self.log_text.is_empty() {
            let _ = writeln!(out, "logs           :");
            for line in self.log_text.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }

        out
    }
}

struct LogArea(Arc<Mutex<PageState>>);

impl TextSink for LogArea {
    fn set_text(&self, text: &str) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.log_text = text.to_string();
    }
}

struct StatusSlot(Arc<Mutex<PageState>>);

impl BadgeSink for StatusSlot {
    fn select(&self, asset: BadgeAsset) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.status_badge = Some(asset);
    }
}

struct ContributorList(Arc<Mutex<PageState>>);

impl BadgeListSink for ContributorList {
    fn has_badge(&self, login: &str) -> bool {
        let state = self.0.lock().expect("page state lock poisoned");
        state.contributors.iter().any(|b| b.login == login)
    }

    fn append_badge(&self, badge: &ContributorBadge) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.contributors.push(badge.clone());
    }
}

struct StarredList(Arc<Mutex<PageState>>);

impl LinkListSink for StarredList {
    fn append_link(&self, link: &RepoLink) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.starred.push(link.clone());
    }
}

struct LastUpdatedText(Arc<Mutex<PageState>>);

impl TextSink for LastUpdatedText {
    fn set_text(&self, text: &str) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.last_updated = text.to_string();
    }
}

struct GithubOkFlag(Arc<Mutex<PageState>>);

impl VisibilitySink for GithubOkFlag {
    fn set_visible(&self, visible: bool) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.github_ok_visible = visible;
    }
}

struct GithubUnavailableFlag(Arc<Mutex<PageState>>);

impl VisibilitySink for GithubUnavailableFlag {
    fn set_visible(&self, visible: bool) {
        let mut state = self.0.lock().expect("page state lock poisoned");
        state.github_unavailable_visible = visible;
    }
}
