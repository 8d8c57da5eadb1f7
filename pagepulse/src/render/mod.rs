//! レンダリングシンク
//!
//! ページ側が所有する出力領域への不透明な書き込み口。
//! ウィジェットは「テキスト設定」「項目追加」「2種の画像から選択」
//! 「表示/非表示」以上のことをシンクに対して行わない。

pub mod memory;

/// ステータスバッジ画像の選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeAsset {
    /// 稼働中バッジ
    Online,
    /// 停止中バッジ
    Offline,
}

/// テキスト領域シンク
///
/// ログ表示領域・最終更新日表示が使用する。
pub trait TextSink: Send + Sync {
    /// 表示テキストを置き換える
    fn set_text(&self, text: &str);
}

/// 2種の固定画像から1つを選ぶシンク
pub trait BadgeSink: Send + Sync {
    /// バッジ画像を選択する
    fn select(&self, asset: BadgeAsset);
}

/// 表示/非表示シンク
pub trait VisibilitySink: Send + Sync {
    /// 可視状態を設定する
    fn set_visible(&self, visible: bool);
}

/// コントリビューターバッジ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorBadge {
    /// ログイン名（要素キー兼ツールチップ）
    pub login: String,
    /// アバター画像URL
    pub avatar_url: String,
    /// プロフィールリンク先
    pub profile_url: String,
}

/// ログイン名をキーとするバッジリストシンク
///
/// 重複判定は「既にページへ描画済みか」をシンク側へ問い合わせる形で行う。
pub trait BadgeListSink: Send + Sync {
    /// 同じキーのバッジが描画済みかどうか
    fn has_badge(&self, login: &str) -> bool;
    /// バッジを末尾へ追加する
    fn append_badge(&self, badge: &ContributorBadge);
}

/// リポジトリリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLink {
    /// リンク先URL（ラベルとしても表示される）
    pub url: String,
    /// ツールチップ（リポジトリ名）
    pub title: String,
}

/// リンクリストシンク
pub trait LinkListSink: Send + Sync {
    /// リンクを末尾へ追加する
    fn append_link(&self, link: &RepoLink);
}
