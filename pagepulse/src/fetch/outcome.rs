//! 取得結果の分類
//!
//! トランスポート結果を固定の意味分類へ写像する。
//! `NotFound` / `ServerError` / `NetworkError` は報告経路が異なるだけで、
//! 呼び出し側ではすべて同一の「利用不可」として扱われる。

/// HTTP取得の分類結果
///
/// 1リクエストにつき必ずちょうど1つのバリアントが生成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// 取得成功（期待した形式のボディ）
    Success(T),
    /// HTTP 404
    NotFound,
    /// HTTP 5xx
    ServerError,
    /// トランスポート障害・不正なボディ・その他のステータス
    NetworkError,
}

impl<T> FetchOutcome<T> {
    /// 利用不可（`Success` 以外）かどうか
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, FetchOutcome::Success(_))
    }

    /// 成功ならデータコールバック、利用不可ならフォールバックコールバックを
    /// ちょうど1回呼び出す
    ///
    /// これが取得ポリシーの唯一の外部作用点になる。どちらのコールバックも
    /// 呼ばれない・両方呼ばれるということは起きない。
    pub fn render<D, U>(self, on_data: D, on_unavailable: U)
    where
        D: FnOnce(T),
        U: FnOnce(),
    {
        match self {
            FetchOutcome::Success(payload) => on_data(payload),
            _ => on_unavailable(),
        }
    }

    /// `Success` の中身を写像する
    pub fn map<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchOutcome::Success(payload) => FetchOutcome::Success(f(payload)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::ServerError => FetchOutcome::ServerError,
            FetchOutcome::NetworkError => FetchOutcome::NetworkError,
        }
    }
}
