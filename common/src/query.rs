//! クエリ文字列解析
//!
//! ページURLのクエリ部を小文字キーのマップへ変換する。
//! デコードはform-urlencoded規則に従う（`+` は空白になる）。

use std::collections::HashMap;

/// 解析済みクエリパラメーター
///
/// キーは小文字へ正規化され、同名キーは後勝ちで上書きされる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// クエリ文字列を解析する
    ///
    /// 先頭の `?` は無視する。`&` 区切りの `key=value` をURLデコードし、
    /// キーを小文字化して左から右へ格納する。値の無いキーは空文字列になる。
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();

        let mut params = HashMap::new();
        for (key, value) in pairs {
            params.insert(key.to_lowercase(), value);
        }
        Self { params }
    }

    /// パラメーターを取得する（キーの大文字小文字は区別しない）
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_lowercase()).map(String::as_str)
    }

    /// パラメーターが1つも無いかどうか
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// 格納されているパラメーター数
    pub fn len(&self) -> usize {
        self.params.len()
    }
}
