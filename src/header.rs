//! HTTP ヘッダー名・ヘッダー値の正規化
//!
//! ## 概要
//!
//! レスポンスのヘッダー値は単一の文字列のことも文字列の列のこともある。
//! 送出ロジックが 1 つの形だけを扱えるよう、「1 個以上の文字列の列」へ
//! 正規化した [`HeaderValue`] を提供します。あわせて、ヘッダー名を
//! `Capitalized-Hyphenated` 形式へ正規化する [`canonical_header_name`] を
//! 提供します。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_emitter::header::{HeaderValue, canonical_header_name};
//!
//! let mut value = HeaderValue::single("text/html");
//! assert_eq!(value.as_slice(), ["text/html"]);
//! value.push("charset=utf-8");
//! assert_eq!(value.joined(), "text/html, charset=utf-8");
//!
//! assert_eq!(canonical_header_name("CONTENT-type"), "Content-Type");
//! assert_eq!(canonical_header_name("X-Custom-HEADER"), "X-Custom-Header");
//! ```

/// ヘッダー値 (単一または複数)
///
/// 内部的には常に「1 個以上の値の列」として扱える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// 単一値
    Single(String),
    /// 複数値 (1 個以上)
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// 単一値から作成
    pub fn single(value: &str) -> Self {
        HeaderValue::Single(value.to_string())
    }

    /// 複数値から作成
    ///
    /// 値なしのヘッダーは表現しないため、空リストの場合は `None`。
    pub fn multiple(values: Vec<String>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(HeaderValue::Multiple(values))
        }
    }

    /// 1 個以上の値のスライスとして取得
    pub fn as_slice(&self) -> &[String] {
        match self {
            HeaderValue::Single(value) => std::slice::from_ref(value),
            HeaderValue::Multiple(values) => values,
        }
    }

    /// 値を末尾に追加 (Single は Multiple へ昇格する)
    pub fn push(&mut self, value: &str) {
        match self {
            HeaderValue::Single(existing) => {
                *self = HeaderValue::Multiple(vec![std::mem::take(existing), value.to_string()]);
            }
            HeaderValue::Multiple(values) => values.push(value.to_string()),
        }
    }

    /// すべての値を `", "` で連結した 1 行表現を取得
    pub fn joined(&self) -> String {
        self.as_slice().join(", ")
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::single(value)
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Single(value)
    }
}

/// ヘッダー名を正規形 (`Capitalized-Hyphenated`) へ変換
///
/// 名前全体を小文字化した後、`-` で分割した各セグメントの先頭文字を
/// 大文字化して再結合する (`CONTENT-Type` → `Content-Type`)。
pub fn canonical_header_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let mut canonical = String::with_capacity(lower.len());
    for (i, segment) in lower.split('-').enumerate() {
        if i > 0 {
            canonical.push('-');
        }
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            canonical.push(head.to_ascii_uppercase());
            canonical.push_str(chars.as_str());
        }
    }
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonical_header_name("CONTENT-Type"), "Content-Type");
        assert_eq!(canonical_header_name("X-Custom-HEADER"), "X-Custom-Header");
        assert_eq!(canonical_header_name("etag"), "Etag");
        assert_eq!(canonical_header_name("set-cookie"), "Set-Cookie");
    }

    #[test]
    fn test_canonical_header_name_idempotent() {
        let once = canonical_header_name("x-forwarded-FOR");
        assert_eq!(canonical_header_name(&once), once);
    }

    #[test]
    fn test_canonical_header_name_empty_segments() {
        // 連続ハイフンはそのまま保持される
        assert_eq!(canonical_header_name("x--y"), "X--Y");
        assert_eq!(canonical_header_name("-x"), "-X");
    }

    #[test]
    fn test_header_value_single() {
        let value = HeaderValue::single("text/plain");
        assert_eq!(value.as_slice(), ["text/plain"]);
        assert_eq!(value.joined(), "text/plain");
    }

    #[test]
    fn test_header_value_multiple() {
        let value =
            HeaderValue::multiple(vec!["no-cache".to_string(), "no-store".to_string()]).unwrap();
        assert_eq!(value.as_slice().len(), 2);
        assert_eq!(value.joined(), "no-cache, no-store");

        assert!(HeaderValue::multiple(Vec::new()).is_none());
    }

    #[test]
    fn test_header_value_push_promotes() {
        let mut value = HeaderValue::single("a=1");
        value.push("b=2");
        value.push("c=3");
        assert_eq!(value.as_slice(), ["a=1", "b=2", "c=3"]);
        assert_eq!(value.joined(), "a=1, b=2, c=3");
    }
}
