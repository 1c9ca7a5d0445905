//! Content-Range レスポンスヘッダー (RFC 9110 Section 14.4)
//!
//! ## 概要
//!
//! 単一バイト範囲の Content-Range ヘッダー値 (`bytes <first>-<last>/<length>`)
//! のパースと生成を提供します。
//!
//! 不正な Content-Range 値は日常的なクライアント入力であってプログラムの
//! バグではないため、パースはエラー型ではなく `Option` を返す全域関数として
//! 実装しています。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_emitter::content_range::{ContentRangeSpec, RangeUnit};
//!
//! let spec = ContentRangeSpec::parse("bytes 0-499/1000").unwrap();
//! assert_eq!(spec.unit(), RangeUnit::Bytes);
//! assert_eq!(spec.first(), 0);
//! assert_eq!(spec.last(), 499);
//! assert_eq!(spec.complete_length(), Some(1000));
//! assert_eq!(spec.to_string(), "bytes 0-499/1000");
//!
//! // 総サイズ不明 (`*`)
//! let spec = ContentRangeSpec::parse("bytes 0-499/*").unwrap();
//! assert_eq!(spec.complete_length(), None);
//! ```

use core::fmt;

/// 範囲単位
///
/// RFC 9110 では bytes 以外の単位も登録可能だが、本ライブラリが解釈するのは
/// bytes のみ。それ以外の単位トークンはパース失敗として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    /// バイト単位
    Bytes,
}

impl RangeUnit {
    /// 単位トークンの文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeUnit::Bytes => "bytes",
        }
    }
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-Range ヘッダー値 (単一範囲)
///
/// `<unit> <first>-<last>/<complete-length or *>` 形式を表す。
/// `first <= last` (両端含む、1 バイト範囲は `first == last`)。
/// `complete_length` が `None` の場合はリソース総サイズ不明 (`*`) を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRangeSpec {
    unit: RangeUnit,
    first: u64,
    last: u64,
    complete_length: Option<u64>,
}

impl ContentRangeSpec {
    /// Content-Range ヘッダー値をパース
    ///
    /// 単位と範囲式の間は 1 個以上の空白を許容する。以下はすべて `None`:
    ///
    /// - 単位トークンが `bytes` 以外
    /// - `first` / `last` が 10 進数字列でない
    /// - `first > last` (逆転した範囲)
    /// - 総サイズ部が数字列でも `*` でもない
    /// - 先頭・末尾の空白 (許容されるのは単位の後の空白だけ)
    /// - 区切り (`-`, `/`) の欠落などの構造的な崩れ
    ///
    /// # 例
    ///
    /// ```rust
    /// use shiguredo_http_emitter::content_range::ContentRangeSpec;
    ///
    /// assert!(ContentRangeSpec::parse("bytes 5-5/10").is_some());
    /// assert!(ContentRangeSpec::parse("bytes   0-3/8").is_some());
    /// assert!(ContentRangeSpec::parse("chars 0-3/8").is_none());
    /// assert!(ContentRangeSpec::parse("bytes 9-3/10").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        // 許容する空白は unit と範囲式の間の 1 個以上のみ。
        // 先頭・末尾の空白は構造的な崩れとして扱う。

        // unit と範囲式の区切り (1 個以上の空白)
        let ws = input.find(|c: char| c.is_ascii_whitespace())?;
        let unit = match &input[..ws] {
            "bytes" => RangeUnit::Bytes,
            _ => return None,
        };
        let rest = input[ws..].trim_start();

        // <first>-<last>/<complete-length>
        let slash = rest.find('/')?;
        let range = &rest[..slash];
        let length = &rest[slash + 1..];

        let dash = range.find('-')?;
        let first = parse_digits(&range[..dash])?;
        let last = parse_digits(&range[dash + 1..])?;
        if first > last {
            return None;
        }

        let complete_length = if length == "*" {
            None
        } else {
            Some(parse_digits(length)?)
        };

        Some(ContentRangeSpec {
            unit,
            first,
            last,
            complete_length,
        })
    }

    /// バイト範囲の Content-Range を作成
    ///
    /// `first > last` の場合は `None`。
    pub fn bytes(first: u64, last: u64, complete_length: Option<u64>) -> Option<Self> {
        if first > last {
            return None;
        }
        Some(ContentRangeSpec {
            unit: RangeUnit::Bytes,
            first,
            last,
            complete_length,
        })
    }

    /// 単位を取得
    pub fn unit(&self) -> RangeUnit {
        self.unit
    }

    /// 開始位置を取得
    pub fn first(&self) -> u64 {
        self.first
    }

    /// 終了位置を取得 (両端含む)
    pub fn last(&self) -> u64 {
        self.last
    }

    /// リソースの総サイズを取得 (不明な場合は None)
    pub fn complete_length(&self) -> Option<u64> {
        self.complete_length
    }

    /// 範囲のバイト数を取得 (`last - first + 1`)
    ///
    /// `last == u64::MAX` の場合は `u64::MAX` で飽和する。送出側の
    /// 「最大 N バイト」という上限用途では飽和が正しい値になる。
    pub fn length(&self) -> u64 {
        (self.last - self.first).saturating_add(1)
    }
}

impl fmt::Display for ContentRangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}/", self.unit, self.first, self.last)?;
        match self.complete_length {
            Some(len) => write!(f, "{}", len),
            None => write!(f, "*"),
        }
    }
}

/// 10 進数字列をパース
///
/// `u64::from_str` と違い、符号 (`+`) や空文字列を受け付けない。
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let spec = ContentRangeSpec::parse("bytes 0-499/1000").unwrap();
        assert_eq!(spec.unit(), RangeUnit::Bytes);
        assert_eq!(spec.first(), 0);
        assert_eq!(spec.last(), 499);
        assert_eq!(spec.complete_length(), Some(1000));
        assert_eq!(spec.length(), 500);
    }

    #[test]
    fn test_parse_unknown_length() {
        let spec = ContentRangeSpec::parse("bytes 0-499/*").unwrap();
        assert_eq!(spec.complete_length(), None);
    }

    #[test]
    fn test_parse_single_byte_range() {
        // first == last は 1 バイト範囲
        let spec = ContentRangeSpec::parse("bytes 5-5/10").unwrap();
        assert_eq!(spec.first(), 5);
        assert_eq!(spec.last(), 5);
        assert_eq!(spec.length(), 1);
    }

    #[test]
    fn test_parse_multiple_whitespace() {
        let spec = ContentRangeSpec::parse("bytes   0-3/8").unwrap();
        assert_eq!(spec.first(), 0);
        assert_eq!(spec.last(), 3);
    }

    #[test]
    fn test_parse_outer_whitespace_rejected() {
        // 許容される空白は unit と範囲式の間だけ
        assert!(ContentRangeSpec::parse(" bytes 0-3/8").is_none());
        assert!(ContentRangeSpec::parse("bytes 0-3/8 ").is_none());
        assert!(ContentRangeSpec::parse("  bytes 0-3/8  ").is_none());
        assert!(ContentRangeSpec::parse("bytes 0-3/* ").is_none());
    }

    #[test]
    fn test_parse_invalid_unit() {
        assert!(ContentRangeSpec::parse("chars 0-3/8").is_none());
        // 単位トークンは大文字小文字を区別する
        assert!(ContentRangeSpec::parse("Bytes 0-3/8").is_none());
        assert!(ContentRangeSpec::parse("byte 0-3/8").is_none());
    }

    #[test]
    fn test_parse_inverted_range() {
        assert!(ContentRangeSpec::parse("bytes 9-3/10").is_none());
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(ContentRangeSpec::parse("bytes a-3/8").is_none());
        assert!(ContentRangeSpec::parse("bytes 0-b/8").is_none());
        assert!(ContentRangeSpec::parse("bytes 0-3/c").is_none());
        // 符号付きは数字列ではない
        assert!(ContentRangeSpec::parse("bytes +0-3/8").is_none());
        assert!(ContentRangeSpec::parse("bytes 0-+3/8").is_none());
    }

    #[test]
    fn test_parse_missing_separators() {
        assert!(ContentRangeSpec::parse("bytes 0-3").is_none());
        assert!(ContentRangeSpec::parse("bytes 03/8").is_none());
        assert!(ContentRangeSpec::parse("bytes").is_none());
        assert!(ContentRangeSpec::parse("").is_none());
        assert!(ContentRangeSpec::parse("0-3/8").is_none());
    }

    #[test]
    fn test_length_saturates_at_u64_max() {
        // last が u64::MAX でもオーバーフローせず飽和する
        let spec = ContentRangeSpec::parse("bytes 0-18446744073709551615/*").unwrap();
        assert_eq!(spec.last(), u64::MAX);
        assert_eq!(spec.length(), u64::MAX);

        let spec = ContentRangeSpec::bytes(1, u64::MAX, None).unwrap();
        assert_eq!(spec.length(), u64::MAX);
    }

    #[test]
    fn test_bytes_constructor() {
        let spec = ContentRangeSpec::bytes(0, 499, Some(1000)).unwrap();
        assert_eq!(spec.to_string(), "bytes 0-499/1000");

        let spec = ContentRangeSpec::bytes(0, 499, None).unwrap();
        assert_eq!(spec.to_string(), "bytes 0-499/*");

        assert!(ContentRangeSpec::bytes(500, 100, Some(1000)).is_none());
    }

    #[test]
    fn test_display_roundtrip() {
        for raw in ["bytes 0-499/1000", "bytes 5-5/10", "bytes 0-0/*"] {
            let spec = ContentRangeSpec::parse(raw).unwrap();
            assert_eq!(spec.to_string(), raw);
            assert_eq!(ContentRangeSpec::parse(&spec.to_string()), Some(spec));
        }
    }
}
