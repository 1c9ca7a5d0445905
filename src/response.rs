//! HTTP レスポンス値
//!
//! 送出エンジンが消費する構築済みのレスポンス記述。ステータス・ヘッダーは
//! 1 回の送出の間不変であり、読み進めにより内部状態が変わるのはボディ
//! ストリームだけである。

use crate::body::Body;
use crate::header::HeaderValue;

/// HTTP レスポンス
#[derive(Debug)]
pub struct Response {
    /// プロトコルバージョンのラベル ("1.1", "2" 等)
    pub version: String,
    /// ステータスコード (200, 404, etc.)
    pub status_code: u16,
    /// ステータスフレーズ (空文字列の場合、ステータス行から省略される)
    pub reason_phrase: String,
    /// ヘッダー (名前ごとに 1 個以上の値、挿入順を保持)
    pub headers: Vec<(String, HeaderValue)>,
    /// ボディ
    pub body: Body,
}

impl Response {
    /// 新しいレスポンスを作成 (HTTP/1.1)
    pub fn new(status_code: u16, reason_phrase: &str) -> Self {
        Self {
            version: "1.1".to_string(),
            status_code,
            reason_phrase: reason_phrase.to_string(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// カスタムバージョンでレスポンスを作成
    pub fn with_version(version: &str, status_code: u16, reason_phrase: &str) -> Self {
        Self {
            version: version.to_string(),
            status_code,
            reason_phrase: reason_phrase.to_string(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// ヘッダーを追加 (ビルダーパターン)
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// ボディを設定 (ビルダーパターン)
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// ヘッダーを追加
    ///
    /// 同名 (大文字小文字を区別しない) のエントリが既にあれば、その値列の
    /// 末尾に追加する。なければ新しいエントリとして挿入順の末尾に加わる。
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => existing.push(value),
            None => self
                .headers
                .push((name.to_string(), HeaderValue::single(value))),
        }
    }

    /// ヘッダーを置き換える
    ///
    /// 同名のエントリがあれば値を差し替え (位置は維持)、なければ追加する。
    pub fn set_header(&mut self, name: &str, value: HeaderValue) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    /// ヘッダーの最初の値を取得 (大文字小文字を区別しない)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_slice().first())
            .map(|v| v.as_str())
    }

    /// 指定した名前のヘッダーの値をすべて取得
    pub fn get_header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice().iter().map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }

    /// ヘッダーが存在するか確認
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// ステータスコードが情報レスポンス (1xx) か確認
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.status_code)
    }

    /// ステータスコードが成功 (2xx) か確認
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// ステータスコードがリダイレクト (3xx) か確認
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// ステータスコードがクライアントエラー (4xx) か確認
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// ステータスコードがサーバーエラー (5xx) か確認
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}
