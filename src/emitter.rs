//! レスポンス送出エンジン
//!
//! ## 概要
//!
//! 構築済みの不変レスポンス (ステータス・ヘッダー・ボディ) を、単回使用の
//! 出力トランスポートへ 1 回だけ送出する。
//!
//! - 既に出力が始まっているトランスポートへの送出を検出して拒否する
//! - Content-Range ヘッダーに基づくボディの部分送出 (バイト範囲スライス)
//! - ボディ全体をメモリに置かず、有界チャンクで読み書きする
//! - ヘッダー名の正規化と Set-Cookie の 1 値 1 行送出
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_emitter::{Response, ResponseEmitter, WriterTransport};
//!
//! let mut response = Response::new(200, "OK")
//!     .header("content-type", "text/plain")
//!     .body("Hello, World!");
//!
//! let mut transport = WriterTransport::new(Vec::new());
//! let emitter = ResponseEmitter::new();
//! emitter.emit(&mut transport, &mut response).unwrap();
//!
//! let bytes = transport.into_inner();
//! assert_eq!(
//!     bytes,
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello, World!"
//! );
//! ```

use crate::body::Body;
use crate::content_range::ContentRangeSpec;
use crate::error::{ConfigError, EmitError};
use crate::header::canonical_header_name;
use crate::response::Response;
use crate::transport::OutputTransport;

/// デフォルトのチャンクサイズ (バイト)
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// レスポンス送出エンジン
///
/// `chunk_size` は 1 回のボディ読み取りの上限バイト数であり、送出中の
/// メモリ使用量の上限でもある。構築後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEmitter {
    chunk_size: usize,
}

impl ResponseEmitter {
    /// デフォルトのチャンクサイズで送出エンジンを作成
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// チャンクサイズを指定して送出エンジンを作成
    ///
    /// `chunk_size` が 0 の場合は [`ConfigError::InvalidChunkSize`]。
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize { size: chunk_size });
        }
        Ok(Self { chunk_size })
    }

    /// チャンクサイズを取得
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// レスポンスを送出する (ボディあり)
    ///
    /// ステータス・ヘッダーは変更しない。ボディストリームだけを読み進める
    /// (クローズはしない) ため `&mut Response` を取る。
    pub fn emit<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &mut Response,
    ) -> Result<(), EmitError> {
        self.emit_response(transport, response, true)
    }

    /// ヘッダーのみ送出する (HEAD リクエストへの応答等)
    ///
    /// ステータス行とヘッダーは通常通り送出し、ボディ段階を丸ごと省略する。
    pub fn emit_headers_only<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &mut Response,
    ) -> Result<(), EmitError> {
        self.emit_response(transport, response, false)
    }

    fn emit_response<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &mut Response,
        send_body: bool,
    ) -> Result<(), EmitError> {
        // 前提条件: 1 バイトも書き込む前に検査する。
        // ヘッダー送信済みの検査が先、出力バッファの検査が後 (順序固定)。
        if transport.headers_sent() {
            return Err(EmitError::HeadersAlreadySent);
        }
        if transport.has_pending_output() {
            return Err(EmitError::OutputAlreadyStarted);
        }

        self.emit_status_line(transport, response)?;
        self.emit_headers(transport, response)?;

        // 1xx, 204, 304 は send_body やボディ内容に関わらずボディを持たない
        if status_forbids_body(response) {
            return Ok(());
        }
        if !send_body {
            return Ok(());
        }

        self.emit_body(transport, response)
    }

    fn emit_status_line<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &Response,
    ) -> Result<(), EmitError> {
        // フレーズが空の場合はフレーズ部ごと省略する
        let line = if response.reason_phrase.is_empty() {
            format!("HTTP/{} {}", response.version, response.status_code)
        } else {
            format!(
                "HTTP/{} {} {}",
                response.version, response.status_code, response.reason_phrase
            )
        };
        transport.set_status_line(&line)?;
        Ok(())
    }

    fn emit_headers<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &Response,
    ) -> Result<(), EmitError> {
        for (name, value) in &response.headers {
            let name = canonical_header_name(name);
            if name == "Set-Cookie" {
                // Cookie の属性値自体がカンマを含み得るため、連結せず
                // 1 値につき 1 行送出する
                for v in value.as_slice() {
                    transport.add_header_line(&name, v)?;
                }
            } else {
                transport.add_header_line(&name, &value.joined())?;
            }
        }
        Ok(())
    }

    /// ボディ段階
    ///
    /// Content-Range ヘッダーがパースできる場合は `[first, last]` への
    /// スライス送出、なければ現在位置からの全体送出。パースできない
    /// Content-Range はヘッダーとしては既に原文のまま送出済みであり、
    /// ボディだけが全体送出にフォールバックする (意図的な非対称)。
    fn emit_body<T: OutputTransport>(
        &self,
        transport: &mut T,
        response: &mut Response,
    ) -> Result<(), EmitError> {
        let range = response
            .get_header("Content-Range")
            .and_then(ContentRangeSpec::parse);

        // ボディなし・読み取り不可はエラーではなく空ボディ扱い
        let Body::Stream(body) = &mut response.body else {
            return Ok(());
        };
        if !body.is_readable() {
            return Ok(());
        }

        let mut remaining: Option<u64> = match range {
            Some(spec) => {
                if body.is_seekable() {
                    body.seek(spec.first())?;
                }
                Some(spec.length())
            }
            None => None,
        };

        // チャンクループ: 読み取り長に関わらず、各イテレーションの最後に
        // 必ずフラッシュする
        while !body.eof() {
            if remaining == Some(0) {
                break;
            }
            let want = match remaining {
                Some(rem) => self.chunk_size.min(usize::try_from(rem).unwrap_or(usize::MAX)),
                None => self.chunk_size,
            };
            let chunk = body.read(want)?;
            transport.write_body(&chunk)?;
            transport.flush()?;
            if let Some(rem) = &mut remaining {
                *rem = rem.saturating_sub(chunk.len() as u64);
            }
        }
        Ok(())
    }
}

impl Default for ResponseEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// ボディを持てないステータスコードかどうか (1xx, 204, 304)
fn status_forbids_body(response: &Response) -> bool {
    response.is_informational() || response.status_code == 204 || response.status_code == 304
}
