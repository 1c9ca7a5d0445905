//! レスポンスボディのストリーム抽象
//!
//! ## 概要
//!
//! 送出エンジンはボディを一括でメモリに置かず、有界のチャンクで読み進める。
//! ボディの能力 (読み取り可能・シーク可能・既知長) は実装ごとに異なるため、
//! [`BodyStream`] トレイトとして抽象化する。
//!
//! ストリームの所有権は常に呼び出し側にある。送出エンジンは読み取りと
//! シークだけを行い、クローズや解放は行わない。

use core::fmt;
use std::io;

/// ボディストリームの能力トレイト
///
/// `read` は最大 `n` バイトを返す。0 バイトの読み取りは正当であり、
/// 終端 (`eof`) とは区別される。
pub trait BodyStream {
    /// 読み取り可能かどうか
    fn is_readable(&self) -> bool;

    /// シーク可能かどうか
    fn is_seekable(&self) -> bool;

    /// 最後の読み取り時点で終端に達しているかどうか
    fn eof(&self) -> bool;

    /// 総バイト数 (不明な場合は None)
    fn size(&self) -> Option<u64>;

    /// 最大 `n` バイトを読み取る
    fn read(&mut self, n: usize) -> io::Result<Vec<u8>>;

    /// 先頭からの絶対オフセットへ移動する
    fn seek(&mut self, offset: u64) -> io::Result<()>;
}

/// レスポンスボディ
///
/// ボディなし ([`Body::Empty`]) か、ストリームハンドルのいずれか。
pub enum Body {
    /// ボディなし
    Empty,
    /// ストリームハンドル
    Stream(Box<dyn BodyStream>),
}

impl Body {
    /// 任意の [`BodyStream`] 実装からボディを作成
    pub fn stream(stream: impl BodyStream + 'static) -> Self {
        Body::Stream(Box::new(stream))
    }

    /// ボディなしかどうか
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Stream(stream) => f.debug_struct("Stream").field("size", &stream.size()).finish(),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(data: Vec<u8>) -> Self {
        Body::stream(BytesBody::new(data))
    }
}

impl From<&[u8]> for Body {
    fn from(data: &[u8]) -> Self {
        Body::stream(BytesBody::new(data.to_vec()))
    }
}

impl From<&str> for Body {
    fn from(data: &str) -> Self {
        Body::stream(BytesBody::new(data.as_bytes().to_vec()))
    }
}

/// インメモリボディ
///
/// 読み取り可能・シーク可能・既知長のすべてを満たす最も単純な実装。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytesBody {
    data: Vec<u8>,
    pos: usize,
}

impl BytesBody {
    /// バイト列からボディを作成 (読み取り位置は先頭)
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl BodyStream for BytesBody {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn size(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }

    fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let end = self.data.len().min(self.pos.saturating_add(n));
        let chunk = self.data[self.pos..end].to_vec();
        self.pos = end;
        Ok(chunk)
    }

    fn seek(&mut self, offset: u64) -> io::Result<()> {
        // データ長を超えるオフセットは終端へのシークとして扱う
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        self.pos = offset.min(self.data.len());
        Ok(())
    }
}
