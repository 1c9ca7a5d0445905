//! 出力トランスポート抽象
//!
//! ## 概要
//!
//! ホストランタイムが提供する出力プリミティブ (ステータス行設定・
//! ヘッダー行追加・ボディ書き込み・フラッシュ) と、出力状態の照会
//! (ヘッダー送信済みか・出力バッファに内容が残っているか) を
//! [`OutputTransport`] トレイトとして抽象化する。
//!
//! 暗黙のグローバル状態に依存しないことで、送出エンジンをフェイク
//! トランスポートで単体テストできる。
//!
//! あわせて、任意の [`std::io::Write`] へ HTTP/1.1 のワイヤ形式
//! (ステータス行 CRLF、ヘッダー行 CRLF、ボディ前の空行) で書き出す
//! [`WriterTransport`] を提供する。

use std::io;
use std::io::Write;

/// 出力トランスポート
///
/// 1 リクエスト/レスポンスサイクルにつき単回使用を想定する。
/// 状態照会 2 種と出力プリミティブ 4 種のみからなる。
pub trait OutputTransport {
    /// ヘッダーが既に送信 (コミット) 済みかどうか
    fn headers_sent(&self) -> bool;

    /// 出力バッファに未送出の内容が残っているかどうか
    ///
    /// バッファが存在しても空であれば false。
    fn has_pending_output(&self) -> bool;

    /// ステータス行を設定する (`HTTP/1.1 200 OK` 等)
    fn set_status_line(&mut self, line: &str) -> io::Result<()>;

    /// ヘッダー行を 1 行追加する
    fn add_header_line(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// ボディのバイト列を書き込む
    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()>;

    /// バッファ済みの出力を直ちにフラッシュする
    fn flush(&mut self) -> io::Result<()>;
}

/// `std::io::Write` への HTTP/1.1 ワイヤ形式トランスポート
///
/// ステータス行・ヘッダー行は即時に書き出す (内部バッファを持たない) ため、
/// `has_pending_output` は常に false。ステータス行を書いた時点で
/// ヘッダーコミット済みとみなす。
///
/// ボディを 1 バイトも書かずに送出が終わった場合 (204 等)、ヘッダー部の
/// 終端空行が未出力のまま残る。送出完了後に [`WriterTransport::finish`] を
/// 呼ぶことでヘッダー部を閉じられる。
pub struct WriterTransport<W: Write> {
    inner: W,
    status_sent: bool,
    headers_done: bool,
}

impl<W: Write> WriterTransport<W> {
    /// 書き込み先からトランスポートを作成
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            status_sent: false,
            headers_done: false,
        }
    }

    /// ヘッダー部を閉じる (終端空行が未出力であれば書き出す)
    ///
    /// ボディが 1 バイトでも書かれていれば何もしない。
    pub fn finish(&mut self) -> io::Result<()> {
        if !self.headers_done {
            self.inner.write_all(b"\r\n")?;
            self.headers_done = true;
        }
        self.inner.flush()
    }

    /// 書き込み先を取り出す
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputTransport for WriterTransport<W> {
    fn headers_sent(&self) -> bool {
        self.status_sent
    }

    fn has_pending_output(&self) -> bool {
        false
    }

    fn set_status_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\r\n")?;
        self.status_sent = true;
        Ok(())
    }

    fn add_header_line(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.inner.write_all(name.as_bytes())?;
        self.inner.write_all(b": ")?;
        self.inner.write_all(value.as_bytes())?;
        self.inner.write_all(b"\r\n")?;
        Ok(())
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        if !self.headers_done {
            self.inner.write_all(b"\r\n")?;
            self.headers_done = true;
        }
        self.inner.write_all(chunk)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
