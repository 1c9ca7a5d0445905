#![no_main]

use std::io;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_http_emitter::{OutputTransport, Response, ResponseEmitter};

/// ファズ入力から構築するレスポンス記述
#[derive(Debug, Arbitrary)]
struct FuzzResponse {
    status_code: u16,
    reason_phrase: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    chunk_size: u8,
    send_body: bool,
}

/// ボディ書き込みバイト数だけを数えるトランスポート
#[derive(Debug, Default)]
struct CountingTransport {
    body_bytes: usize,
    flushes: usize,
    status_set: bool,
}

impl OutputTransport for CountingTransport {
    fn headers_sent(&self) -> bool {
        false
    }

    fn has_pending_output(&self) -> bool {
        false
    }

    fn set_status_line(&mut self, _line: &str) -> io::Result<()> {
        self.status_set = true;
        Ok(())
    }

    fn add_header_line(&mut self, _name: &str, _value: &str) -> io::Result<()> {
        Ok(())
    }

    fn write_body(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.body_bytes += chunk.len();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

fuzz_target!(|input: FuzzResponse| {
    let Ok(emitter) = ResponseEmitter::with_chunk_size(usize::from(input.chunk_size)) else {
        // chunk_size == 0 は構成エラーであり、送出には到達しない
        return;
    };

    let mut response = Response::new(input.status_code, &input.reason_phrase);
    for (name, value) in &input.headers {
        if name.is_empty() {
            continue;
        }
        response.add_header(name, value);
    }
    let body_len = input.body.len();
    response.body = input.body.into();

    let mut transport = CountingTransport::default();
    if input.send_body {
        emitter.emit(&mut transport, &mut response).unwrap();
    } else {
        emitter.emit_headers_only(&mut transport, &mut response).unwrap();
    }

    // ステータス行は必ず設定される
    assert!(transport.status_set);

    // ボディを持てないステータスと送出抑止では 1 バイトも書かれない
    let no_body = (100..200).contains(&input.status_code)
        || input.status_code == 204
        || input.status_code == 304;
    if no_body || !input.send_body {
        assert_eq!(transport.body_bytes, 0);
        assert_eq!(transport.flushes, 0);
    } else {
        // Content-Range がどう解釈されてもボディ総量を超えることはない
        assert!(transport.body_bytes <= body_len);
    }
});
