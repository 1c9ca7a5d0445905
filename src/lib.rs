//! # shiguredo_http_emitter
//!
//! 依存なしの HTTP レスポンス送出ライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **Sans I/O**: 出力先を小さなトランスポートトレイトとして注入
//! - **送出前検査**: 出力が既に始まったトランスポートへの送出を検出して拒否
//! - **部分送出**: Content-Range ヘッダーに基づくバイト範囲スライス
//! - **有界ストリーミング**: ボディをチャンク単位で読み書きし、全体をメモリに置かない
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_emitter::{Response, ResponseEmitter, WriterTransport};
//!
//! // レスポンスを構築
//! let mut response = Response::new(200, "OK")
//!     .header("content-type", "text/plain")
//!     .body("Hello, World!");
//!
//! // 任意の std::io::Write へ送出
//! let mut transport = WriterTransport::new(Vec::new());
//! let emitter = ResponseEmitter::new();
//! emitter.emit(&mut transport, &mut response).unwrap();
//! ```
//!
//! ### バイト範囲の部分送出
//!
//! ```rust
//! use shiguredo_http_emitter::{Response, ResponseEmitter, WriterTransport};
//!
//! let mut response = Response::new(206, "Partial Content")
//!     .header("Content-Range", "bytes 0-3/8")
//!     .body("Contents");
//!
//! let mut transport = WriterTransport::new(Vec::new());
//! ResponseEmitter::new().emit(&mut transport, &mut response).unwrap();
//!
//! let bytes = transport.into_inner();
//! assert!(bytes.ends_with(b"\r\n\r\nCont"));
//! ```

pub mod body;
pub mod content_range;
mod emitter;
mod error;
pub mod header;
mod response;
pub mod transport;

pub use body::{Body, BodyStream, BytesBody};
pub use content_range::{ContentRangeSpec, RangeUnit};
pub use emitter::{DEFAULT_CHUNK_SIZE, ResponseEmitter};
pub use error::{ConfigError, EmitError};
pub use header::{HeaderValue, canonical_header_name};
pub use response::Response;
pub use transport::{OutputTransport, WriterTransport};
