use std::fmt;
use std::io;

/// 送出エンジンの構成エラー
///
/// 構築時に検出され、送出時には決して発生しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// チャンクサイズが不正 (0 は許容されない)
    InvalidChunkSize { size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidChunkSize { size } => {
                write!(f, "invalid chunk size: {} (must be positive)", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// 送出エラー
///
/// 前提条件違反の 2 種はトランスポートへ 1 バイトも書き込む前に検出される。
/// `Io` は下位の書き込み・フラッシュ・ボディ読み取りのエラーをそのまま
/// 伝播したもので、内部でのリトライやロールバックは行わない。
#[derive(Debug)]
pub enum EmitError {
    /// ヘッダーが既に送信済みのトランスポートへの送出
    HeadersAlreadySent,
    /// 出力バッファに既に内容があるトランスポートへの送出
    OutputAlreadyStarted,
    /// 下位 I/O エラー
    Io(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::HeadersAlreadySent => {
                write!(f, "unable to emit response: headers already sent")
            }
            EmitError::OutputAlreadyStarted => {
                write!(f, "unable to emit response: output already started")
            }
            EmitError::Io(e) => write!(f, "i/o error during emission: {}", e),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EmitError {
    fn from(e: io::Error) -> Self {
        EmitError::Io(e)
    }
}
