//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// ヘッダー名・値の生成 (RFC 9110 Section 5)
// ========================================

/// ヘッダー名: token (ALPHA 始まり、ALPHA / DIGIT / `-` 続き)
pub fn header_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,24}".prop_map(|s| s)
}

/// ヘッダー値: カンマを含まない可視 ASCII
///
/// 連結送出 (`", "` 区切り) の行数を数えるテストで値中のカンマが
/// ノイズにならないよう、カンマは除外する。
pub fn header_value() -> impl Strategy<Value = String> {
    "[!#-+\\--~][ !#-+\\--~]{0,31}".prop_map(|s| s)
}

/// Set-Cookie 値: `name=value` に属性が続く形
pub fn cookie_value() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}", "[A-Za-z0-9]{1,16}")
        .prop_map(|(name, value)| format!("{}={}; Path=/; HttpOnly", name, value))
}

// ========================================
// ステータスコードの生成
// ========================================

/// ボディを持てるステータスコード
pub fn body_status_code() -> impl Strategy<Value = u16> {
    prop_oneof![
        Just(200u16),
        Just(201u16),
        Just(206u16),
        Just(301u16),
        Just(400u16),
        Just(404u16),
        Just(500u16),
    ]
}

/// ボディを持てないステータスコード (1xx, 204, 304)
pub fn no_body_status_code() -> impl Strategy<Value = u16> {
    prop_oneof![100u16..200, Just(204u16), Just(304u16)]
}

// ========================================
// ボディの生成
// ========================================

/// ボディのバイト列
pub fn body_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..256)
}
