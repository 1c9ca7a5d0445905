#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_http_emitter::content_range::{ContentRangeSpec, RangeUnit};

fuzz_target!(|data: &[u8]| {
    // UTF-8 文字列として解釈できる場合のみテスト
    if let Ok(s) = std::str::from_utf8(data) {
        // パースは全域関数: どんな入力でもパニックしない
        if let Some(spec) = ContentRangeSpec::parse(s) {
            // 受理された値の不変条件
            assert_eq!(spec.unit(), RangeUnit::Bytes);
            assert!(spec.first() <= spec.last());
            assert_eq!(spec.length(), (spec.last() - spec.first()).saturating_add(1));

            // Display ラウンドトリップ
            let displayed = spec.to_string();
            assert_eq!(ContentRangeSpec::parse(&displayed), Some(spec));
        }
    }
});
