#![no_main]
use libfuzzer_sys::fuzz_target;
use oryxpatch::find_matching_brace;

fn scanner(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    // Probe opening braces, bounded so deeply nested inputs stay fast.
    let opens = text
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'{')
        .map(|(i, _)| i)
        .take(64);
    for open in opens {
        if let Some(close) = find_matching_brace(&text, open) {
            assert!(close > open);
            assert!(close < text.len());
            assert_eq!(text.as_bytes()[close], b'}');
        }
    }

    // Out-of-range and non-brace starts are rejected, never a panic.
    assert_eq!(find_matching_brace(&text, text.len()), None);
    if let Some(first) = text.bytes().next() {
        if first != b'{' {
            assert_eq!(find_matching_brace(&text, 0), None);
        }
    }
}

fuzz_target!(|data: &[u8]| scanner(data));
