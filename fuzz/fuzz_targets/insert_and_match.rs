#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut trie = segtrie::Trie::new();

    for (pattern, value) in data.0 {
        if trie.insert(pattern, value).is_err() {
            return;
        }
    }

    trie.check_invariants().unwrap();

    if let Ok(matched) = trie.search(&data.1) {
        for (_, value) in &matched.captures {
            assert!(value.len() <= data.1.len());
        }
    }
});
