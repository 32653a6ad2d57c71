#![no_main]

use citation_harvest::models::normalize_doi;
use citation_harvest::output::{SLUG_MAX_LEN, slug};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        assert!(slug(text).chars().count() <= SLUG_MAX_LEN);
        let _ = normalize_doi(text);
    }
});
