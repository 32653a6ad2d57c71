#![no_main]

use citation_harvest::models::{CitationContext, CitationPage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary bytes as a citations page and flatten every edge.
    // Should never panic, only return Ok or Err
    if let Ok(page) = serde_json::from_slice::<CitationPage>(data) {
        let _: Vec<CitationContext> = page.data.into_iter().map(CitationContext::from).collect();
    }
});
