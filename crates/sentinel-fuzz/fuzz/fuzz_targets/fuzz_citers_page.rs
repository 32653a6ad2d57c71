#![no_main]

use citation_harvest::models::{CitersPage, WorkCitedBy, WorkSearchResult};
use citation_harvest::output::format_citers_csv;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<WorkSearchResult>(json.clone());
        let _ = serde_json::from_value::<WorkCitedBy>(json.clone());
        if let Ok(page) = serde_json::from_value::<CitersPage>(json) {
            let _ = format_citers_csv(&page.results);
        }
    }
});
