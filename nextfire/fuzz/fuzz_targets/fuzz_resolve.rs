#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the reference time, the rest is the job table.
        // A whole pass should never panic for any input
        if let Some((reference, table)) = s.split_once('\n') {
            let tab = nextfire::Tab::parse(table);
            let _ = nextfire::resolve::resolve(reference, tab.entries);
        }
    }
});
