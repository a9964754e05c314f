#![no_main]

use eventwire::{ParsedPayload, Vec3};
use libfuzzer_sys::fuzz_target;

// Tolerant parsing is the contract: arbitrary input may only degrade to
// defaults, never panic, through the parser or any typed accessor.
fuzz_target!(|payload: &str| {
    let data = ParsedPayload::parse(payload);
    let _ = data.get_str("k", "");
    let _ = data.get_int("k", 0);
    let _ = data.get_float("k", 0.0);
    let _ = data.get_bool("k", false);
    let _ = data.get_vec3("k", Vec3::ZERO);
    for (key, value) in data.iter() {
        let _ = data.get_int(key, -1);
        let _ = data.get_float(key, 0.0);
        let _ = data.get_bool(key, true);
        let _ = data.get_vec3(key, Vec3::ZERO);
        let _ = value.parse::<Vec3>();
    }
});
