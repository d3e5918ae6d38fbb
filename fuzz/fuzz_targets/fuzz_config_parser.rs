//! Fuzz target for config parsing and resolution.
//!
//! Goal: parsing and resolving arbitrary TOML should **never panic**.
//! Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use spfsandbox_domain::RuleEngine;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = spfsandbox_settings::parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = spfsandbox_settings::resolve_config(cfg) {
        let mut engine = RuleEngine::new();
        resolved.load_into(&mut engine);
        let _ = engine.eval("192.0.2.1");
        let _ = engine.eval("2001:db8::1");
    }
});
