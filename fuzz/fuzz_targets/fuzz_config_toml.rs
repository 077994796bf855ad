#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and resolution should never panic
        if let Ok((config, _warnings)) =
            icopack::config::parse_with_warnings(content, Path::new("icopack.toml"))
        {
            let _ = config.conversion();
            let _ = config.resx_source_dir();
        }
    }
});
