//! Fuzz target for colour parsing.
//!
//! Tests that Color::from_str handles arbitrary strings without panicking
//! and that every parsed colour survives a trip through Display.

#![no_main]

use gridtable::Color;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(color) = data.parse::<Color>() {
        let _ = color.sgr();
        let shown = color.to_string();
        assert_eq!(shown.parse::<Color>().ok(), Some(color));
    }

    let _ = Color::from_hex(data);
    let _ = Color::from_name(data);
});
