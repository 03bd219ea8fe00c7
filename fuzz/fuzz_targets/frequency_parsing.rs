// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for frequency file parsing: arbitrary bytes must produce a
//! table or an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use majuscule::load::parse_frequencies;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = parse_frequencies(data, Path::new("fuzz.txt")) {
        assert!(table.len() <= data.iter().filter(|&&b| b == b'\n').count() + 1);
    }
});
