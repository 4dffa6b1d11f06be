// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use libmipsdiff_catalog::errors::Error;

/// Parses one code file line as a base-16 machine word. An optional
/// `0x`/`0X` prefix is accepted.
fn parse_code_line(text: &str) -> Option<u64> {
    let digits = text.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    u64::from_str_radix(digits, 16).ok()
}

/// Reads a hex code file: one base-16 machine word per line, in catalog
/// order. Blank lines are skipped; any other line that does not parse is
/// fatal for the run.
pub fn read_code_file(path: &Path) -> Result<Vec<u64>, Error> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_code_line(&line) {
            Some(word) => words.push(word),
            None => {
                return Err(Error::MalformedCodeLine {
                    path: path.display().to_string(),
                    line_no: idx + 1,
                    text: line.trim().to_string(),
                })
            }
        }
    }

    Ok(words)
}
