// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use libmipsdiff_catalog::catalog::InstructionCatalog;
use libmipsdiff_catalog::errors::Error;
use libmipsdiff_catalog::render;

/// One position where the assembler under test disagrees with the
/// reference encoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Rendered source text of the offending instruction.
    pub instruction: String,
    pub expected: u64,
    pub actual: u64,
}

/// Outcome of one verification run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    /// Positions compared; always the full catalog length.
    pub compared: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compares expected and actual encodings in catalog order.
///
/// Both streams must match the catalog length before any position is
/// inspected; truncating to the shortest would silently hide missing or
/// extra instructions. A disagreeing position is recorded and comparison
/// continues, so one run enumerates every failing instruction.
pub fn compare(
    catalog: &InstructionCatalog,
    expected: &[u64],
    actual: &[u64],
) -> Result<VerifyReport, Error> {
    if expected.len() != catalog.len() || actual.len() != catalog.len() {
        return Err(Error::LengthMismatch {
            catalog: catalog.len(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mut mismatches = Vec::new();
    for (idx, sig) in catalog.iter().enumerate() {
        if expected[idx] != actual[idx] {
            mismatches.push(Mismatch {
                instruction: render::render_instruction(sig),
                expected: expected[idx],
                actual: actual[idx],
            });
        }
    }

    Ok(VerifyReport {
        compared: catalog.len(),
        mismatches,
    })
}
