// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Error type shared by catalog construction and harness execution.
///
/// Encoding disagreements at individual positions are deliberately not in
/// here: those are the expected failure signal of a verification run and
/// are accumulated in the report instead of aborting it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed instruction signature: {0:?}")]
    MalformedSignature(String),

    #[error("unknown operand token {token:?} in signature {line:?}")]
    UnknownOperandToken { token: String, line: String },

    #[error("assembler exited with status {status}: {diagnostics}")]
    AssemblyFailed { status: i32, diagnostics: String },

    #[error("{path}:{line_no}: not a base-16 code word: {text:?}")]
    MalformedCodeLine {
        path: String,
        line_no: usize,
        text: String,
    },

    #[error("entry count mismatch: catalog has {catalog} instructions, expected file has {expected}, assembler produced {actual}")]
    LengthMismatch {
        catalog: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
