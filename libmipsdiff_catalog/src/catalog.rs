// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Operand classes recognized by the signature grammar.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Immediate,
    Register,
    FloatRegister,
    /// Displacement plus base register, written `imm(reg)`.
    ImmediateWithBaseRegister,
}

impl ArgumentKind {
    /// Classifies one operand token of the grammar, or `None` for a token
    /// outside its closed vocabulary.
    ///
    /// The parenthesis check must stay first: `imm(reg)` also contains the
    /// `imm` and `reg` substrings, and reordering the chain would
    /// reclassify every addressing-mode operand.
    pub fn classify(token: &str) -> Option<ArgumentKind> {
        if token.contains('(') {
            Some(ArgumentKind::ImmediateWithBaseRegister)
        } else if token.contains("imm") {
            Some(ArgumentKind::Immediate)
        } else if token.contains("freg") {
            Some(ArgumentKind::FloatRegister)
        } else if token.contains("reg") {
            Some(ArgumentKind::Register)
        } else {
            None
        }
    }
}

/// One catalog entry: a mnemonic plus its operand kinds in source order.
///
/// `operands` is empty exactly for bare mnemonics such as `halt`. The
/// order is load-bearing: it drives rendering and it is what positional
/// consumers map to destination/source roles.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InstructionSignature {
    pub name: String,
    pub operands: Vec<ArgumentKind>,
}

impl FromStr for InstructionSignature {
    type Err = Error;

    /// Parses one line of the signature grammar: `mnemonic` or
    /// `mnemonic op,op,...` where each operand token classifies per
    /// [`ArgumentKind::classify`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(Error::MalformedSignature(s.to_string()));
        }

        let (name, operand_list) = match line.split_once(' ') {
            None => {
                return Ok(InstructionSignature {
                    name: line.to_string(),
                    operands: Vec::new(),
                })
            }
            Some(split) => split,
        };

        let mut operands = Vec::new();
        for token in operand_list.split(',') {
            match ArgumentKind::classify(token) {
                Some(kind) => operands.push(kind),
                // a token outside the grammar is a specification-authoring
                // bug, never something to skip
                None => {
                    return Err(Error::UnknownOperandToken {
                        token: token.trim().to_string(),
                        line: line.to_string(),
                    })
                }
            }
        }

        Ok(InstructionSignature {
            name: name.to_string(),
            operands,
        })
    }
}

/// Ordered sequence of instruction signatures.
///
/// Catalog order is the sole correlation key between a synthesized
/// instruction and its expected/actual encoding; there is no name-based
/// lookup anywhere downstream. Built once, never mutated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstructionCatalog {
    entries: Vec<InstructionSignature>,
}

impl Deref for InstructionCatalog {
    type Target = Vec<InstructionSignature>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl InstructionCatalog {
    /// Builds a catalog from specification text: one signature per
    /// non-blank line, in declaration order. The first malformed line or
    /// unknown operand token aborts construction.
    pub fn from_spec(spec: &str) -> Result<InstructionCatalog, Error> {
        let mut entries = Vec::new();

        for line in spec.lines() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(line.parse::<InstructionSignature>()?);
        }

        Ok(InstructionCatalog { entries })
    }
}
