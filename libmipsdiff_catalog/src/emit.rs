// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{ArgumentKind, InstructionCatalog, InstructionSignature};

fn fixture_kind(kind: ArgumentKind) -> &'static str {
    match kind {
        ArgumentKind::Immediate => "ArgumentType::Imm",
        ArgumentKind::Register => "ArgumentType::Reg",
        ArgumentKind::FloatRegister => "ArgumentType::Freg",
        ArgumentKind::ImmediateWithBaseRegister => "ArgumentType::ImmWReg",
    }
}

/// Fixture literal for one catalog entry, in the shape the assembler's
/// own test data expects, e.g.
/// `Array<ArgumentType, 3>{ArgumentType::Reg, ArgumentType::ImmWReg}`.
/// Bare mnemonics render as an empty brace literal.
pub fn fixture_entry(sig: &InstructionSignature) -> String {
    let kinds: Vec<&str> = sig
        .operands
        .iter()
        .map(|kind| fixture_kind(*kind))
        .collect();

    format!("Array<ArgumentType, 3>{{{}}}", kinds.join(", "))
}

/// Whole-catalog fixture block: one literal per entry, catalog order,
/// one per line. Pure formatting, no validation.
pub fn fixture_block(catalog: &InstructionCatalog) -> String {
    let mut block = String::new();
    for sig in catalog.iter() {
        block.push_str(&fixture_entry(sig));
        block.push('\n');
    }
    block
}
