// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use libmipsdiff_catalog::catalog::InstructionCatalog;
use libmipsdiff_catalog::errors::Error;
use libmipsdiff_catalog::render;
use libmipsdiff_verify::codes;
use libmipsdiff_verify::compare::{self, VerifyReport};

use crate::asq::Assembler;

/// File name of the synthesized test program inside the workdir.
pub const PROGRAM_FILE: &str = "all_instructions.s";

/// One full verification run: synthesize the canonical program into
/// `workdir`, hand it to the assembler, read back the produced and
/// reference encodings, compare them in catalog order.
pub fn run<A: Assembler>(
    catalog: &InstructionCatalog,
    assembler: &A,
    workdir: &Path,
    reference: &Path,
) -> Result<VerifyReport, Error> {
    let program = workdir.join(PROGRAM_FILE);
    fs::write(&program, render::synthesize_program(catalog))?;

    assembler.assemble(&program)?;

    let expected = codes::read_code_file(reference)?;
    let actual = codes::read_code_file(&assembler.code_file(&program))?;

    compare::compare(catalog, &expected, &actual)
}

#[cfg(test)]
mod tests {
    use super::{run, PROGRAM_FILE};
    use crate::asq::{write_stub, AsqMips};
    use libmipsdiff_catalog::catalog::InstructionCatalog;
    use libmipsdiff_catalog::errors::Error;
    use std::path::Path;

    fn two_entry_catalog() -> InstructionCatalog {
        InstructionCatalog::from_spec("daddi reg,reg,imm\nhalt").unwrap()
    }

    // stub assembler writing fixed codes into the `.cod` side channel
    fn coding_stub(dir: &Path, codes: &str) -> AsqMips {
        let body = format!("prog=\"$2\"\nprintf '{codes}' > \"${{prog%.*}}.cod\"");
        AsqMips::new(write_stub(dir, &body), Vec::new())
    }

    #[test]
    fn matching_encodings_pass() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("expected.cod");
        std::fs::write(&reference, "20410001\n3f\n").unwrap();
        let asq = coding_stub(dir.path(), "20410001\\n3f\\n");

        let report = run(&two_entry_catalog(), &asq, dir.path(), &reference).unwrap();
        assert!(report.passed());
        assert_eq!(report.compared, 2);

        let program = std::fs::read_to_string(dir.path().join(PROGRAM_FILE)).unwrap();
        assert_eq!(program, ".text\ndaddi r1,r1,1\nhalt\n");
    }

    #[test]
    fn diverging_encoding_is_reported_with_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("expected.cod");
        std::fs::write(&reference, "20410001\n3f\n").unwrap();
        let asq = coding_stub(dir.path(), "20410002\\n3f\\n");

        let report = run(&two_entry_catalog(), &asq, dir.path(), &reference).unwrap();
        assert!(!report.passed());
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].instruction, "daddi r1,r1,1");
        assert_eq!(report.mismatches[0].expected, 0x20410001);
        assert_eq!(report.mismatches[0].actual, 0x20410002);
    }

    #[test]
    fn short_code_file_is_a_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("expected.cod");
        std::fs::write(&reference, "20410001\n3f\n").unwrap();
        let asq = coding_stub(dir.path(), "20410001\\n");

        let err = run(&two_entry_catalog(), &asq, dir.path(), &reference).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn assembler_failure_aborts_before_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("expected.cod");
        std::fs::write(&reference, "20410001\n3f\n").unwrap();
        let asq = AsqMips::new(
            write_stub(dir.path(), "echo 'cannot open file' >&2\nexit 1"),
            Vec::new(),
        );

        let err = run(&two_entry_catalog(), &asq, dir.path(), &reference).unwrap_err();
        assert!(matches!(err, Error::AssemblyFailed { .. }));
    }

    #[test]
    fn missing_reference_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let asq = coding_stub(dir.path(), "20410001\\n3f\\n");

        let err = run(
            &two_entry_catalog(),
            &asq,
            dir.path(),
            &dir.path().join("expected.cod"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
