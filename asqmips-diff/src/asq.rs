// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use libmipsdiff_catalog::errors::Error;

/// Synchronous seam over the external assembler.
///
/// The encodings do not come back on stdout: the tool writes them to a
/// file next to its input, and `code_file` names that side channel. Both
/// halves are part of the collaborator's real contract.
pub trait Assembler {
    /// Runs the tool over `program`, blocking until it exits. Non-zero
    /// exit status is fatal and must carry the tool's diagnostics.
    fn assemble(&self, program: &Path) -> Result<(), Error>;

    /// Path of the hex code file the tool produces for `program`: the
    /// program path with its extension replaced by `.cod`.
    fn code_file(&self, program: &Path) -> PathBuf {
        program.with_extension("cod")
    }
}

/// The ASQMips command-line assembler, invoked as
/// `<executable> [extra_args..] -d <program>`.
#[derive(Clone, Debug)]
pub struct AsqMips {
    executable: PathBuf,
    extra_args: Vec<String>,
}

impl AsqMips {
    pub fn new(executable: impl Into<PathBuf>, extra_args: Vec<String>) -> AsqMips {
        AsqMips {
            executable: executable.into(),
            extra_args,
        }
    }
}

impl Assembler for AsqMips {
    fn assemble(&self, program: &Path) -> Result<(), Error> {
        let output = Command::new(&self.executable)
            .args(&self.extra_args)
            .arg("-d")
            .arg(program)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            let mut diagnostics = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if diagnostics.is_empty() {
                diagnostics = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(Error::AssemblyFailed {
                status: output.status.code().unwrap_or(-1),
                diagnostics,
            });
        }

        Ok(())
    }
}

/// Drops an executable shell-script stand-in for the assembler into
/// `dir`, for tests that need a scriptable collaborator.
#[cfg(test)]
pub(crate) fn write_stub(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("asq_stub.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
