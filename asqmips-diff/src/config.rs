// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use libmipsdiff_catalog::errors::Error;

/// Config file the harness looks for when none is given on the command
/// line.
pub const DEFAULT_CONFIG_FILE: &str = "asqmips-diff.yml";

const DEFAULT_EXECUTABLE: &str = "ASQMips.exe";
const DEFAULT_REFERENCE: &str = "expected.cod";

/// Harness settings, read from the `asqmips:` section of a YAML file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Assembler executable under test.
    pub executable: PathBuf,
    /// Extra argv entries inserted before the hex-output flag.
    pub extra_args: Vec<String>,
    /// Trusted reference code file.
    pub reference: PathBuf,
    /// Directory for synthesized artifacts; a scoped temporary directory
    /// is used when unset.
    pub workdir: Option<PathBuf>,
    /// Alternative signature specification text; the built-in MIPS64
    /// table is used when unset.
    pub spec_file: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            extra_args: Vec::new(),
            reference: PathBuf::from(DEFAULT_REFERENCE),
            workdir: None,
            spec_file: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_file(path: &Path) -> Result<HarnessConfig, Error> {
        let yaml_fd = std::fs::File::open(path)?;
        let config: serde_yaml::Value = serde_yaml::from_reader(yaml_fd)
            .map_err(|err| Error::InvalidConfig(format!("{}: {err}", path.display())))?;
        Ok(Self::from_yaml(&config))
    }

    fn from_yaml(config: &serde_yaml::Value) -> HarnessConfig {
        let executable = config["asqmips"]["executable"]
            .as_str()
            .unwrap_or(DEFAULT_EXECUTABLE);

        let reference = config["asqmips"]["reference"]
            .as_str()
            .unwrap_or(DEFAULT_REFERENCE);

        let workdir = config["asqmips"]["workdir"].as_str().map(PathBuf::from);

        let spec_file = config["asqmips"]["spec_file"].as_str().map(PathBuf::from);

        let extra_args = match config["asqmips"]["extra_args"].as_sequence() {
            Some(seq) => seq
                .iter()
                .filter_map(|value| value.as_str())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        HarnessConfig {
            executable: PathBuf::from(executable),
            extra_args,
            reference: PathBuf::from(reference),
            workdir,
            spec_file,
        }
    }
}
