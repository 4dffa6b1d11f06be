// SPDX-FileCopyrightText: 2024 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Arg;
use clap::ArgAction;
use clap::Command as clap_cmd;

use libmipsdiff_catalog::catalog::InstructionCatalog;
use libmipsdiff_catalog::defines::MIPS64_SIGNATURES;
use libmipsdiff_catalog::emit;
use libmipsdiff_catalog::errors::Error;

mod asq;
mod config;
mod harness;

use asq::AsqMips;
use config::HarnessConfig;

fn fatal(err: Error) -> ! {
    eprintln!("asqmips-diff: {err}");
    exit(1)
}

fn build_catalog(config: &HarnessConfig) -> Result<InstructionCatalog, Error> {
    match &config.spec_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            InstructionCatalog::from_spec(&text)
        }
        None => InstructionCatalog::from_spec(MIPS64_SIGNATURES),
    }
}

/// Runs the verification pipeline and prints the report. Returns whether
/// every instruction matched the reference encoding.
fn run_verification(config: &HarnessConfig, keep: bool) -> Result<bool, Error> {
    let catalog = build_catalog(config)?;
    let assembler = AsqMips::new(&config.executable, config.extra_args.clone());

    let report = match &config.workdir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            harness::run(&catalog, &assembler, dir, &config.reference)?
        }
        None => {
            // scratch space scoped to this run
            let scratch = tempfile::TempDir::new()?;
            let report = harness::run(&catalog, &assembler, scratch.path(), &config.reference)?;
            if keep {
                let kept = scratch.into_path();
                println!("keeping run artifacts in {}", kept.display());
            }
            report
        }
    };

    for mismatch in &report.mismatches {
        println!(
            "instruction `{}` failed the check, expected {:#x} but got {:#x}",
            mismatch.instruction, mismatch.expected, mismatch.actual
        );
    }
    if report.passed() {
        println!("all {} instructions passed the check", report.compared);
    } else {
        println!(
            "{} of {} instructions failed the check",
            report.mismatches.len(),
            report.compared
        );
    }

    Ok(report.passed())
}

pub fn main() {
    let res = clap_cmd::new("asqmips-diff")
        .about("Differential encoding check for the ASQMips assembler")
        .arg(
            Arg::new("config")
                .help("YAML configuration file")
                .short('c')
                .long("config"),
        )
        .arg(
            Arg::new("executable")
                .help("Assembler executable under test")
                .short('e')
                .long("executable"),
        )
        .arg(
            Arg::new("reference")
                .help("Trusted reference code file")
                .short('r')
                .long("reference"),
        )
        .arg(
            Arg::new("workdir")
                .help("Directory for synthesized artifacts")
                .short('w')
                .long("workdir"),
        )
        .arg(
            Arg::new("spec")
                .help("Alternative signature specification file")
                .long("spec"),
        )
        .arg(
            Arg::new("keep")
                .help("Keep synthesized artifacts after the run")
                .long("keep")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emit-fixtures")
                .help("Print catalog fixture literals instead of verifying")
                .long("emit-fixtures")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // an explicit --config must load; the implicit default may be absent
    let mut config = match res.get_one::<String>("config") {
        Some(path) => match HarnessConfig::from_file(Path::new(path)) {
            Ok(config) => config,
            Err(err) => fatal(err),
        },
        None => {
            let default_path = Path::new(config::DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                match HarnessConfig::from_file(default_path) {
                    Ok(config) => config,
                    Err(err) => fatal(err),
                }
            } else {
                HarnessConfig::default()
            }
        }
    };

    if let Some(executable) = res.get_one::<String>("executable") {
        config.executable = PathBuf::from(executable);
    }
    if let Some(reference) = res.get_one::<String>("reference") {
        config.reference = PathBuf::from(reference);
    }
    if let Some(workdir) = res.get_one::<String>("workdir") {
        config.workdir = Some(PathBuf::from(workdir));
    }
    if let Some(spec) = res.get_one::<String>("spec") {
        config.spec_file = Some(PathBuf::from(spec));
    }

    if res.get_flag("emit-fixtures") {
        match build_catalog(&config) {
            Ok(catalog) => print!("{}", emit::fixture_block(&catalog)),
            Err(err) => fatal(err),
        }
        return;
    }

    match run_verification(&config, res.get_flag("keep")) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => fatal(err),
    }
}
