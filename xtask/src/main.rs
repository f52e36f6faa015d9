//! Build automation tasks for the match clock.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

/// The Pico 1 (RP2040) target.
const TARGET: &str = "thumbv6m-none-eabi";
const FIRMWARE_FEATURES: &str = "defmt,pico1,arm";
const BIN_NAME: &str = "match-clock";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the match clock", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: build firmware, run host tests, generate docs
    CheckAll,
    /// Build the firmware
    Build {
        #[arg(long, default_value = "white")]
        round: Round,
    },
    /// Run unit, integration, and doc tests on the host
    Test,
    /// Build UF2 firmware file for flashing to Pico
    Uf2 {
        #[arg(long, default_value = "white")]
        round: Round,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Round {
    White,
    Blue,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Round::White => write!(f, "white"),
            Round::Blue => write!(f, "blue"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { round } => build_firmware(round),
        Commands::Test => {
            if run_host_tests() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Uf2 { round } => build_uf2(round),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    for round in [Round::White, Round::Blue] {
        println!(
            "{}",
            format!("==> Building firmware ({round} belt round)...").cyan()
        );
        if !run_command(&mut firmware_build(&workspace_root, round, false)) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Running host tests...".cyan());
    if !run_host_tests() {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--lib",
        "--target",
        TARGET,
        "--no-deps",
        "--features",
        FIRMWARE_FEATURES,
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn run_host_tests() -> bool {
    let workspace_root = workspace_root();
    let host_target = host_target();
    match host_target.as_deref() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    let mut test_cmd = Command::new("cargo");
    test_cmd.current_dir(&workspace_root).arg("test");

    if let Some(target) = host_target {
        test_cmd.arg("--target").arg(target);
    }

    test_cmd.args(["--no-default-features", "--features", "host"]);

    run_command(&mut test_cmd)
}

fn build_firmware(round: Round) -> ExitCode {
    let workspace_root = workspace_root();
    println!(
        "{}",
        format!("Building firmware for a {round} belt round").cyan()
    );

    if run_command(&mut firmware_build(&workspace_root, round, false)) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_uf2(round: Round) -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", format!("Building UF2 ({round} belt round)").cyan());
    println!("  Features: {}", FIRMWARE_FEATURES.bright_black());
    println!("  Target: {}", TARGET.bright_black());

    // Build in release mode for UF2
    if !run_command(&mut firmware_build(&workspace_root, round, true)) {
        return ExitCode::FAILURE;
    }

    // Convert to UF2 using elf2uf2-rs
    let elf_path = format!("target/{TARGET}/release/{BIN_NAME}");
    let uf2_path = format!("{BIN_NAME}-{round}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn firmware_build(workspace_root: &std::path::Path, round: Round, release: bool) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root)
        .env("MATCH_ROUND", round.to_string())
        .args(["build", "--bin", BIN_NAME]);
    if release {
        cmd.arg("--release");
    }
    cmd.args([
        "--target",
        TARGET,
        "--features",
        FIRMWARE_FEATURES,
        "--no-default-features",
    ]);
    cmd
}

fn workspace_root() -> std::path::PathBuf {
    // cargo runs aliases from the directory it was invoked in, which is the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if let Some(host) = line.strip_prefix("host: ") {
            return Some(host.trim().to_string());
        }
    }
    None
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
