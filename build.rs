use std::{env, fs, path::PathBuf};

/// RP2040 memory layout: 2 MiB of external flash behind the 256-byte second-stage bootloader.
const MEMORY_X_RP2040: &str = "MEMORY {
    BOOT2 : ORIGIN = 0x10000000, LENGTH = 0x100
    FLASH : ORIGIN = 0x10000100, LENGTH = 2048K - 0x100
    RAM   : ORIGIN = 0x20000000, LENGTH = 256K
}
";

fn main() {
    // 1) Provide memory.x for the Pico (RP2040) target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv6m") {
        let dest = out_dir.join("memory.x");
        fs::write(&dest, MEMORY_X_RP2040).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".match-clock.env");

    // 3) Round length, white belt unless told otherwise
    let match_round = env_or_default("MATCH_ROUND", "white");
    if !matches!(
        match_round.as_str(),
        "white" | "white-belt" | "6" | "blue" | "blue-belt" | "7"
    ) {
        println!(
            "cargo:warning=MATCH_ROUND={match_round} is not a known round; expected white or blue"
        );
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=MATCH_ROUND={match_round}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=MATCH_ROUND");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
