//! Build script for GearPack
//!
//! Bumps the local build counter and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new("build_number.txt");

    let previous: u64 = fs::read_to_string(counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    // A read-only source tree still builds, it just keeps reporting the old number
    if fs::write(counter_path, build_number.to_string()).is_err() {
        println!("cargo:warning=could not persist build_number.txt");
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=GEARPACK_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=GEARPACK_BUILD_TIMESTAMP={}", timestamp);
}
