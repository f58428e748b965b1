//! Binary loader.
//!
//! Reads flat big-endian program images from disk. There is no object-format
//! parsing: the image is copied verbatim to its load address and execution
//! starts at the configured PC.

use std::fs;
use std::process;

/// Loads a binary file from disk into a byte vector.
///
/// Exits the process with an error message if the file cannot be read.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
pub fn load_binary(path: &str) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{}': {}", path, e);
        process::exit(1);
    })
}
