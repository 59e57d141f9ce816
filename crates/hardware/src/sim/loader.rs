//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** One byte per meaningful line, written as a base-2 literal.
//! 2. **Loading:** Copies the image into memory from address 0, all or nothing.
//! 3. **File access:** Reads program files from disk for the CLI.
//!
//! # Format
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Blank lines and lines whose first non-blank character is `#` are skipped.
//! Otherwise the first whitespace-delimited token is the byte and anything
//! after it is ignored. Literals may be any length; only the low eight bits
//! are kept. The loader knows nothing about instructions: operands are just
//! more lines.

use std::fs;
use std::path::Path;

use crate::common::constants::{MEMORY_SIZE, RESET_VECTOR};
use crate::common::error::LoadError;
use crate::soc::memory::Memory;

/// Parses a base-2 literal of any length, keeping its low eight bits.
///
/// Returns `None` if the token is empty or contains anything but `0` and `1`.
pub fn parse_binary_token(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    Some(token.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0')))
}

/// Parses program text into a memory image.
///
/// # Errors
///
/// `LoadError::MalformedToken` for the first line whose token is not a
/// binary literal. Nothing after it is parsed.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line = line.trim_start();
        if line.starts_with('#') {
            continue;
        }
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let byte = parse_binary_token(token).ok_or_else(|| LoadError::MalformedToken {
            line: idx + 1,
            token: token.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// `LoadError::Io` if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Copies an image into memory starting at address 0.
///
/// # Errors
///
/// `LoadError::ProgramTooLarge` if the image exceeds memory; memory is left
/// untouched in that case.
pub fn load_into(memory: &mut Memory, image: &[u8]) -> Result<(), LoadError> {
    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }
    memory.write_bytes(RESET_VECTOR, image);
    tracing::debug!(bytes = image.len(), "program loaded");
    Ok(())
}
