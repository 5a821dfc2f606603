// src/sector.rs
//! Boot sector finalizer
//!
//! Takes a raw boot block, checks that it fits in the code area of a
//! legacy BIOS boot sector, zero-pads it to 510 bytes and stamps the
//! 0x55AA boot signature at offsets 510 and 511.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SignError;

/// Size of a legacy BIOS boot sector
pub const SECTOR_SIZE: usize = 512;

/// Bytes available for boot code in front of the signature
pub const MAX_CODE_SIZE: usize = SECTOR_SIZE - BOOT_SIGNATURE.len();

/// Magic bytes the BIOS looks for at offset 510
pub const BOOT_SIGNATURE: [u8; 2] = [0x55, 0xAA];

// ========== SECTOR BUFFER ==========

/// A complete, signed 512-byte boot sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSector {
    bytes: [u8; SECTOR_SIZE],
    code_len: usize,
}

impl BootSector {
    pub fn as_bytes(&self) -> &[u8; SECTOR_SIZE] {
        &self.bytes
    }

    /// Length of the boot code the sector was built from
    pub fn code_len(&self) -> usize {
        self.code_len
    }

    /// Zero bytes inserted between the code and the signature
    pub fn padding_len(&self) -> usize {
        MAX_CODE_SIZE - self.code_len
    }

    pub fn signature(&self) -> [u8; 2] {
        [self.bytes[MAX_CODE_SIZE], self.bytes[MAX_CODE_SIZE + 1]]
    }
}

/// Pad `code` with zeros up to 510 bytes and append the boot signature.
pub fn pad_and_sign(code: &[u8]) -> Result<BootSector, SignError> {
    if code.len() > MAX_CODE_SIZE {
        return Err(SignError::TooLarge {
            size: code.len(),
            max: MAX_CODE_SIZE,
        });
    }

    // Everything past the code stays zero
    let mut bytes = [0u8; SECTOR_SIZE];
    bytes[..code.len()].copy_from_slice(code);

    // Boot signature
    bytes[MAX_CODE_SIZE..].copy_from_slice(&BOOT_SIGNATURE);

    Ok(BootSector {
        bytes,
        code_len: code.len(),
    })
}

// ========== FILE ACCESS ==========

pub fn read_boot_block(path: &Path) -> Result<Vec<u8>, SignError> {
    fs::read(path).map_err(|e| SignError::io(format!("failed to read {}", path.display()), e))
}

/// Replace the contents of `path` with the signed sector.
///
/// The file is truncated and rewritten in place; a failure halfway
/// leaves it in whatever state the platform left it.
pub fn write_boot_sector(path: &Path, sector: &BootSector) -> Result<(), SignError> {
    fs::write(path, sector.as_bytes())
        .map_err(|e| SignError::io(format!("failed to write {}", path.display()), e))
}

// ========== FINALIZER ==========

/// Settings for a signing run
#[derive(Debug, Clone, Default)]
pub struct SignConfig {
    /// Build the sector but leave the file untouched
    pub dry_run: bool,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignReport {
    pub path: PathBuf,
    pub code_size: usize,
    pub padding: usize,
    pub sector_size: usize,
    pub written: bool,
}

/// Runs one file through validation and then the in-place rewrite.
pub struct Finalizer {
    pub config: SignConfig,
}

impl Finalizer {
    pub fn new(config: SignConfig) -> Self {
        Self { config }
    }

    /// Sign the boot block at `path`.
    ///
    /// `on_validated` is called with the boot block length once it is
    /// known to fit, before anything is written.
    pub fn run<F>(&self, path: &Path, on_validated: F) -> Result<(BootSector, SignReport), SignError>
    where
        F: FnOnce(usize),
    {
        // Validating
        let code = read_boot_block(path)?;
        let sector = pad_and_sign(&code)?;
        on_validated(sector.code_len());

        // Writing
        if !self.config.dry_run {
            write_boot_sector(path, &sector)?;
        }

        let report = SignReport {
            path: path.to_path_buf(),
            code_size: sector.code_len(),
            padding: sector.padding_len(),
            sector_size: SECTOR_SIZE,
            written: !self.config.dry_run,
        };

        Ok((sector, report))
    }
}

/// Sign the boot block at `path` in place with default settings.
pub fn finalize(path: &Path) -> Result<SignReport, SignError> {
    Finalizer::new(SignConfig::default())
        .run(path, |_| {})
        .map(|(_, report)| report)
}

// ========== TESTS ==========
