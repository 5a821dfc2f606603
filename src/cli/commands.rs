// src/cli/commands.rs
use colored::*;

use crate::cli::parser::Cli;
use crate::error::SignError;
use crate::sector::{BootSector, Finalizer, SignReport, SECTOR_SIZE};

/// Bytes shown by `--verbose`, counted back from the end of the sector
const DUMP_TAIL: usize = 32;

/// Command executor trait
pub trait CommandExecutor {
    fn execute(&self) -> Result<(), SignError>;
}

impl CommandExecutor for Cli {
    fn execute(&self) -> Result<(), SignError> {
        let finalizer = Finalizer::new(self.config());

        let (sector, report) = finalizer.run(&self.filepath, |len| {
            println!("{}", format!("boot block is {} bytes", len).cyan());
        })?;

        if !report.written {
            println!(
                "{} {} left untouched",
                "dry run:".yellow().bold(),
                self.filepath.display()
            );
        }

        if self.verbose {
            print!("{}", dump_tail(&sector, DUMP_TAIL));
        }

        if self.json {
            println!("{}", render_report(&report)?);
        }

        Ok(())
    }
}

/// Hex dump of the last `count` bytes of the sector, eight per row.
pub fn dump_tail(sector: &BootSector, count: usize) -> String {
    let start = SECTOR_SIZE - count.min(SECTOR_SIZE);
    let mut out = String::new();

    for (i, byte) in sector.as_bytes().iter().enumerate().skip(start) {
        if (i - start) % 8 == 0 {
            if i != start {
                out.push('\n');
            }
            out.push_str(&format!("{:04X}: ", i));
        }
        out.push_str(&format!("{:02X} ", byte));
    }
    out.push('\n');
    out
}

pub fn render_report(report: &SignReport) -> Result<String, SignError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| SignError::io("failed to encode report", e.into()))
}
