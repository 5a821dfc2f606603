// src/cli/parser.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::SignError;
use crate::sector::SignConfig;

/// BIOS boot sector signer
#[derive(Parser, Debug)]
#[command(
    name = "bootsign",
    version = env!("CARGO_PKG_VERSION"),
    author = "Bit Jumper Studio",
    about = "Pad a raw boot block to 510 bytes and append the 0x55AA boot signature",
    long_about = r#"
bootsign - BIOS boot sector signer
==================================

Options go before FILEPATH; anything after it is ignored.

Rewrites FILEPATH in place as a 512-byte legacy boot sector:

• boot code (at most 510 bytes)
• zero padding up to offset 510
• boot signature 0x55 0xAA at offsets 510-511

A file that is already 512 bytes is rejected, so an image cannot be
signed twice.
"#
)]
pub struct Cli {
    /// Raw boot block to sign in place
    #[arg(value_name = "FILEPATH", allow_hyphen_values = true)]
    pub filepath: PathBuf,

    /// Everything after FILEPATH is accepted and ignored
    #[arg(
        value_name = "IGNORED",
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<OsString>,

    /// Build the sector but do not write it back
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary after signing
    #[arg(long)]
    pub json: bool,

    /// Dump the tail of the signed sector
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse `args` (program name first).
    ///
    /// Returns `Ok(None)` when clap already printed help or version text.
    pub fn try_parse_args<I, T>(args: I) -> Result<Option<Self>, SignError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match <Cli as Parser>::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.print()
                    .map_err(|io| SignError::io("failed to print help", io))?;
                Ok(None)
            }
            Err(e) => Err(SignError::Usage(e.render().to_string())),
        }
    }

    pub fn config(&self) -> SignConfig {
        SignConfig {
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_usage_error() {
        let err = Cli::try_parse_args(["bootsign"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("Usage:"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_first_positional_is_path() {
        let cli = Cli::try_parse_args(["bootsign", "boot.bin", "extra", "more"])
            .unwrap()
            .unwrap();

        assert_eq!(cli.filepath, PathBuf::from("boot.bin"));
        assert_eq!(cli.ignored.len(), 2);
        assert!(!cli.dry_run);
        assert!(!cli.config().dry_run);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_args(["bootsign", "--dry-run", "--json", "--verbose", "boot.bin"])
            .unwrap()
            .unwrap();

        assert!(cli.dry_run);
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(cli.config().dry_run);
    }

    #[test]
    fn test_arguments_after_path_are_ignored() {
        let cli = Cli::try_parse_args(["bootsign", "boot.bin", "--foo", "-x", "--json", "--help"])
            .unwrap()
            .unwrap();

        assert_eq!(cli.filepath, PathBuf::from("boot.bin"));
        assert_eq!(cli.ignored.len(), 4);
        assert!(!cli.json);
    }

    #[test]
    fn test_hyphenated_path() {
        let cli = Cli::try_parse_args(["bootsign", "-boot.bin"]).unwrap().unwrap();
        assert_eq!(cli.filepath, PathBuf::from("-boot.bin"));
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn test_options_without_path_is_usage_error() {
        let err = Cli::try_parse_args(["bootsign", "--json", "--dry-run"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn test_command_definition() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}
