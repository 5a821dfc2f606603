//! bootsign entry point

use colored::*;

fn main() {
    if let Err(e) = bootsign::cli::run() {
        if e.is_usage() {
            eprintln!("{}", e);
        } else {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        std::process::exit(e.exit_code());
    }
}
