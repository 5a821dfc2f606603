pub mod cli;
pub mod error;
pub mod sector;

pub use error::SignError;
pub use sector::{
    finalize, pad_and_sign, BootSector, Finalizer, SignConfig, SignReport, BOOT_SIGNATURE,
    MAX_CODE_SIZE, SECTOR_SIZE,
};
