//! frd - 3DS friend data decoding library.
//!
//! This crate provides a unified interface to the frd library crates.
//!
//! # Crates
//!
//! - [`frd_common`] - Codec building blocks (bit groups, CRC-16, UTF-16 text)
//! - [`frd_mii`] - Mii records and their checksum
//! - [`frd_mydata`] - The friend service `mydata` file and its text dump
//!
//! # Example
//!
//! ```no_run
//! use frd::prelude::*;
//!
//! let data = MyData::from_file("mydata")?;
//! let mii = data.mii_data.mii_data();
//! println!("{} by {}", mii.name(), mii.author());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use frd_common as common;
pub use frd_mii as mii;
pub use frd_mydata as mydata;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use frd_common::{crc, FixedRecord, Utf16Text};
    pub use frd_mii::{ChecksummedMiiData, MiiData};
    pub use frd_mydata::{serial, Dump, FriendProfile, MyData};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
