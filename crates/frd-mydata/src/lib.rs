//! Parser for the 3DS friend service `mydata` file.
//!
//! `mydata` holds the local user's friend profile: comment, screen name,
//! console serial number, friend code seed and the user's own Mii. The file
//! is exactly 0x120 bytes with a fixed layout (see [`MyData`]).
//!
//! # Example
//!
//! ```no_run
//! use frd_mydata::{Dump, MyData};
//!
//! let data = MyData::from_file("mydata")?;
//! data.check_magic()?;
//!
//! println!("Screen name: {}", data.display_name());
//! println!("Mii checksum valid: {}", data.mii_data.is_checksum_valid());
//! print!("{}", Dump::from_my_data(&data));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod mydata;
mod profile;

pub mod dump;
pub mod serial;

pub use dump::{Dump, DumpEntry, DumpSection};
pub use error::{Error, Result};
pub use mydata::{
    MyData, FRIEND_COMMENT_SIZE, FRIEND_SCREEN_NAME_SIZE, HEX_IDENTIFIER_SIZE, MAGIC_MY_DATA,
    MAGIC_NUMBER, MYDATA_SIZE, SERIAL_NUMBER_SIZE,
};
pub use profile::FriendProfile;
