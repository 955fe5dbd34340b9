//! Filesystem primitives for the robots.txt manager
//!
//! Provides the two write disciplines the manager needs:
//!
//! - [`io::overwrite_in_place`] for the managed `robots.txt` file, which must
//!   already exist and keep its inode and permissions across rewrites.
//! - [`io::write_atomic`] for the settings record, where
//!   write-to-temp-then-rename is the right call.
//!
//! [`ConfigStore`] layers format detection and serde on top of the atomic
//! write for loading and saving configuration files.

pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
