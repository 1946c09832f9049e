//! File-backed lookup tables for container identification codes.
//!
//! All tables live in one data directory. Missing files are created from
//! the defaults embedded in this crate, so a fresh installation works
//! without any download.

#![deny(unsafe_code)]

pub mod categories;
pub mod data;
pub mod download;
pub mod error;
pub mod owners;
pub mod paths;
pub mod sizes;
pub mod timestamp;
pub mod types;

pub use crate::categories::CategoryTable;
pub use crate::data::{Tables, init_file, load_tables};
pub use crate::download::{HttpOwnerSource, OwnerSource, update_owner_file};
pub use crate::error::{Result, StandardsError};
pub use crate::owners::{OwnerRegistry, parse_owners, write_owners_csv};
pub use crate::paths::{AppDirs, HOME_ENV_VAR};
pub use crate::sizes::SizeTable;
pub use crate::timestamp::{DOWNLOAD_TIMEOUT, TimestampGate};
pub use crate::types::TypeTable;
