pub mod changelog;
pub mod config;
pub mod error;
pub mod lockfile;
pub mod manifest;
pub mod pkgbuild;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
