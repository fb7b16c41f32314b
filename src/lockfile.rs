//! Lockfile self-record version rewriting.
//!
//! Cargo.lock carries one `[[package]]` record per resolved crate, including
//! one for this package itself. Only that self-record's version is rewritten;
//! every other record keeps its bytes.

use crate::error::{ReleaseError, Result};
use crate::version::Version;
use regex::Regex;

/// The lockfile record rewritten is always this package's own.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Replace the version inside the `[[package]]` block naming this package.
///
/// Matches the exact block shape `[[package]]` / `name = "..."` /
/// `version = "X.Y.Z"` and rewrites only the version value between the
/// captured delimiters.
pub fn write_version(text: &str, version: &Version) -> Result<String> {
    let pattern = format!(
        r#"(\[\[package\]\]\nname = "{}"\nversion = ")\d+\.\d+\.\d+("\n)"#,
        regex::escape(PACKAGE_NAME)
    );
    let re = Regex::new(&pattern)?;
    let updated = re
        .replace(text, format!("${{1}}{}${{2}}", version))
        .into_owned();
    if updated == text {
        return Err(ReleaseError::rewrite_failed(format!(
            "lockfile record for '{}' was not updated",
            PACKAGE_NAME
        )));
    }
    Ok(updated)
}
