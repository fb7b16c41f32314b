//! Packaging recipe (PKGBUILD) version rewriting.

use crate::error::{ReleaseError, Result};
use crate::version::Version;
use regex::Regex;

const PKGVER_LINE: &str = r"(?m)^pkgver=.*$";

/// Replace the first `pkgver=` line with the new version.
pub fn write_version(text: &str, version: &Version) -> Result<String> {
    let re = Regex::new(PKGVER_LINE)?;
    let updated = re
        .replace(text, format!("pkgver={}", version))
        .into_owned();
    if updated == text {
        return Err(ReleaseError::rewrite_failed(
            "pkgver line in packaging recipe was not updated",
        ));
    }
    Ok(updated)
}
