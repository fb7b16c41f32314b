//! Package manifest version rewriting.
//!
//! Reads and rewrites the `version = "X.Y.Z"` declaration in Cargo.toml.
//! The rewrite is textual so every other byte of the manifest is preserved.

use crate::error::{ReleaseError, Result};
use crate::version::Version;
use regex::Regex;

/// Version declaration anchored at line start, dotted triple in double quotes.
const VERSION_LINE: &str = r#"(?m)^version\s*=\s*"(\d+\.\d+\.\d+)""#;

/// Read the current version from manifest text.
pub fn read_version(text: &str) -> Result<Version> {
    let re = Regex::new(VERSION_LINE)?;
    let captures = re
        .captures(text)
        .ok_or_else(|| ReleaseError::version_not_found("no version declaration in manifest"))?;
    Version::parse(&captures[1])
}

/// Replace the first version declaration with `version`.
///
/// Fails if the replacement would be a no-op, so a missing or already
/// up-to-date declaration is never silently skipped.
pub fn write_version(text: &str, version: &Version) -> Result<String> {
    let re = Regex::new(VERSION_LINE)?;
    let updated = re
        .replace(text, format!("version = \"{}\"", version))
        .into_owned();
    if updated == text {
        return Err(ReleaseError::rewrite_failed(
            "manifest version declaration was not updated",
        ));
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = "[package]\nname = \"relcut\"\nversion = \"0.9.0\"\nedition = \"2021\"\n";

    #[test]
    fn test_read_version() {
        let v = read_version(MANIFEST).unwrap();
        assert_eq!(v, Version::new(0, 9, 0));
    }

    #[test]
    fn test_read_version_missing() {
        let err = read_version("[package]\nname = \"relcut\"\n").unwrap_err();
        assert!(matches!(err, ReleaseError::VersionNotFound(_)));
    }

    #[test]
    fn test_read_version_ignores_mid_line_matches() {
        // A dependency line mentioning "version" must not satisfy the anchor.
        let text = "[dependencies]\nserde = { version = \"1.0.0\" }\n";
        assert!(read_version(text).is_err());
    }

    #[test]
    fn test_write_version() {
        let updated = write_version(MANIFEST, &Version::new(1, 0, 0)).unwrap();
        assert!(updated.contains("version = \"1.0.0\""));
        assert!(!updated.contains("0.9.0"));
    }

    #[test]
    fn test_write_version_preserves_other_lines() {
        let updated = write_version(MANIFEST, &Version::new(1, 0, 0)).unwrap();
        assert_eq!(
            updated,
            "[package]\nname = \"relcut\"\nversion = \"1.0.0\"\nedition = \"2021\"\n"
        );
    }

    #[test]
    fn test_write_version_replaces_first_match_only() {
        let text = format!("{}\n[workspace.package]\nversion = \"0.9.0\"\n", MANIFEST);
        let updated = write_version(&text, &Version::new(1, 0, 0)).unwrap();
        assert_eq!(updated.matches("version = \"1.0.0\"").count(), 1);
        assert_eq!(updated.matches("version = \"0.9.0\"").count(), 1);
    }

    #[test]
    fn test_write_version_is_deterministic() {
        let a = write_version(MANIFEST, &Version::new(1, 0, 0)).unwrap();
        let b = write_version(MANIFEST, &Version::new(1, 0, 0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_version_noop_fails() {
        let err = write_version(MANIFEST, &Version::new(0, 9, 0)).unwrap_err();
        assert!(matches!(err, ReleaseError::RewriteFailed(_)));
    }

    #[test]
    fn test_write_version_no_declaration_fails() {
        let err = write_version("pkgname=relcut\n", &Version::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, ReleaseError::RewriteFailed(_)));
    }
}
