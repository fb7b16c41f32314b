//! Release workflow orchestration.
//!
//! Reads the current version from the manifest, computes the next one, and
//! rewrites the four release files in sequence. Each step reads, transforms
//! and writes one file before the next begins; the first failure aborts the
//! remaining steps. There is no rollback: a failure partway through leaves
//! the files rewritten so far updated, which operators must resolve by hand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog;
use crate::config::Config;
use crate::error::Result;
use crate::lockfile;
use crate::manifest;
use crate::pkgbuild;
use crate::version::{Version, VersionBump};

/// Resolved paths of the four files a release rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePaths {
    pub manifest: PathBuf,
    pub lockfile: PathBuf,
    pub pkgbuild: PathBuf,
    pub changelog: PathBuf,
}

impl ReleasePaths {
    /// Resolve configured file names against a working tree root.
    pub fn from_config(root: &Path, config: &Config) -> Self {
        ReleasePaths {
            manifest: root.join(&config.manifest),
            lockfile: root.join(&config.lockfile),
            pkgbuild: root.join(&config.pkgbuild),
            changelog: root.join(&config.changelog),
        }
    }
}

/// Run a release: bump the manifest version and propagate it.
///
/// `release_date` is injected by the caller (ISO-8601) so the core logic
/// never reads the system clock.
///
/// # Returns
/// The new version on success.
pub fn run_release(paths: &ReleasePaths, bump: &VersionBump, release_date: &str) -> Result<Version> {
    let manifest_text = fs::read_to_string(&paths.manifest)?;
    let current = manifest::read_version(&manifest_text)?;
    let next = current.bump(bump);

    fs::write(
        &paths.manifest,
        manifest::write_version(&manifest_text, &next)?,
    )?;

    let lockfile_text = fs::read_to_string(&paths.lockfile)?;
    fs::write(
        &paths.lockfile,
        lockfile::write_version(&lockfile_text, &next)?,
    )?;

    let pkgbuild_text = fs::read_to_string(&paths.pkgbuild)?;
    fs::write(
        &paths.pkgbuild,
        pkgbuild::write_version(&pkgbuild_text, &next)?,
    )?;

    let changelog_text = fs::read_to_string(&paths.changelog)?;
    fs::write(
        &paths.changelog,
        changelog::write_release(&changelog_text, &next, release_date)?,
    )?;

    Ok(next)
}
