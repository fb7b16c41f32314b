//! Changelog section splicing.
//!
//! Promotes the `## [Unreleased]` section of a Keep-a-Changelog style
//! document into a dated release section and resets the unreleased section
//! to an empty template. Content outside the unreleased body span is
//! reproduced byte-for-byte.

use crate::error::{ReleaseError, Result};
use crate::version::Version;
use regex::Regex;

/// Section header marker, anchored per line.
const SECTION_HEADER: &str = r"(?m)^## \[.*?\]";

const UNRELEASED_HEADER: &str = "## [Unreleased]";

/// Template the unreleased section is reset to after a release.
const RESET_TEMPLATE: &str = "\n\n### Added\n\n### Changed\n\n### Fixed\n";

/// Body used when the unreleased section has no entries to promote.
const PLACEHOLDER_BODY: &str = "### Added\n- Automated release.";

/// Splice a new release section into changelog text.
///
/// The unreleased body is extracted, promoted under a
/// `## [<version>] - <release_date>` header, and the unreleased section is
/// reset. Sections before and after the unreleased span keep their relative
/// order, so the new release lands immediately after the reset template even
/// when the unreleased section is not the first in the document.
pub fn write_release(text: &str, version: &Version, release_date: &str) -> Result<String> {
    let re = Regex::new(SECTION_HEADER)?;
    let headers: Vec<regex::Match> = re.find_iter(text).collect();
    let unreleased_index = headers
        .iter()
        .position(|m| m.as_str() == UNRELEASED_HEADER)
        .ok_or_else(|| ReleaseError::unreleased_missing("changelog has no ## [Unreleased] header"))?;

    let body_start = headers[unreleased_index].end();
    let body_end = headers
        .get(unreleased_index + 1)
        .map(|m| m.start())
        .unwrap_or(text.len());

    let release_body = text[body_start..body_end].trim_matches('\n').trim();
    let release_body = if release_body.is_empty() || !has_entries(release_body) {
        PLACEHOLDER_BODY
    } else {
        release_body
    };

    let release_section = format!(
        "\n## [{}] - {}\n\n{}\n",
        version, release_date, release_body
    );

    let mut updated = String::with_capacity(text.len() + release_section.len());
    updated.push_str(&text[..headers[unreleased_index].start()]);
    updated.push_str(UNRELEASED_HEADER);
    updated.push_str(RESET_TEMPLATE);
    updated.push_str(&release_section);
    updated.push_str(&text[body_end..]);
    Ok(updated)
}

/// Whether a trimmed unreleased body holds any actual entry.
///
/// Scans line by line; the first non-blank line that is not a `### `
/// sub-heading makes the whole body non-empty. Bodies made only of blank
/// lines and category sub-headings have nothing to promote.
fn has_entries(body: &str) -> bool {
    for line in body.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with("### ") {
            continue;
        }
        return true;
    }
    false
}
