use chrono::{DateTime, Utc};
use semver::Version;

use crate::errors::CommandError;
use crate::types::Release;

pub struct Versions;
impl Versions {
    /// The updates page publishes short versions like "48.2", so missing
    /// minor/patch segments are padded with zeros before parsing.
    pub fn parse_lenient(raw: &str) -> Result<Version, semver::Error> {
        match raw.split('.').count() {
            1 => Version::parse(&format!("{raw}.0.0")),
            2 => Version::parse(&format!("{raw}.0")),
            _ => Version::parse(raw),
        }
    }

    /// Picks the most recent release the license can still unlock.
    ///
    /// Two independent stable passes, not one combined comparator: sort
    /// ascending by version, then reorder descending by release date. The
    /// reverse after the date pass flips same-date entries so the higher
    /// version comes first. The scan then returns the first release dated
    /// strictly before the expiry.
    pub fn find_latest(
        expiry: DateTime<Utc>,
        mut releases: Vec<Release>,
    ) -> Result<Release, CommandError> {
        releases.sort_by(|a, b| a.version.cmp(&b.version));
        releases.sort_by(|a, b| a.release_date.cmp(&b.release_date));
        releases.reverse();

        releases
            .into_iter()
            .find(|release| release.release_date < expiry)
            .ok_or(CommandError::NoEligibleRelease)
    }
}
