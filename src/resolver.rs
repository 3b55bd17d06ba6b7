//! Selection of a concrete record for a package name
//!
//! Only the root package honours a requested version. Every other lookup
//! during graph construction takes the first record for a name, regardless
//! of any version a dependent may want.

use tracing::warn;

use crate::core::PackageRecord;
use crate::error::DepGraphError;
use crate::index::PackageIndex;

/// Outcome of resolving the root package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub record: &'a PackageRecord,
    /// Set when a version was requested but not present, so the first
    /// record was used instead.
    pub fell_back: bool,
}

pub struct PackageResolver<'a> {
    index: &'a PackageIndex,
}

impl<'a> PackageResolver<'a> {
    pub fn new(index: &'a PackageIndex) -> Self {
        Self { index }
    }

    /// Resolve `name`, preferring an exact `version` match.
    ///
    /// Falls back to the first record for the name (with a warning) when the
    /// version is absent, and fails only if the name is unknown.
    pub fn resolve(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Resolution<'a>, DepGraphError> {
        let records = self.index.records(name);

        let Some((record, fell_back)) = select_record(records, version) else {
            return Err(DepGraphError::PackageNotFound {
                name: name.to_string(),
                version: version.map(str::to_string),
            });
        };

        if fell_back {
            warn!(
                package = name,
                requested = version.unwrap_or_default(),
                selected = record.version(),
                "package {} version {} not found, using version {}",
                name,
                version.unwrap_or_default(),
                record.version()
            );
        }

        Ok(Resolution { record, fell_back })
    }
}

/// Exact version match if requested and present, otherwise the first record.
///
/// The flag is true when a requested version had to be replaced.
pub(crate) fn select_record<'r>(
    records: &'r [PackageRecord],
    version: Option<&str>,
) -> Option<(&'r PackageRecord, bool)> {
    let first = records.first()?;

    match version {
        Some(wanted) => Some(
            records
                .iter()
                .find(|record| record.version() == wanted)
                .map_or((first, true), |exact| (exact, false)),
        ),
        None => Some((first, false)),
    }
}
