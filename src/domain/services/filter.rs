//! Artifact filtering by id

use std::collections::HashSet;

use crate::domain::entities::ArtifactDescriptor;
use crate::domain::value_objects::IdFilter;
use crate::error::{CpiError, CpiResult};

/// Apply an include or exclude list to the enumerated artifacts
///
/// - `included` non-empty: exactly those ids, in the order given
/// - `excluded` non-empty: all artifacts minus those ids, original order kept
/// - neither: `all` unchanged
///
/// Every listed id must exist in `all`, otherwise the whole call fails.
pub fn filter_artifacts(
    all: Vec<ArtifactDescriptor>,
    included: &[String],
    excluded: &[String],
    package_id: &str,
) -> CpiResult<Vec<ArtifactDescriptor>> {
    if !included.is_empty() && !excluded.is_empty() {
        return Err(CpiError::ConflictingFilters);
    }

    let unknown = |id: &String| CpiError::UnknownArtifactId {
        id: id.clone(),
        package_id: package_id.to_string(),
    };

    if !included.is_empty() {
        return included
            .iter()
            .map(|id| {
                all.iter()
                    .find(|a| a.id() == id)
                    .cloned()
                    .ok_or_else(|| unknown(id))
            })
            .collect();
    }

    if !excluded.is_empty() {
        if let Some(missing) = excluded.iter().find(|id| !all.iter().any(|a| a.id() == *id)) {
            return Err(unknown(missing));
        }
        let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
        return Ok(all
            .into_iter()
            .filter(|a| !excluded.contains(a.id()))
            .collect());
    }

    Ok(all)
}

/// [`filter_artifacts`] driven by an [`IdFilter`]
pub fn apply_filter(
    all: Vec<ArtifactDescriptor>,
    filter: &IdFilter,
    package_id: &str,
) -> CpiResult<Vec<ArtifactDescriptor>> {
    filter_artifacts(all, filter.included(), filter.excluded(), package_id)
}
