use tracing::{debug, warn};

use crate::attributes::{diff_attributes, AttributeDiffs};
use crate::classify::classify;
use crate::error::{CompareError, Result};
use crate::matcher::{match_fields, FieldSet};
use crate::metrics::aggregate_with_meta;
use crate::types::*;

/// Compare two versions' field sets.
///
/// Pure and deterministic: the same inputs always produce the same result,
/// with `field_changes` sorted by `field_id`.
pub fn compare(
    source_version_id: &str,
    target_version_id: &str,
    source_fields: &[FieldRecord],
    target_fields: &[FieldRecord],
    source_meta: &VersionMeta,
    target_meta: &VersionMeta,
    tolerance: PositionTolerance,
) -> Result<ComparisonResult> {
    ensure_distinct_versions(source_version_id, target_version_id)?;

    let field_match = match_fields(
        FieldSet::new(source_version_id, source_fields),
        FieldSet::new(target_version_id, target_fields),
    )?;

    let diffs: Vec<AttributeDiffs> = field_match
        .matched
        .iter()
        .map(|&(source, target)| diff_attributes(source, target, tolerance))
        .collect();

    let mut field_changes = classify(&field_match, diffs);
    field_changes.sort_by(|a, b| a.field_id.cmp(&b.field_id));

    let global_metrics = aggregate_with_meta(&field_changes, source_meta, target_meta);

    debug!(
        source_version = source_version_id,
        target_version = target_version_id,
        added = global_metrics.fields_added,
        removed = global_metrics.fields_removed,
        modified = global_metrics.fields_modified,
        unchanged = global_metrics.fields_unchanged,
        modification_percentage = global_metrics.modification_percentage,
        "Comparison complete"
    );

    Ok(ComparisonResult {
        source_version_id: source_version_id.to_string(),
        target_version_id: target_version_id.to_string(),
        global_metrics,
        field_changes,
    })
}

pub fn compare_with_options(
    source_version_id: &str,
    target_version_id: &str,
    source_fields: &[FieldRecord],
    target_fields: &[FieldRecord],
    source_meta: &VersionMeta,
    target_meta: &VersionMeta,
    options: &CompareOptions,
) -> Result<ComparisonResult> {
    compare(
        source_version_id,
        target_version_id,
        source_fields,
        target_fields,
        source_meta,
        target_meta,
        options.tolerance,
    )
}

pub fn compare_request(request: &ComparisonRequest) -> Result<ComparisonResult> {
    compare_with_options(
        &request.source_version_id,
        &request.target_version_id,
        &request.source_fields,
        &request.target_fields,
        &request.source_meta,
        &request.target_meta,
        &request.options,
    )
}

pub(crate) fn ensure_distinct_versions(source_version_id: &str, target_version_id: &str) -> Result<()> {
    if source_version_id == target_version_id {
        warn!(version = source_version_id, "Refusing to compare a version against itself");
        return Err(CompareError::IdenticalVersions {
            version_id: source_version_id.to_string(),
        });
    }
    Ok(())
}
