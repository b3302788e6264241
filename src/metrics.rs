use crate::types::{FieldChange, FieldChangeStatus, GlobalMetrics, VersionMeta};
use crate::utils::percentage;

/// Summarize classified changes. Page and field counts come from version metadata,
/// not from the change list.
pub fn aggregate(
    field_changes: &[FieldChange],
    source_page_count: u32,
    target_page_count: u32,
    source_field_count: u32,
    target_field_count: u32,
) -> GlobalMetrics {
    let mut metrics = GlobalMetrics {
        page_count_changed: source_page_count != target_page_count,
        field_count_changed: source_field_count != target_field_count,
        ..GlobalMetrics::default()
    };

    for change in field_changes {
        match change.status {
            FieldChangeStatus::Added => metrics.fields_added += 1,
            FieldChangeStatus::Removed => metrics.fields_removed += 1,
            FieldChangeStatus::Modified => metrics.fields_modified += 1,
            FieldChangeStatus::Unchanged => metrics.fields_unchanged += 1,
        }
    }

    metrics.modification_percentage = percentage(metrics.fields_modified, field_changes.len());
    metrics
}

pub fn aggregate_with_meta(
    field_changes: &[FieldChange],
    source: &VersionMeta,
    target: &VersionMeta,
) -> GlobalMetrics {
    aggregate(
        field_changes,
        source.page_count,
        target.page_count,
        source.field_count,
        target.field_count,
    )
}
